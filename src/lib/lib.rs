// Throttled orientation angle filtering: quaternion-to-Euler conversion with
// wraparound-safe exponential smoothing. The host sensor layer feeds raw unit
// quaternions in and forwards the returned angle triples downstream.

#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod filtering;
pub mod orientation;
