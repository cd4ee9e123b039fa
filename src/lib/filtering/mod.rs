pub mod exponential;
