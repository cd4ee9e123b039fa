pub mod angle_filter;
pub mod euler;
