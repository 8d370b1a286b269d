pub mod algorithm;
pub mod errors;
pub mod escape_time;
pub mod fractal_kinds;
