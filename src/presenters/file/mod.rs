pub mod bmp;
pub mod factory;
pub mod kinds;
pub mod ppm;
