pub mod grayscale;
pub mod smooth_gradient;
