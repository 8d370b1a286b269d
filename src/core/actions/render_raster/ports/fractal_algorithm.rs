use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;

/// A per-pixel computation over a fixed raster. `compute` must depend only on
/// `pixel`, so the renderer may call it from any worker in any order.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn pixel_rect(&self) -> PixelRect;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
