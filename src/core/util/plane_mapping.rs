use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} image",
                    point.x,
                    point.y,
                    pixel_rect.width(),
                    pixel_rect.height()
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Axis-aligned affine map from pixels to the complex plane.
///
/// Pixel `(px, py)` lands on `(x_min + px * dx, y_min + py * dy)` with
/// `dx = width(viewport) / width(image)`. The far edge of the viewport is never
/// sampled, and no aspect correction is applied.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneMapping {
    pixel_rect: PixelRect,
    origin: Complex,
    dx: f64,
    dy: f64,
}

impl PlaneMapping {
    #[must_use]
    pub fn new(pixel_rect: PixelRect, viewport: Viewport) -> Self {
        Self {
            pixel_rect,
            origin: Complex::new(viewport.x_min(), viewport.y_min()),
            dx: viewport.width() / f64::from(pixel_rect.width()),
            dy: viewport.height() / f64::from(pixel_rect.height()),
        }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn dx(&self) -> f64 {
        self.dx
    }

    #[must_use]
    pub fn dy(&self) -> f64 {
        self.dy
    }

    pub fn pixel_to_complex(&self, pixel: Point) -> Result<Complex, PixelToComplexCoordsError> {
        if !self.pixel_rect.contains_point(pixel) {
            return Err(PixelToComplexCoordsError::PointOutsideRect {
                point: pixel,
                pixel_rect: self.pixel_rect,
            });
        }

        Ok(Complex {
            real: self.origin.real + f64::from(pixel.x) * self.dx,
            imag: self.origin.imag + f64::from(pixel.y) * self.dy,
        })
    }
}
