use crate::core::actions::render_raster::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::errors::FractalError;
use crate::core::fractals::escape_time::escape_count;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::util::plane_mapping::{PixelToComplexCoordsError, PlaneMapping};

/// Per-pixel escape-time evaluation for any [`FractalKind`].
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeTimeAlgorithm {
    kind: FractalKind,
    mapping: PlaneMapping,
    max_iterations: u32,
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = u32;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let sample = self.mapping.pixel_to_complex(pixel)?;

        // Mandelbrot iterates from the origin with c = sample, Julia from the sample with a fixed c
        let (z0, c) = match self.kind.recurrence_constant() {
            Some(constant) => (sample, constant),
            None => (Complex::ZERO, sample),
        };

        Ok(escape_count(z0, c, self.max_iterations))
    }

    fn pixel_rect(&self) -> PixelRect {
        self.mapping.pixel_rect()
    }
}

impl EscapeTimeAlgorithm {
    pub fn new(
        kind: FractalKind,
        pixel_rect: PixelRect,
        viewport: Viewport,
        max_iterations: u32,
    ) -> Result<Self, FractalError> {
        if max_iterations == 0 {
            return Err(FractalError::ZeroMaxIterations);
        }

        Ok(Self {
            kind,
            mapping: PlaneMapping::new(pixel_rect, viewport),
            max_iterations,
        })
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        self.kind
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mandelbrot_100() -> EscapeTimeAlgorithm {
        EscapeTimeAlgorithm::new(
            FractalKind::Mandelbrot,
            PixelRect::new(100, 100).unwrap(),
            Viewport::new(-2.0, 1.0, -1.0, 1.0).unwrap(),
            50,
        )
        .unwrap()
    }

    #[test]
    fn test_max_iterations_must_be_greater_than_zero() {
        let algorithm = EscapeTimeAlgorithm::new(
            FractalKind::JuliaClassic,
            PixelRect::new(10, 10).unwrap(),
            FractalKind::JuliaClassic.default_viewport(),
            0,
        );

        assert_eq!(algorithm, Err(FractalError::ZeroMaxIterations));
    }

    #[test]
    fn test_mandelbrot_pixel_nearest_origin_is_bounded() {
        let algorithm = mandelbrot_100();

        // x = -2 + 67 * 0.03 ~ 0.01, y = -1 + 50 * 0.02 = 0
        assert_eq!(algorithm.compute(Point { x: 67, y: 50 }), Ok(50));
    }

    #[test]
    fn test_mandelbrot_corner_escapes_immediately() {
        let algorithm = mandelbrot_100();

        // c = -2 - i, first step lands on |z| = |c| > 2
        assert_eq!(algorithm.compute(Point { x: 0, y: 0 }), Ok(1));
    }

    #[test]
    fn test_julia_uses_pixel_as_starting_point() {
        let pixel_rect = PixelRect::new(4, 4).unwrap();
        let viewport = Viewport::new(-4.0, 4.0, -4.0, 4.0).unwrap();
        let algorithm =
            EscapeTimeAlgorithm::new(FractalKind::JuliaClassic, pixel_rect, viewport, 100)
                .unwrap();

        // pixel (0, 0) maps to -4 - 4i which is already outside the escape radius
        assert_eq!(algorithm.compute(Point { x: 0, y: 0 }), Ok(0));
    }

    #[test]
    fn test_julia_neuron_origin_is_bounded() {
        let pixel_rect = PixelRect::new(4, 4).unwrap();
        let viewport = Viewport::new(-2.0, 2.0, -2.0, 2.0).unwrap();
        let algorithm =
            EscapeTimeAlgorithm::new(FractalKind::JuliaNeuron, pixel_rect, viewport, 200)
                .unwrap();

        // pixel (2, 2) maps to 0 + 0i
        assert_eq!(algorithm.compute(Point { x: 2, y: 2 }), Ok(200));
    }

    #[test]
    fn test_compute_returns_error_for_pixel_outside_pixel_rect() {
        let algorithm = mandelbrot_100();
        let point = Point { x: 100, y: 0 };

        assert_eq!(
            algorithm.compute(point),
            Err(PixelToComplexCoordsError::PointOutsideRect {
                point,
                pixel_rect: algorithm.pixel_rect()
            })
        );
    }
}
