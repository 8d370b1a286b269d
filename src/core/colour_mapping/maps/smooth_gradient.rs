use crate::core::actions::render_raster::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::{ColourMapError, check_iterations};
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::colour_mapping::map::{IterationColourMap, unit_to_channel};
use crate::core::colour_mapping::palette::Palette;
use crate::core::data::colour::Colour;

/// Polynomial blend of `t = iterations / max_iterations`: dark, through red
/// and yellow, fading out to blue near the set.
///
/// Callers must keep `iterations < max_iterations`; interior points are not
/// special-cased here.
#[must_use]
pub fn smooth_gradient_colour(iterations: u32, max_iterations: u32) -> Colour {
    let t = f64::from(iterations) / f64::from(max_iterations);
    let s = 1.0 - t;

    Colour {
        r: unit_to_channel(9.0 * s * t * t * t),
        g: unit_to_channel(15.0 * s * s * t * t),
        b: unit_to_channel(8.5 * s * s * s * t),
    }
}

/// Smooth gradient backed by a palette built once at construction.
#[derive(Debug, Clone)]
pub struct SmoothGradient {
    palette: Palette,
}

impl ColourMap<u32> for SmoothGradient {
    type Failure = ColourMapError;

    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        check_iterations(iterations, self.palette.max_iterations())?;

        Ok(self.palette.colour(iterations).unwrap_or(Colour::BLACK))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl IterationColourMap for SmoothGradient {
    fn kind(&self) -> ColourMapKind {
        ColourMapKind::SmoothGradient
    }
}

impl SmoothGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self {
            palette: Palette::build(max_iterations, smooth_gradient_colour),
        }
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_returns_black_at_max_iterations() {
        let mapper = SmoothGradient::new(100);

        assert_eq!(mapper.map(100), Ok(Colour::BLACK));
    }

    #[test]
    fn test_map_returns_black_at_zero_iterations() {
        let mapper = SmoothGradient::new(100);

        assert_eq!(mapper.map(0), Ok(Colour::BLACK));
    }

    #[test]
    fn test_map_midpoint_gradient() {
        // R = round(255 * 9 * 0.5 * 0.125) = round(143.44)
        let mapper = SmoothGradient::new(100);

        assert_eq!(
            mapper.map(50),
            Ok(Colour {
                r: 143,
                g: 239,
                b: 135
            })
        );
    }

    #[test]
    fn test_map_quarter_gradient() {
        let mapper = SmoothGradient::new(100);

        assert_eq!(
            mapper.map(25),
            Ok(Colour {
                r: 27,
                g: 134,
                b: 229
            })
        );
    }

    #[test]
    fn test_red_peaks_near_three_quarters() {
        let mapper = SmoothGradient::new(100);
        let reds: Vec<u8> = (0..100).map(|i| mapper.map(i).unwrap().r).collect();
        let peak = reds
            .iter()
            .enumerate()
            .max_by_key(|&(_, r)| *r)
            .map(|(i, _)| i)
            .unwrap();

        assert_eq!(mapper.map(75).unwrap().r, 242);
        assert!((70..=80).contains(&peak), "red peaked at {}", peak);
        assert!(reds[99] < reds[75]);
    }

    #[test]
    fn test_map_is_pure() {
        let mapper = SmoothGradient::new(256);

        for i in 0..=256 {
            assert_eq!(mapper.map(i), mapper.map(i));
        }
    }

    #[test]
    fn test_palette_matches_inline_formula() {
        let max_iterations = 1000;
        let mapper = SmoothGradient::new(max_iterations);

        for i in 0..max_iterations {
            assert_eq!(
                mapper.map(i).unwrap(),
                smooth_gradient_colour(i, max_iterations)
            );
        }
    }

    #[test]
    fn test_map_returns_error_when_iterations_exceed_max() {
        let mapper = SmoothGradient::new(100);

        assert_eq!(
            mapper.map(101),
            Err(ColourMapError::IterationsExceedMax {
                iterations: 101,
                max_iterations: 100
            })
        );
    }
}
