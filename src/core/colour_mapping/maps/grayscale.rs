use crate::core::actions::render_raster::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::{ColourMapError, check_iterations};
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::colour_mapping::map::{IterationColourMap, unit_to_channel};
use crate::core::data::colour::Colour;

#[derive(Debug, Clone, Copy)]
pub struct Grayscale {
    max_iterations: u32,
}

impl ColourMap<u32> for Grayscale {
    type Failure = ColourMapError;

    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        check_iterations(iterations, self.max_iterations)?;

        if iterations == self.max_iterations {
            return Ok(Colour::BLACK);
        }

        let level = f64::from(iterations) / f64::from(self.max_iterations);

        Ok(Colour::grey(unit_to_channel(level)))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl IterationColourMap for Grayscale {
    fn kind(&self) -> ColourMapKind {
        ColourMapKind::Grayscale
    }
}

impl Grayscale {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
