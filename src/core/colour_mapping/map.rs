use crate::core::actions::render_raster::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::data::colour::Colour;

/// Maps an escape count to a colour. Every implementation renders
/// `iterations == max_iterations` as black.
pub trait IterationColourMap: ColourMap<u32, Failure = ColourMapError> + Send + Sync {
    fn kind(&self) -> ColourMapKind;
}

impl ColourMap<u32> for Box<dyn IterationColourMap> {
    type Failure = ColourMapError;

    fn map(&self, value: u32) -> Result<Colour, ColourMapError> {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}

/// Scales a unit-interval intensity to a channel, clamping before the narrowing cast.
#[must_use]
pub(crate) fn unit_to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
