use crate::core::colour_mapping::{
    kinds::ColourMapKind,
    map::IterationColourMap,
    maps::{grayscale::Grayscale, smooth_gradient::SmoothGradient},
};

#[must_use]
pub fn colour_map_factory(
    kind: ColourMapKind,
    max_iterations: u32,
) -> Box<dyn IterationColourMap> {
    match kind {
        ColourMapKind::SmoothGradient => Box::new(SmoothGradient::new(max_iterations)),
        ColourMapKind::Grayscale => Box::new(Grayscale::new(max_iterations)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_raster::ports::colour_map::ColourMap;
    use crate::core::data::colour::Colour;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            ColourMapKind::ALL.first(),
            Some(&ColourMapKind::default())
        );
    }

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in ColourMapKind::ALL {
            let map = colour_map_factory(kind, 256);
            assert_eq!(map.kind(), kind);
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in ColourMapKind::ALL {
            let map = colour_map_factory(kind, 256);
            assert_eq!(map.display_name(), kind.display_name());
        }
    }

    #[test]
    fn interior_is_black_for_every_kind() {
        for &kind in ColourMapKind::ALL {
            let map = colour_map_factory(kind, 256);
            assert_eq!(map.map(256), Ok(Colour::BLACK), "{}", kind);
        }
    }
}
