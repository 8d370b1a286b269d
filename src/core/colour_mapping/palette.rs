use crate::core::data::colour::Colour;

/// Precomputed colour for every escape count below `max_iterations`.
///
/// Built before a render starts and only read while pixels are coloured.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    max_iterations: u32,
    colours: Vec<Colour>,
}

impl Palette {
    pub fn build<F>(max_iterations: u32, colour_for: F) -> Self
    where
        F: Fn(u32, u32) -> Colour,
    {
        let colours = (0..max_iterations)
            .map(|iterations| colour_for(iterations, max_iterations))
            .collect();

        log::debug!("built {}-entry palette", max_iterations);

        Self {
            max_iterations,
            colours,
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// `None` for `iterations >= max_iterations`: interior points have no palette entry.
    #[must_use]
    pub fn colour(&self, iterations: u32) -> Option<Colour> {
        self.colours.get(iterations as usize).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(iterations: u32, _: u32) -> Colour {
        Colour::grey(iterations as u8)
    }

    #[test]
    fn palette_has_one_entry_per_escape_count() {
        let palette = Palette::build(10, ramp);

        assert_eq!(palette.len(), 10);
        assert_eq!(palette.max_iterations(), 10);
        assert!(!palette.is_empty());
    }

    #[test]
    fn palette_indexes_by_iterations() {
        let palette = Palette::build(10, ramp);

        assert_eq!(palette.colour(0), Some(Colour::grey(0)));
        assert_eq!(palette.colour(9), Some(Colour::grey(9)));
    }

    #[test]
    fn palette_has_no_entry_for_interior_points() {
        let palette = Palette::build(10, ramp);

        assert_eq!(palette.colour(10), None);
        assert_eq!(palette.colour(11), None);
    }

    #[test]
    fn empty_palette() {
        let palette = Palette::build(0, ramp);

        assert!(palette.is_empty());
        assert_eq!(palette.colour(0), None);
    }
}
