use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownFractalSelector(pub i64);

impl fmt::Display for UnknownFractalSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown fractal selector {}", self.0)
    }
}

impl Error for UnknownFractalSelector {}

/// The renderable fractal families. Each Julia variant carries its own fixed
/// recurrence constant; the Mandelbrot constant is the pixel sample itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FractalKind {
    Mandelbrot,
    #[default]
    JuliaClassic,
    JuliaDouady,
    JuliaCustom,
    JuliaNeuron,
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::JuliaClassic,
        Self::JuliaDouady,
        Self::JuliaCustom,
        Self::JuliaNeuron,
    ];

    #[must_use]
    pub const fn selector(self) -> i64 {
        match self {
            Self::Mandelbrot => 0,
            Self::JuliaClassic => 1,
            Self::JuliaDouady => 2,
            Self::JuliaCustom => 3,
            Self::JuliaNeuron => 4,
        }
    }

    pub fn from_selector(selector: i64) -> Result<Self, UnknownFractalSelector> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.selector() == selector)
            .ok_or(UnknownFractalSelector(selector))
    }

    /// Like [`from_selector`](Self::from_selector), but an unknown selector falls
    /// back to the default family with a warning instead of failing.
    #[must_use]
    pub fn resolve_selector(selector: i64) -> Self {
        Self::from_selector(selector).unwrap_or_else(|err| {
            let fallback = Self::default();
            log::warn!(
                "{}, rendering {} instead",
                err,
                fallback.display_name()
            );
            fallback
        })
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::JuliaClassic => "Julia (classic)",
            Self::JuliaDouady => "Julia (Douady rabbit)",
            Self::JuliaCustom => "Julia (custom)",
            Self::JuliaNeuron => "Julia (neuron)",
        }
    }

    /// The fixed `c` in `z² + c`, or `None` for Mandelbrot where `c` varies per pixel.
    #[must_use]
    pub const fn recurrence_constant(self) -> Option<Complex> {
        match self {
            Self::Mandelbrot => None,
            Self::JuliaClassic => Some(Complex::new(-0.7, 0.27015)),
            Self::JuliaDouady => Some(Complex::new(-0.12, 0.75)),
            Self::JuliaCustom => Some(Complex::new(-0.39, -0.59)),
            Self::JuliaNeuron => Some(Complex::new(0.0, -1.0)),
        }
    }

    #[must_use]
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::JuliaClassic => "julia_classic",
            Self::JuliaDouady => "julia_douady",
            Self::JuliaCustom => "julia_custom",
            Self::JuliaNeuron => "julia_neuron",
        }
    }

    #[must_use]
    pub fn file_name(self, extension: &str) -> String {
        format!("{}.{}", self.file_stem(), extension)
    }

    /// Bounds (x_min, x_max, y_min, y_max) framing the whole set.
    #[must_use]
    pub const fn default_bounds(self) -> (f64, f64, f64, f64) {
        match self {
            Self::Mandelbrot => (-2.0, 1.0, -1.0, 1.0),
            _ => (-2.0, 2.0, -1.5, 1.5),
        }
    }

    #[must_use]
    pub fn default_viewport(self) -> Viewport {
        let (x_min, x_max, y_min, y_max) = self.default_bounds();

        Viewport::new(x_min, x_max, y_min, y_max).expect("default fractal viewport is valid")
    }
}

impl fmt::Display for FractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}
