use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::fractal_kinds::FractalKind;
use std::error::Error;
use std::fmt;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;
pub const DEFAULT_THREADS: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    PixelRect(PixelRectError),
    Viewport(ViewportError),
    ZeroMaxIterations,
    ZeroThreads,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelRect(err) => write!(f, "invalid image size: {}", err),
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
            Self::ZeroMaxIterations => write!(f, "maximum iterations must be greater than zero"),
            Self::ZeroThreads => write!(f, "worker thread count must be greater than zero"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelRect(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::ZeroMaxIterations | Self::ZeroThreads => None,
        }
    }
}

impl From<PixelRectError> for ConfigError {
    fn from(err: PixelRectError) -> Self {
        Self::PixelRect(err)
    }
}

impl From<ViewportError> for ConfigError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

/// Raw render settings as they arrive from the outside world. Nothing here is
/// checked until [`validate`](Self::validate) is called.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub kind: FractalKind,
    pub width: u32,
    pub height: u32,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub max_iterations: u32,
    pub threads: usize,
    pub colour_map_kind: ColourMapKind,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self::for_kind(FractalKind::default())
    }
}

impl RenderSettings {
    /// Defaults for `kind`, framing the whole set.
    #[must_use]
    pub fn for_kind(kind: FractalKind) -> Self {
        let (x_min, x_max, y_min, y_max) = kind.default_bounds();

        Self {
            kind,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            x_min,
            x_max,
            y_min,
            y_max,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            threads: DEFAULT_THREADS,
            colour_map_kind: ColourMapKind::default(),
        }
    }

    pub fn validate(&self) -> Result<RenderConfig, ConfigError> {
        let pixel_rect = PixelRect::new(self.width, self.height)?;
        let viewport = Viewport::new(self.x_min, self.x_max, self.y_min, self.y_max)?;

        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        if self.threads == 0 {
            return Err(ConfigError::ZeroThreads);
        }

        Ok(RenderConfig {
            kind: self.kind,
            pixel_rect,
            viewport,
            max_iterations: self.max_iterations,
            threads: self.threads,
            colour_map_kind: self.colour_map_kind,
        })
    }
}

/// A validated, immutable description of one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    kind: FractalKind,
    pixel_rect: PixelRect,
    viewport: Viewport,
    max_iterations: u32,
    threads: usize,
    colour_map_kind: ColourMapKind,
}

impl RenderConfig {
    #[must_use]
    pub fn kind(&self) -> FractalKind {
        self.kind
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn threads(&self) -> usize {
        self.threads
    }

    #[must_use]
    pub fn colour_map_kind(&self) -> ColourMapKind {
        self.colour_map_kind
    }
}
