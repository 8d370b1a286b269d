use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    NonFinite {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
    InvalidRange {
        axis: char,
        min: f64,
        max: f64,
    },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite {
                x_min,
                x_max,
                y_min,
                y_max,
            } => {
                write!(
                    f,
                    "viewport bounds must be finite: x {}..{}, y {}..{}",
                    x_min, x_max, y_min, y_max
                )
            }
            Self::InvalidRange { axis, min, max } => {
                write!(
                    f,
                    "viewport {} range must satisfy min < max: {}..{}",
                    axis, min, max
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// Region of the complex plane mapped onto the image: real axis is x, imaginary axis is y.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, ViewportError> {
        if ![x_min, x_max, y_min, y_max].iter().all(|bound| bound.is_finite()) {
            return Err(ViewportError::NonFinite {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        if x_min >= x_max {
            return Err(ViewportError::InvalidRange {
                axis: 'x',
                min: x_min,
                max: x_max,
            });
        }

        if y_min >= y_max {
            return Err(ViewportError::InvalidRange {
                axis: 'y',
                min: y_min,
                max: y_max,
            });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}
