use std::{error::Error, fmt};

/// Raised when an escape-time algorithm is built with parameters it cannot render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractalError {
    ZeroMaxIterations,
}

impl fmt::Display for FractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "escape-time algorithm needs an iteration cap of at least 1")
            }
        }
    }
}

impl Error for FractalError {}
