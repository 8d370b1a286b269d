use std::error::Error;
use std::fmt;
use std::io::Write;

use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug)]
pub enum PresentError {
    Io(std::io::Error),
    Encode(image::ImageError),
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o error: {}", err),
            Self::Encode(err) => write!(f, "image encoding error: {}", err),
        }
    }
}

impl Error for PresentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for PresentError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<image::ImageError> for PresentError {
    fn from(err: image::ImageError) -> Self {
        Self::Encode(err)
    }
}

/// Serialises a finished raster into an image file format.
pub trait FilePresenterPort {
    fn extension(&self) -> &'static str;

    fn encode(&self, buffer: &PixelBuffer, writer: &mut dyn Write) -> Result<(), PresentError>;
}

impl FilePresenterPort for Box<dyn FilePresenterPort> {
    fn extension(&self) -> &'static str {
        (**self).extension()
    }

    fn encode(&self, buffer: &PixelBuffer, writer: &mut dyn Write) -> Result<(), PresentError> {
        (**self).encode(buffer, writer)
    }
}
