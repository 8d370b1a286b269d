use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::Write;

/// Binary PPM (P6) encoder.
#[derive(Debug)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn extension(&self) -> &'static str {
        "ppm"
    }

    fn encode(&self, buffer: &PixelBuffer, writer: &mut dyn Write) -> Result<(), PresentError> {
        let pixel_rect = buffer.pixel_rect();

        // binary RGB with 8-bit channels
        write!(writer, "P6\n{} {}\n255\n", pixel_rect.width(), pixel_rect.height())?;
        writer.write_all(buffer.buffer())?;

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
