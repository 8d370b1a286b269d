use image::codecs::bmp::BmpEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::Write;

/// Uncompressed 24-bit BMP output.
pub struct BmpFilePresenter {}

impl FilePresenterPort for BmpFilePresenter {
    fn extension(&self) -> &'static str {
        "bmp"
    }

    fn encode(&self, buffer: &PixelBuffer, mut writer: &mut dyn Write) -> Result<(), PresentError> {
        let pixel_rect = buffer.pixel_rect();

        BmpEncoder::new(&mut writer).write_image(
            buffer.buffer(),
            pixel_rect.width(),
            pixel_rect.height(),
            ExtendedColorType::Rgb8,
        )?;

        Ok(())
    }
}

impl Default for BmpFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl BmpFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
