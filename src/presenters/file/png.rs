use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use image::RgbImage;
use std::io;
use std::path::Path;

#[derive(Default)]
pub struct PngFilePresenter {}

impl PngFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> io::Result<()> {
        let size = buffer.size();
        let image = RgbImage::from_raw(size, size, buffer.buffer().clone()).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("pixel data does not fill a {}x{} image", size, size),
            )
        })?;

        image
            .save_with_format(filepath, image::ImageFormat::Png)
            .map_err(io::Error::other)
    }

    fn extension(&self) -> &'static str {
        "png"
    }
}
