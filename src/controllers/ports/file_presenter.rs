use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes an exported raster to disk in one particular image format.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()>;

    fn extension(&self) -> &'static str;
}
