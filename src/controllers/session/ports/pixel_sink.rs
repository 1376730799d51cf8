use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DirtyRegion {
    Row(u32),
    Full,
}

/// Display surface the row tasks write into.
///
/// Called concurrently from worker threads; each row's pixels are written by
/// exactly one task, so implementations only need per-pixel atomicity.
pub trait PixelSink: Send + Sync {
    fn set_pixel(&self, pixel: Point, colour: Colour);

    fn mark_dirty(&self, region: DirtyRegion);

    fn export_image(&self) -> PixelBuffer;
}
