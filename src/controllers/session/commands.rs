use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;

/// Selection input delivered by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Reset,
    Save,
    SwitchAlgorithm(String),
    ZoomClick(Point),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    RenderStarted(u64),
    Exported(PixelBuffer),
}
