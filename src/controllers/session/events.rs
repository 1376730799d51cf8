use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameData {
    pub generation: u64,
    pub size: u32,
    pub render_duration: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    /// Rows for this generation have been dispatched; input is disabled.
    RenderStarted { generation: u64 },
    /// Every row of the frame has been delivered to the pixel sink.
    Frame(FrameData),
}
