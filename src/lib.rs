pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use crate::controllers::session::{
    CommandOutcome, DirtyRegion, FrameData, PixelSink, RenderEvent, RenderSession,
    SessionCommand, SessionConfig, SessionError, SessionPresenterPort,
};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::fractal_kinds::FractalKinds;
pub use crate::input::cli::RunCliCommand;
pub use crate::presenters::frame_buffer::FrameBuffer;
