//! Interactive render session for escape-time fractals.
//!
//! The session owns the current fractal and viewport, turns selection
//! commands into viewport changes, and hands each frame to a row-parallel
//! scheduler.
//!
//! # Architecture
//!
//! - **Input**: [`SessionCommand`] values from whatever drives the UI
//! - **Output**: pixels go to a [`PixelSink`], lifecycle events to a
//!   [`SessionPresenterPort`]
//! - **Core**: per-row escape-time computation from `core/`

mod commands;
pub mod config;
pub mod errors;
pub mod events;
pub mod ports;
pub mod scheduler;
mod session;
pub mod viewport_controller;

pub use commands::{CommandOutcome, SessionCommand};
pub use config::SessionConfig;
pub use errors::SessionError;
pub use events::{FrameData, RenderEvent};
pub use ports::{DirtyRegion, PixelSink, SessionPresenterPort};
pub use scheduler::{RenderRequest, RowRenderScheduler};
pub use session::RenderSession;
