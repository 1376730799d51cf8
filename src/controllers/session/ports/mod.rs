//! Port definitions for the render session.
//!
//! The session writes pixels into a [`PixelSink`] owned by the display
//! surface and reports frame lifecycle events to a [`SessionPresenterPort`].

pub mod pixel_sink;
pub mod presenter;

pub use pixel_sink::{DirtyRegion, PixelSink};
pub use presenter::SessionPresenterPort;
