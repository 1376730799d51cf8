use crate::controllers::session::events::RenderEvent;
use crate::controllers::session::ports::SessionPresenterPort;
use log::{debug, info};
use std::sync::{Mutex, PoisonError};

/// Reports frame lifecycle through `log` and keeps the most recent event
/// for whoever drives the session.
#[derive(Default)]
pub struct LogPresenter {
    last_event: Mutex<Option<RenderEvent>>,
}

impl SessionPresenterPort for LogPresenter {
    fn present(&self, event: RenderEvent) {
        match &event {
            RenderEvent::RenderStarted { generation } => {
                debug!("Frame {} started", generation);
            }
            RenderEvent::Frame(frame) => {
                info!(
                    "Frame {} ready: {}x{} in {:?}",
                    frame.generation, frame.size, frame.size, frame.render_duration
                );
            }
        }

        *self
            .last_event
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(event);
    }
}

impl LogPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_event(&self) -> Option<RenderEvent> {
        self.last_event
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
