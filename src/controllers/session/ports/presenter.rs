use crate::controllers::session::events::RenderEvent;

pub trait SessionPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
