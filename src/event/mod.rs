mod bus;
mod events;

pub use bus::EventBus;
pub use events::{BoardEvent, EventKind};

use crate::canvas::Canvas;

pub trait EventHandler: Send {
    fn handle_event(&mut self, canvas: &mut Canvas, event: &BoardEvent);
}

impl<F> EventHandler for F
where
    F: FnMut(&mut Canvas, &BoardEvent) + Send,
{
    fn handle_event(&mut self, canvas: &mut Canvas, event: &BoardEvent) {
        self(canvas, event)
    }
}
