use std::collections::HashMap;

use crate::canvas::Canvas;
use crate::event::{BoardEvent, EventHandler, EventKind};

/// Per-surface publish/subscribe channel between input capture and drawing logic
pub struct EventBus {
    handlers: HashMap<EventKind, Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let total: usize = self.handlers.values().map(Vec::len).sum();
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", total))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Creates a new event bus
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers a handler for one kind of event. Handlers cannot be removed.
    pub fn subscribe(&mut self, kind: EventKind, handler: Box<dyn EventHandler>) {
        self.handlers.entry(kind).or_default().push(handler);
    }

    /// Registers a closure for one kind of event
    pub fn on<F>(&mut self, kind: EventKind, handler: F)
    where
        F: FnMut(&mut Canvas, &BoardEvent) + Send + 'static,
    {
        self.subscribe(kind, Box::new(handler));
    }

    /// Dispatches an event to every handler registered for its kind.
    ///
    /// Handlers run most-recently-registered first. Emitting an event nobody
    /// listens to is not an error. Returns the number of handlers invoked.
    pub fn emit(&mut self, canvas: &mut Canvas, event: &BoardEvent) -> usize {
        let Some(handlers) = self.handlers.get_mut(&event.kind()) else {
            return 0;
        };
        for handler in handlers.iter_mut().rev() {
            handler.handle_event(canvas, event);
        }
        handlers.len()
    }

    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }
}
