use egui::{Event, Painter, Rect};

use crate::canvas::Canvas;
use crate::config::WhiteboardConfig;
use crate::event::{BoardEvent, EventBus, EventKind};
use crate::gesture;
use crate::input::{self, InputHandler};
use crate::registry::{Mount, WhiteboardId};

/// One live drawing surface: its drawing state, event bus and input capture
#[derive(Debug)]
pub struct Whiteboard {
    id: WhiteboardId,
    mount: Mount,
    canvas: Canvas,
    bus: EventBus,
    input: InputHandler,
}

impl Whiteboard {
    /// Creates a surface sized to `rect` with the default drawing handlers installed
    pub fn new(id: WhiteboardId, mount: Mount, config: &WhiteboardConfig, rect: Rect) -> Self {
        let mut bus = EventBus::new();
        gesture::install(&mut bus);

        let mut canvas = Canvas::new(config);
        canvas.on_resize(rect);

        Self {
            id,
            mount,
            canvas,
            bus,
            input: InputHandler::new(),
        }
    }

    pub fn id(&self) -> WhiteboardId {
        self.id
    }

    pub fn mount(&self) -> &Mount {
        &self.mount
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Registers an extra handler; it runs before the ones registered earlier
    pub fn on<F>(&mut self, kind: EventKind, handler: F)
    where
        F: FnMut(&mut Canvas, &BoardEvent) + Send + 'static,
    {
        self.bus.on(kind, handler);
    }

    /// Publishes an event to this surface's handlers
    pub fn emit(&mut self, event: &BoardEvent) -> usize {
        self.bus.emit(&mut self.canvas, event)
    }

    /// Publishes an undo command. Returns `false` if the history did not change.
    pub fn undo(&mut self) -> bool {
        self.emit_history_command(&BoardEvent::Undo)
    }

    /// Publishes a redo command. Returns `false` if the history did not change.
    pub fn redo(&mut self) -> bool {
        self.emit_history_command(&BoardEvent::Redo)
    }

    fn emit_history_command(&mut self, event: &BoardEvent) -> bool {
        let stacks = |canvas: &Canvas| {
            let history = canvas.history();
            (history.undo_stack().len(), history.redo_stack().len())
        };
        let before = stacks(&self.canvas);
        self.emit(event);
        stacks(&self.canvas) != before
    }

    /// Feeds one raw pointer event through capture and the bus.
    ///
    /// Returns true if the event started a gesture on this surface.
    pub fn handle_pointer(&mut self, event: &Event) -> bool {
        let Some(board_event) = self.input.pointer_event(event, self.canvas.geometry()) else {
            return false;
        };
        self.emit(&board_event);
        matches!(board_event, BoardEvent::PointerDown { .. })
    }

    /// Feeds one raw key event through the shortcut policy and the bus
    pub fn handle_key(&mut self, event: &Event) {
        for board_event in input::key_events(event) {
            self.emit(&board_event);
        }
    }

    pub fn on_resize(&mut self, rect: Rect) {
        self.canvas.on_resize(rect);
    }

    pub fn paint(&self, painter: &Painter) {
        self.canvas.paint(painter);
    }
}
