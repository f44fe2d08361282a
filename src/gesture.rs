//! Default drawing behavior wired onto a surface's event bus.
//!
//! A press begins a gesture, every move draws a segment from the last
//! position, and the release draws one last segment and ends the gesture.

use crate::canvas::Canvas;
use crate::event::{BoardEvent, EventBus, EventKind};

/// Registers the drawing and undo/redo handlers on a bus
pub fn install(bus: &mut EventBus) {
    bus.on(EventKind::PointerDown, pointer_down);
    bus.on(EventKind::PointerMove, pointer_move);
    bus.on(EventKind::PointerUp, pointer_up);
    bus.on(EventKind::Undo, |canvas: &mut Canvas, _: &BoardEvent| {
        canvas.undo();
    });
    bus.on(EventKind::Redo, |canvas: &mut Canvas, _: &BoardEvent| {
        canvas.redo();
    });
}

pub fn pointer_down(canvas: &mut Canvas, event: &BoardEvent) {
    let Some(pos) = event.pos() else { return };
    canvas.set_pen(Some(pos));
    canvas.begin_gesture();
}

pub fn pointer_move(canvas: &mut Canvas, event: &BoardEvent) {
    let (Some(last), Some(pos)) = (canvas.pen(), event.pos()) else {
        return;
    };
    canvas.draw_line(last, pos, None, None);
    canvas.set_pen(Some(pos));
}

pub fn pointer_up(canvas: &mut Canvas, event: &BoardEvent) {
    let Some(pos) = event.pos() else { return };
    if let Some(last) = canvas.take_pen() {
        canvas.draw_line(last, pos, None, None);
    }
}
