use egui::{Event, Key, Modifiers};

use crate::event::BoardEvent;
use crate::geometry::SurfaceGeometry;

/// Maps a key press to an undo/redo command.
///
/// Ctrl+Z undoes and Ctrl+R redoes; holding Shift disables both.
pub fn shortcut(key: Key, modifiers: Modifiers) -> Option<BoardEvent> {
    if !modifiers.ctrl || modifiers.shift {
        return None;
    }
    match key {
        Key::Z => Some(BoardEvent::Undo),
        Key::R => Some(BoardEvent::Redo),
        _ => None,
    }
}

/// Converts a raw key event into the events published for it: the key press
/// itself, followed by any shortcut it triggers.
pub fn key_events(event: &Event) -> Vec<BoardEvent> {
    match event {
        Event::Key {
            key,
            pressed: true,
            modifiers,
            ..
        } => {
            let mut events = vec![BoardEvent::KeyDown {
                key: *key,
                modifiers: *modifiers,
            }];
            events.extend(shortcut(*key, *modifiers));
            events
        }
        _ => Vec::new(),
    }
}

/// Pointer capture for one surface.
///
/// A press only counts when it lands on the surface; once pressed, moves and
/// the release are tracked anywhere in the window.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    pressed: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Translates a raw pointer event into a normalized board event
    pub fn pointer_event(&mut self, event: &Event, geometry: &SurfaceGeometry) -> Option<BoardEvent> {
        match *event {
            Event::PointerButton {
                pos, pressed: true, ..
            } if geometry.contains(pos) => {
                self.pressed = true;
                Some(BoardEvent::PointerDown {
                    pos: geometry.normalize(pos),
                })
            }
            Event::PointerMoved(pos) if self.pressed => Some(BoardEvent::PointerMove {
                pos: geometry.normalize(pos),
            }),
            Event::PointerButton {
                pos,
                pressed: false,
                ..
            } => {
                let was_pressed = std::mem::replace(&mut self.pressed, false);
                was_pressed.then(|| BoardEvent::PointerUp {
                    pos: geometry.normalize(pos),
                })
            }
            _ => None,
        }
    }
}
