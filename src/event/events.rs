use egui::{Key, Modifiers};

use crate::stroke::NormPos;

/// Names an event channel on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerDown,
    PointerMove,
    PointerUp,
    KeyDown,
    Undo,
    Redo,
}

/// Events published by the input layer of one drawing surface
#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    /// Pointer pressed inside the surface
    PointerDown { pos: NormPos },
    /// Pointer moved while pressed
    PointerMove { pos: NormPos },
    /// Pointer released after a press on the surface
    PointerUp { pos: NormPos },
    /// Any key press, published before shortcut handling
    KeyDown { key: Key, modifiers: Modifiers },
    Undo,
    Redo,
}

impl BoardEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::PointerDown { .. } => EventKind::PointerDown,
            Self::PointerMove { .. } => EventKind::PointerMove,
            Self::PointerUp { .. } => EventKind::PointerUp,
            Self::KeyDown { .. } => EventKind::KeyDown,
            Self::Undo => EventKind::Undo,
            Self::Redo => EventKind::Redo,
        }
    }

    /// Normalized pointer position carried by pointer events
    pub fn pos(&self) -> Option<NormPos> {
        match self {
            Self::PointerDown { pos } | Self::PointerMove { pos } | Self::PointerUp { pos } => {
                Some(*pos)
            }
            _ => None,
        }
    }
}
