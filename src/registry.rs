use std::collections::HashMap;
use std::fmt;

use egui::{Event, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::WhiteboardConfig;
use crate::error::{WhiteboardError, WhiteboardResult};
use crate::whiteboard::Whiteboard;

/// Identifies one drawing surface for its whole lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WhiteboardId(Uuid);

impl WhiteboardId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WhiteboardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WhiteboardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Whiteboard({})", self.0)
    }
}

/// Where a new surface should be placed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Mount {
    /// The whole drawing area
    Root,
    /// A container looked up by name, e.g. `"#notes"`
    Selector(String),
    /// A concrete container handle
    Element(egui::Id),
}

impl fmt::Display for Mount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "root container"),
            Self::Selector(selector) => write!(f, "selector {:?}", selector),
            Self::Element(id) => write!(f, "element {:?}", id),
        }
    }
}

/// Resolves mounts to the current layout box of their container
pub trait LayoutHost {
    fn container_rect(&self, mount: &Mount) -> Option<Rect>;
}

/// Container boxes collected while laying out one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameLayout {
    root: Option<Rect>,
    named: HashMap<String, Rect>,
    elements: HashMap<egui::Id, Rect>,
}

impl FrameLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_root(&mut self, rect: Rect) {
        self.root = Some(rect);
    }

    pub fn insert_named(&mut self, selector: impl Into<String>, rect: Rect) {
        self.named.insert(selector.into(), rect);
    }

    pub fn insert_element(&mut self, id: egui::Id, rect: Rect) {
        self.elements.insert(id, rect);
    }
}

impl LayoutHost for FrameLayout {
    fn container_rect(&self, mount: &Mount) -> Option<Rect> {
        match mount {
            Mount::Root => self.root,
            Mount::Selector(selector) => self.named.get(selector).copied(),
            Mount::Element(id) => self.elements.get(id).copied(),
        }
    }
}

/// Which surfaces a pointer press may start a gesture on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PressTarget {
    /// Every surface whose box contains the press
    Broadcast,
    /// Only the surface at this mount
    Board(Mount),
    /// No surface; the pointer is over something else
    Nothing,
}

impl PressTarget {
    /// Picks the topmost hovered surface from `(mount, hovered)` pairs listed
    /// bottom to top. Nothing hovered means no surface gets the press.
    pub fn topmost<'a>(candidates: impl DoubleEndedIterator<Item = (&'a Mount, bool)>) -> Self {
        candidates
            .rev()
            .find(|(_, hovered)| *hovered)
            .map_or(Self::Nothing, |(mount, _)| Self::Board(mount.clone()))
    }

    pub fn accepts(&self, mount: &Mount) -> bool {
        match self {
            Self::Broadcast => true,
            Self::Board(target) => target == mount,
            Self::Nothing => false,
        }
    }
}

/// Owns every live drawing surface and drives their lifetimes.
///
/// Surfaces are fully independent; the registry only appends, removes and
/// iterates them.
#[derive(Debug, Default)]
pub struct WhiteboardRegistry {
    boards: Vec<Whiteboard>,
    config: WhiteboardConfig,
    /// Surface that most recently received a press; it gets keyboard input
    active: Option<WhiteboardId>,
}

impl WhiteboardRegistry {
    pub fn new(config: WhiteboardConfig) -> Self {
        Self {
            boards: Vec::new(),
            config,
            active: None,
        }
    }

    pub fn config(&self) -> &WhiteboardConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut WhiteboardConfig {
        &mut self.config
    }

    /// Creates a surface inside the mount's container and sizes it immediately.
    ///
    /// Fails when the container cannot be resolved, since there is nothing to
    /// draw on.
    pub fn create(&mut self, mount: Mount, host: &dyn LayoutHost) -> WhiteboardResult<WhiteboardId> {
        let rect = host
            .container_rect(&mount)
            .ok_or_else(|| WhiteboardError::ContainerNotFound { mount: mount.clone() })?;

        let id = WhiteboardId::new();
        log::info!("Creating {} in {}", id, mount);
        self.boards.push(Whiteboard::new(id, mount, &self.config, rect));
        if self.active.is_none() {
            self.active = Some(id);
        }
        Ok(id)
    }

    /// Removes a surface and hands it back to the caller
    pub fn destroy(&mut self, id: WhiteboardId) -> WhiteboardResult<Whiteboard> {
        let index = self
            .boards
            .iter()
            .position(|board| board.id() == id)
            .ok_or(WhiteboardError::UnknownBoard(id))?;

        if self.active == Some(id) {
            self.active = None;
        }
        log::info!("Destroying {}", id);
        Ok(self.boards.remove(index))
    }

    /// Resizes and redraws every surface against the host's current layout.
    ///
    /// Surfaces whose container has disappeared keep their last size.
    /// Returns how many surfaces were resized.
    pub fn resize_all(&mut self, host: &dyn LayoutHost) -> usize {
        let mut resized = 0;
        for board in self.boards.iter_mut().rev() {
            match host.container_rect(board.mount()) {
                Some(rect) => {
                    board.on_resize(rect);
                    resized += 1;
                }
                None => log::warn!("No container for {} in {}", board.id(), board.mount()),
            }
        }
        resized
    }

    /// Routes raw input to the surfaces.
    ///
    /// Presses reach the surfaces selected by `target`; moves and releases
    /// reach every surface. Key events go to the active surface only.
    pub fn handle_events(&mut self, events: &[Event], target: &PressTarget) {
        for event in events {
            match event {
                Event::PointerButton { pressed: true, .. } => {
                    for board in &mut self.boards {
                        if !target.accepts(board.mount()) {
                            continue;
                        }
                        if board.handle_pointer(event) {
                            self.active = Some(board.id());
                        }
                    }
                }
                Event::PointerButton { .. } | Event::PointerMoved(_) => {
                    for board in &mut self.boards {
                        board.handle_pointer(event);
                    }
                }
                Event::Key { .. } => {
                    if let Some(board) = self.active_mut() {
                        board.handle_key(event);
                    }
                }
                _ => {}
            }
        }
    }

    pub fn get(&self, id: WhiteboardId) -> Option<&Whiteboard> {
        self.boards.iter().find(|board| board.id() == id)
    }

    pub fn get_mut(&mut self, id: WhiteboardId) -> Option<&mut Whiteboard> {
        self.boards.iter_mut().find(|board| board.id() == id)
    }

    pub fn find_by_mount(&self, mount: &Mount) -> Option<&Whiteboard> {
        self.boards.iter().find(|board| board.mount() == mount)
    }

    pub fn active(&self) -> Option<&Whiteboard> {
        self.active.and_then(|id| self.get(id))
    }

    pub fn active_mut(&mut self) -> Option<&mut Whiteboard> {
        let id = self.active?;
        self.get_mut(id)
    }

    pub fn active_id(&self) -> Option<WhiteboardId> {
        self.active
    }

    pub fn set_active(&mut self, id: WhiteboardId) -> WhiteboardResult<()> {
        if self.get(id).is_none() {
            return Err(WhiteboardError::UnknownBoard(id));
        }
        self.active = Some(id);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Whiteboard> {
        self.boards.iter()
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}
