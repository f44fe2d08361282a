use egui::Color32;

use crate::config::WhiteboardConfig;
use crate::panels::{self, BoardView};
use crate::registry::{FrameLayout, Mount, WhiteboardRegistry};
use crate::whiteboard::Whiteboard;

/// We derive Deserialize/Serialize so brush defaults and open boards survive a restart.
/// Drawings themselves are never persisted.
#[derive(serde::Deserialize, serde::Serialize, Debug)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct WhiteboardApp {
    config: WhiteboardConfig,
    // Surfaces are created on the first frame, once their containers have been laid out
    #[serde(skip)]
    registry: Option<WhiteboardRegistry>,
    #[serde(skip)]
    layout: FrameLayout,
}

impl Default for WhiteboardApp {
    fn default() -> Self {
        Self::with_config(WhiteboardConfig::default())
    }
}

impl WhiteboardApp {
    /// Called once before the first frame.
    ///
    /// An explicit configuration wins over the state restored from storage.
    pub fn new(cc: &eframe::CreationContext<'_>, config: Option<WhiteboardConfig>) -> Self {
        if let Some(config) = config {
            return Self::with_config(config);
        }
        cc.storage
            .and_then(|storage| eframe::get_value::<Self>(storage, eframe::APP_KEY))
            .map(Self::validated)
            .unwrap_or_default()
    }

    /// Drops a restored configuration that fails validation
    fn validated(self) -> Self {
        match self.config.validate() {
            Ok(config) => Self::with_config(config),
            Err(err) => {
                log::error!("Ignoring stored config: {}", err);
                Self::default()
            }
        }
    }

    pub fn with_config(config: WhiteboardConfig) -> Self {
        Self {
            config,
            registry: None,
            layout: FrameLayout::default(),
        }
    }

    pub fn config(&self) -> &WhiteboardConfig {
        &self.config
    }

    pub fn active_board(&self) -> Option<&Whiteboard> {
        self.registry.as_ref()?.active()
    }

    fn active_board_mut(&mut self) -> Option<&mut Whiteboard> {
        self.registry.as_mut()?.active_mut()
    }

    pub fn brush_color(&self) -> Color32 {
        self.active_board()
            .map_or(self.config.brush.color, |board| board.canvas().brush().color)
    }

    pub fn brush_size(&self) -> f32 {
        self.active_board()
            .map_or(self.config.brush.size, |board| board.canvas().brush().size)
    }

    /// Sets the color on the active board and as the default for new boards
    pub fn set_brush_color(&mut self, color: Color32) {
        self.config.brush.color = color;
        if let Some(registry) = &mut self.registry {
            registry.config_mut().brush.color = color;
        }
        if let Some(board) = self.active_board_mut() {
            board.canvas_mut().set_brush_color(color);
        }
    }

    /// Sets the size on the active board and as the default for new boards
    pub fn set_brush_size(&mut self, size: f32) {
        let size = self.config.brush.clamp_size(size);
        self.config.brush.size = size;
        if let Some(registry) = &mut self.registry {
            registry.config_mut().brush.size = size;
        }
        if let Some(board) = self.active_board_mut() {
            board.canvas_mut().set_brush_size(size);
        }
    }

    /// Undoes on the active board. Returns `false` if nothing changed.
    pub fn undo(&mut self) -> bool {
        self.active_board_mut().is_some_and(Whiteboard::undo)
    }

    /// Redoes on the active board. Returns `false` if nothing changed.
    pub fn redo(&mut self) -> bool {
        self.active_board_mut().is_some_and(Whiteboard::redo)
    }

    /// Opens another named board; it is created on the next frame
    pub fn add_board(&mut self) {
        let selector = (1..)
            .map(|n| format!("#board-{}", n))
            .find(|name| !self.config.boards.contains(name))
            .unwrap_or_default();
        log::info!("Opening {}", selector);
        self.config.boards.push(selector);
    }

    /// Brings the set of live surfaces in line with this frame's layout
    fn sync_boards(&mut self, layout: FrameLayout, closed: Vec<String>) {
        let registry = self
            .registry
            .get_or_insert_with(|| WhiteboardRegistry::new(self.config.clone()));

        for selector in closed {
            let mount = Mount::Selector(selector);
            if let Some(id) = registry.find_by_mount(&mount).map(Whiteboard::id) {
                if let Err(err) = registry.destroy(id) {
                    log::error!("{}", err);
                }
            }
        }

        let mounts = std::iter::once(Mount::Root)
            .chain(self.config.boards.iter().cloned().map(Mount::Selector));
        for mount in mounts {
            if registry.find_by_mount(&mount).is_none() {
                if let Err(err) = registry.create(mount, &layout) {
                    log::error!("{}", err);
                }
            }
        }

        if registry.active_id().is_none() {
            if let Some(id) = registry.find_by_mount(&Mount::Root).map(Whiteboard::id) {
                if let Err(err) = registry.set_active(id) {
                    log::error!("{}", err);
                }
            }
        }

        if layout != self.layout {
            let resized = registry.resize_all(&layout);
            log::debug!("Layout changed, resized {} boards", resized);
            self.layout = layout;
        }
    }
}

impl eframe::App for WhiteboardApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);

        let mut layout = FrameLayout::new();
        let root = panels::central_panel(ctx, &mut layout);
        let (mut views, closed) = panels::board_windows(ctx, &mut self.config.boards, &mut layout);
        views.insert(0, root);

        self.sync_boards(layout, closed);

        let Some(registry) = &mut self.registry else {
            return;
        };

        let target = panels::press_target(&views);
        let events = ctx.input(|input| input.events.clone());
        registry.handle_events(&events, &target);

        for BoardView { mount, painter, .. } in &views {
            if let Some(board) = registry.find_by_mount(mount) {
                board.paint(painter);
            }
        }
    }
}
