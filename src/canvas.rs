use egui::{Color32, Painter, Pos2, Rect};

use crate::config::{BrushConfig, WhiteboardConfig};
use crate::geometry::SurfaceGeometry;
use crate::history::StrokeHistory;
use crate::renderer::{DisplayList, Renderer};
use crate::stroke::{NormPos, Stroke};

/// Drawing state owned by one surface instance.
///
/// Every mutation of the stroke log is followed by a render: appends paint
/// the new stroke, while undo, redo and resize clear and replay the log.
#[derive(Debug, Clone)]
pub struct Canvas {
    history: StrokeHistory,
    renderer: Renderer,
    geometry: SurfaceGeometry,
    surface: DisplayList,
    brush: BrushConfig,
    /// Last pointer position of the gesture in progress
    pen: Option<NormPos>,
}

impl Canvas {
    pub fn new(config: &WhiteboardConfig) -> Self {
        Self {
            history: StrokeHistory::new(),
            renderer: Renderer::new(config.background),
            geometry: SurfaceGeometry::default(),
            surface: DisplayList::default(),
            brush: config.brush.clone(),
            pen: None,
        }
    }

    /// Marks the start of a new undoable gesture
    pub fn begin_gesture(&mut self) {
        self.history.begin_gesture();
    }

    /// Appends a stroke to the log and paints it on top of the surface
    pub fn append_stroke(&mut self, stroke: Stroke) {
        log::debug!("Appending stroke {:?} -> {:?}", stroke.from(), stroke.to());
        self.renderer.paint_stroke(&mut self.surface, &stroke);
        self.history.append_stroke(stroke);
    }

    /// Appends a segment drawn with the brush, overriding color or size if given.
    ///
    /// The brush size is converted to an absolute width against the current
    /// surface width.
    pub fn draw_line(&mut self, from: NormPos, to: NormPos, color: Option<Color32>, size: Option<f32>) {
        let color = color.unwrap_or(self.brush.color);
        let size = size.unwrap_or(self.brush.size);
        let stroke = Stroke::from_brush(from, to, color, size, self.geometry.size().x);
        self.append_stroke(stroke);
    }

    /// Undoes the most recent gesture. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo();
        if changed {
            self.redraw();
        }
        changed
    }

    /// Redoes the most recently undone gesture. Returns `false` if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo();
        if changed {
            self.redraw();
        }
        changed
    }

    /// Clears the surface and replays the whole log
    pub fn redraw(&mut self) {
        self.renderer.redraw(&mut self.surface, self.history.strokes());
    }

    /// Adopts a new layout box, resizes the backing surface and repaints it.
    ///
    /// The log and both stacks are untouched; normalized strokes are simply
    /// reinterpreted against the new dimensions.
    pub fn on_resize(&mut self, rect: Rect) {
        log::debug!("Resizing surface to {:?}", rect);
        self.geometry.update(rect);
        self.renderer
            .resize(&mut self.surface, rect.size(), self.history.strokes());
    }

    /// Converts a page position into this surface's normalized coordinates
    pub fn normalize(&self, page_pos: Pos2) -> NormPos {
        self.geometry.normalize(page_pos)
    }

    /// Presents the backing surface at its current page position
    pub fn paint(&self, painter: &Painter) {
        self.surface.paint(painter, self.geometry.origin());
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    pub fn geometry(&self) -> &SurfaceGeometry {
        &self.geometry
    }

    pub fn surface(&self) -> &DisplayList {
        &self.surface
    }

    pub fn brush(&self) -> &BrushConfig {
        &self.brush
    }

    pub fn set_brush_color(&mut self, color: Color32) {
        self.brush.color = color;
    }

    /// Sets the brush size, clamped to the configured range
    pub fn set_brush_size(&mut self, size: f32) {
        self.brush.size = self.brush.clamp_size(size);
    }

    pub fn pen(&self) -> Option<NormPos> {
        self.pen
    }

    pub fn set_pen(&mut self, pos: Option<NormPos>) {
        self.pen = pos;
    }

    /// Ends the gesture in progress, returning its last position
    pub fn take_pen(&mut self) -> Option<NormPos> {
        self.pen.take()
    }
}
