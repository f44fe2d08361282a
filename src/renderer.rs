// src/renderer.rs
use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke as EguiStroke, Vec2};

use crate::stroke::Stroke;

/// A pixel drawing target the renderer paints onto.
///
/// Coordinates are surface-local pixels with the origin at the top-left.
pub trait Surface {
    /// Current pixel dimensions
    fn size(&self) -> Vec2;

    /// Resizes the backing store. Resizing discards the current contents.
    fn set_size(&mut self, size: Vec2);

    /// Fills the whole surface with a single color
    fn fill(&mut self, color: Color32);

    /// Draws a round-capped line segment
    fn line(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32);
}

/// A single recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    Fill(Color32),
    Line {
        from: Pos2,
        to: Pos2,
        color: Color32,
        width: f32,
    },
}

/// Retained backing surface for one drawing area.
///
/// Operations accumulate until the next fill, which replaces everything
/// painted before it. The list is replayed onto an egui painter every frame.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    size: Vec2,
    ops: Vec<PaintOp>,
}

impl DisplayList {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Number of line segments currently on the surface
    pub fn line_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, PaintOp::Line { .. }))
            .count()
    }

    /// Builds the egui shapes for this surface placed at `origin`
    pub fn shapes(&self, origin: Pos2) -> Vec<Shape> {
        let offset = origin.to_vec2();
        let mut shapes = Vec::with_capacity(self.ops.len() * 3);
        for op in &self.ops {
            match *op {
                PaintOp::Fill(color) => {
                    shapes.push(Shape::rect_filled(
                        Rect::from_min_size(origin, self.size),
                        0.0,
                        color,
                    ));
                }
                PaintOp::Line {
                    from,
                    to,
                    color,
                    width,
                } => {
                    let (from, to) = (from + offset, to + offset);
                    let radius = width / 2.0;
                    shapes.push(Shape::line_segment([from, to], EguiStroke::new(width, color)));
                    // egui segments have butt ends; discs give the round caps
                    shapes.push(Shape::circle_filled(from, radius, color));
                    shapes.push(Shape::circle_filled(to, radius, color));
                }
            }
        }
        shapes
    }

    /// Presents the surface through an egui painter
    pub fn paint(&self, painter: &Painter, origin: Pos2) {
        let clip = Rect::from_min_size(origin, self.size);
        painter.with_clip_rect(clip).extend(self.shapes(origin));
    }
}

impl Surface for DisplayList {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn set_size(&mut self, size: Vec2) {
        self.size = size;
        self.ops.clear();
    }

    fn fill(&mut self, color: Color32) {
        self.ops.clear();
        self.ops.push(PaintOp::Fill(color));
    }

    fn line(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32) {
        self.ops.push(PaintOp::Line {
            from,
            to,
            color,
            width,
        });
    }
}

/// Full clear-and-replay renderer for a stroke log
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Color32::WHITE)
    }
}

impl Renderer {
    pub fn new(background: Color32) -> Self {
        Self { background }
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Clears the surface and paints every stroke, oldest first, so later
    /// strokes sit on top.
    pub fn redraw(&self, surface: &mut dyn Surface, strokes: &[Stroke]) {
        surface.fill(self.background);
        for stroke in strokes {
            self.paint_stroke(surface, stroke);
        }
        log::debug!("Redrew {} strokes", strokes.len());
    }

    /// Paints one stroke against the surface's current dimensions
    pub fn paint_stroke(&self, surface: &mut dyn Surface, stroke: &Stroke) {
        let size = surface.size();
        surface.line(
            stroke.from().to_pixels(size),
            stroke.to().to_pixels(size),
            stroke.color(),
            stroke.width(),
        );
    }

    /// Resizes the surface and repaints it from the log
    pub fn resize(&self, surface: &mut dyn Surface, size: Vec2, strokes: &[Stroke]) {
        surface.set_size(size);
        self.redraw(surface, strokes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::NormPos;

    fn stroke(color: Color32) -> Stroke {
        Stroke::new(NormPos::new(0.0, 0.0), NormPos::new(0.5, 1.0), color, 3.0)
    }

    #[test]
    fn test_redraw_starts_with_background() {
        let renderer = Renderer::new(Color32::WHITE);
        let mut surface = DisplayList::new(Vec2::new(100.0, 100.0));
        surface.line(Pos2::ZERO, Pos2::new(1.0, 1.0), Color32::RED, 1.0);

        renderer.redraw(&mut surface, &[]);

        assert_eq!(surface.ops(), &[PaintOp::Fill(Color32::WHITE)]);
    }

    #[test]
    fn test_redraw_paints_oldest_first() {
        let renderer = Renderer::default();
        let mut surface = DisplayList::new(Vec2::new(200.0, 100.0));
        let strokes = [stroke(Color32::RED), stroke(Color32::BLUE)];

        renderer.redraw(&mut surface, &strokes);

        let colors: Vec<Color32> = surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                PaintOp::Line { color, .. } => Some(*color),
                PaintOp::Fill(_) => None,
            })
            .collect();
        assert_eq!(colors, vec![Color32::RED, Color32::BLUE]);
    }

    #[test]
    fn test_paint_stroke_uses_current_size() {
        let renderer = Renderer::default();
        let mut surface = DisplayList::new(Vec2::new(200.0, 100.0));

        renderer.paint_stroke(&mut surface, &stroke(Color32::BLACK));

        assert_eq!(
            surface.ops(),
            &[PaintOp::Line {
                from: Pos2::new(0.0, 0.0),
                to: Pos2::new(100.0, 100.0),
                color: Color32::BLACK,
                width: 3.0,
            }]
        );
    }

    #[test]
    fn test_shapes_are_offset_and_capped() {
        let mut surface = DisplayList::new(Vec2::new(10.0, 10.0));
        surface.fill(Color32::WHITE);
        surface.line(Pos2::ZERO, Pos2::new(5.0, 5.0), Color32::BLACK, 2.0);

        let shapes = surface.shapes(Pos2::new(20.0, 30.0));

        // background, segment, two caps
        assert_eq!(shapes.len(), 4);
        match &shapes[0] {
            Shape::Rect(background) => assert_eq!(
                background.rect,
                Rect::from_min_size(Pos2::new(20.0, 30.0), Vec2::new(10.0, 10.0))
            ),
            other => panic!("expected background rect, got {other:?}"),
        }
    }
}
