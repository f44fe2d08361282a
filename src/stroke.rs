use egui::{Color32, Pos2, Vec2};
use serde::{Deserialize, Serialize};

/// A position expressed as a fraction of the surface width and height.
///
/// Values inside the surface fall in `0.0..=1.0`; pointer positions tracked
/// outside the surface while a gesture is held may fall outside that range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormPos {
    pub x: f32,
    pub y: f32,
}

impl NormPos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Maps this position onto a surface of the given pixel size.
    pub fn to_pixels(self, size: Vec2) -> Pos2 {
        Pos2::new(self.x * size.x, self.y * size.y)
    }
}

/// One rendered line segment between two normalized points.
///
/// Strokes are immutable once created. `width` is an absolute render width,
/// already scaled against the surface width at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    from: NormPos,
    to: NormPos,
    color: Color32,
    width: f32,
}

impl Stroke {
    pub fn new(from: NormPos, to: NormPos, color: Color32, width: f32) -> Self {
        Self {
            from,
            to,
            color,
            width,
        }
    }

    /// Creates a stroke whose width is derived from a brush size, measured in
    /// hundredths of the surface width.
    pub fn from_brush(from: NormPos, to: NormPos, color: Color32, size: f32, surface_width: f32) -> Self {
        Self::new(from, to, color, scaled_width(size, surface_width))
    }

    pub fn from(&self) -> NormPos {
        self.from
    }

    pub fn to(&self) -> NormPos {
        self.to
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

/// Converts a brush size into an absolute render width for a surface.
pub fn scaled_width(size: f32, surface_width: f32) -> f32 {
    (size / 100.0) * surface_width
}
