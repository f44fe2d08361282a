use egui::{Pos2, Rect, Vec2};

use crate::stroke::NormPos;

/// Tracks where a drawing surface sits in the page and how large it is.
///
/// Must be updated after every resize, since both the page offset and the
/// pixel dimensions feed into normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceGeometry {
    rect: Rect,
}

impl Default for SurfaceGeometry {
    fn default() -> Self {
        Self { rect: Rect::ZERO }
    }
}

impl SurfaceGeometry {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// Replaces the tracked layout box
    pub fn update(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Page offset of the surface's top-left corner
    pub fn origin(&self) -> Pos2 {
        self.rect.min
    }

    /// Current pixel dimensions
    pub fn size(&self) -> Vec2 {
        self.rect.size()
    }

    pub fn contains(&self, page_pos: Pos2) -> bool {
        self.rect.contains(page_pos)
    }

    /// Converts a page position into surface-normalized coordinates.
    ///
    /// A zero-sized axis maps every position to `0.0` on that axis.
    pub fn normalize(&self, page_pos: Pos2) -> NormPos {
        let local = page_pos - self.origin();
        let size = self.size();
        NormPos::new(ratio(local.x, size.x), ratio(local.y, size.y))
    }

    /// Converts a normalized position back into surface-local pixels
    pub fn to_local(&self, pos: NormPos) -> Pos2 {
        pos.to_pixels(self.size())
    }
}

fn ratio(offset: f32, extent: f32) -> f32 {
    if extent > 0.0 { offset / extent } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> SurfaceGeometry {
        SurfaceGeometry::new(Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::new(400.0, 200.0)))
    }

    #[test]
    fn test_normalize_subtracts_page_offset() {
        let pos = geometry().normalize(Pos2::new(300.0, 100.0));
        assert_eq!(pos, NormPos::new(0.5, 0.25));
    }

    #[test]
    fn test_normalize_outside_surface() {
        let pos = geometry().normalize(Pos2::new(0.0, 250.0));
        assert!(pos.x < 0.0);
        assert!(pos.y > 1.0);
    }

    #[test]
    fn test_zero_sized_surface_normalizes_to_origin() {
        let geometry = SurfaceGeometry::new(Rect::from_min_size(Pos2::new(10.0, 10.0), Vec2::ZERO));
        assert_eq!(geometry.normalize(Pos2::new(50.0, 50.0)), NormPos::new(0.0, 0.0));
    }

    #[test]
    fn test_update_changes_normalization() {
        let mut geometry = geometry();
        let page_pos = Pos2::new(300.0, 150.0);
        let before = geometry.normalize(page_pos);

        geometry.update(Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::new(800.0, 400.0)));
        let after = geometry.normalize(page_pos);

        assert_eq!(before, NormPos::new(0.5, 0.5));
        assert_eq!(after, NormPos::new(0.25, 0.25));
    }
}
