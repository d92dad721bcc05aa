//! Render-surface abstraction.
//!
//! The timeline engine never owns its drawing surface: the hosting UI
//! supplies one per redraw, and the engine issues pure, replayable draw
//! commands against it. Coordinates are local to the surface (origin at
//! the top-left of the timeline rect, logical points).

use eframe::egui::{Align2, Color32, FontId, Pos2, Rect};

/// Logical surface size plus the device pixel ratio it is backed by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceDims {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl SurfaceDims {
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            pixel_ratio: if pixel_ratio > 0.0 { pixel_ratio } else { 1.0 },
        }
    }

    /// Backing-buffer size in physical pixels.
    pub fn physical(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio).round() as u32,
            (self.height * self.pixel_ratio).round() as u32,
        )
    }
}

/// Minimal 2D drawing contract the timeline engine paints through.
pub trait DrawSurface {
    /// Reallocate the backing buffer for new dimensions.
    fn resize(&mut self, dims: SurfaceDims);
    /// Full clear; every redraw starts with one.
    fn clear(&mut self, color: Color32);
    fn fill_rect(&mut self, rect: Rect, color: Color32);
    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32);
    fn text(&mut self, pos: Pos2, anchor: Align2, text: &str, font: FontId, color: Color32);
}

/// A recorded draw command, for replay comparison in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Resize(SurfaceDims),
    Clear(Color32),
    FillRect(Rect, Color32),
    Line(Pos2, Pos2, f32, Color32),
    Text(Pos2, String, Color32),
}

/// Surface that records commands instead of rasterizing them. Used by the
/// engine tests to assert that a repaint is a pure function of its inputs.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands since the most recent clear, i.e. one full repaint.
    pub fn last_frame(&self) -> &[DrawOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, DrawOp::Clear(_)))
            .unwrap_or(0);
        &self.ops[start..]
    }
}

impl DrawSurface for RecordingSurface {
    fn resize(&mut self, dims: SurfaceDims) {
        self.ops.push(DrawOp::Resize(dims));
    }

    fn clear(&mut self, color: Color32) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.ops.push(DrawOp::FillRect(rect, color));
    }

    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        self.ops.push(DrawOp::Line(from, to, width, color));
    }

    fn text(&mut self, pos: Pos2, _anchor: Align2, text: &str, _font: FontId, color: Color32) {
        self.ops.push(DrawOp::Text(pos, text.to_string(), color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physical_size_scales_by_pixel_ratio() {
        let dims = SurfaceDims::new(600.0, 48.0, 2.0);
        assert_eq!(dims.physical(), (1200, 96));
    }

    #[test]
    fn test_invalid_pixel_ratio_falls_back_to_one() {
        let dims = SurfaceDims::new(600.0, 48.0, 0.0);
        assert_eq!(dims.physical(), (600, 48));
    }

    #[test]
    fn test_last_frame_starts_at_latest_clear() {
        let mut surface = RecordingSurface::new();
        surface.clear(Color32::BLACK);
        surface.line(Pos2::ZERO, Pos2::new(1.0, 0.0), 1.0, Color32::WHITE);
        surface.clear(Color32::BLACK);
        surface.line(Pos2::ZERO, Pos2::new(2.0, 0.0), 1.0, Color32::WHITE);
        assert_eq!(surface.last_frame().len(), 2);
    }
}
