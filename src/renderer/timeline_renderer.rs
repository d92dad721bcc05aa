//! The timeline draw pass.
//!
//! One redraw is a synchronous pure function of `(duration, current_time,
//! segments, dims)`: clear, tick scale, segment overlay, playhead, in that
//! order. Playback updates and resizes both funnel into the same entry
//! point; because every pass is a full repaint, any interleaving of the two
//! converges to the same output. The renderer caches nothing but the last
//! surface dimensions, which is what lets it detect resizes.

use eframe::egui::{Align2, Color32, FontId, Pos2, Rect};

use crate::renderer::overlay::{self, SegmentSpan};
use crate::renderer::surface::{DrawSurface, SurfaceDims};
use crate::renderer::ticks;
use crate::renderer::timebase::TimeBase;
use crate::types::segment::Segment;

/// Everything the hosting session supplies for one redraw. The renderer
/// reads it and derives pixels; it never writes any of it back.
#[derive(Debug, Clone, Copy)]
pub struct RenderState<'a> {
    pub duration: f64,
    pub current_time: f64,
    pub segments: &'a [Segment],
}

// Forensics palette carried over from the review frontend.
const TRACK_BG: Color32 = Color32::from_rgb(18, 24, 38);
const TICK_MINOR: Color32 = Color32::from_rgb(82, 82, 82);
const TICK_MAJOR: Color32 = Color32::from_rgb(120, 120, 120);
const TICK_LABEL: Color32 = Color32::from_rgb(156, 163, 175);
const SEGMENT_RED: Color32 = Color32::from_rgb(239, 68, 68);
const PLAYHEAD_BLUE: Color32 = Color32::from_rgb(59, 130, 246);

const MINOR_TICK_LEN: f32 = 6.0;
const MAJOR_TICK_LEN: f32 = 10.0;
const PLAYHEAD_HANDLE: f32 = 6.0;

pub struct TimelineRenderer {
    /// Last surface dimensions, the engine's only retained state.
    last_dims: Option<SurfaceDims>,
}

impl TimelineRenderer {
    pub fn new() -> Self {
        Self { last_dims: None }
    }

    /// Full repaint. Resizes the surface first when the host rect or the
    /// device pixel ratio changed since the previous pass.
    pub fn redraw(&mut self, surface: &mut dyn DrawSurface, state: &RenderState, dims: SurfaceDims) {
        if self.last_dims != Some(dims) {
            surface.resize(dims);
            self.last_dims = Some(dims);
        }

        surface.clear(TRACK_BG);

        let base = TimeBase::new(state.duration);
        let width = dims.width;
        let height = dims.height;

        for tick in ticks::compute_ticks(&base, width) {
            let (len, color) = if tick.major {
                (MAJOR_TICK_LEN, TICK_MAJOR)
            } else {
                (MINOR_TICK_LEN, TICK_MINOR)
            };
            surface.line(
                Pos2::new(tick.x, height - len),
                Pos2::new(tick.x, height),
                1.0,
                color,
            );
            if let Some(label) = tick.label {
                surface.text(
                    Pos2::new(tick.x + 3.0, 2.0),
                    Align2::LEFT_TOP,
                    &label,
                    FontId::monospace(9.0),
                    TICK_LABEL,
                );
            }
        }

        // Painter's algorithm: list order is paint order, later entries win.
        for span in overlay::resolve_spans(state.segments, &base, width) {
            let alpha = (60.0 + span.confidence * 140.0) as u8;
            surface.fill_rect(
                Rect::from_min_max(Pos2::new(span.x0, 0.0), Pos2::new(span.x1, height)),
                Color32::from_rgba_unmultiplied(
                    SEGMENT_RED.r(),
                    SEGMENT_RED.g(),
                    SEGMENT_RED.b(),
                    alpha,
                ),
            );
            surface.line(
                Pos2::new(span.x0, 1.0),
                Pos2::new(span.x1, 1.0),
                2.0,
                SEGMENT_RED,
            );
        }

        let playhead_x = base.time_to_px(state.current_time, width);
        surface.line(
            Pos2::new(playhead_x, 0.0),
            Pos2::new(playhead_x, height),
            2.0,
            PLAYHEAD_BLUE,
        );
        surface.fill_rect(
            Rect::from_min_max(
                Pos2::new(playhead_x - PLAYHEAD_HANDLE / 2.0, 0.0),
                Pos2::new(playhead_x + PLAYHEAD_HANDLE / 2.0, PLAYHEAD_HANDLE),
            ),
            PLAYHEAD_BLUE,
        );
    }

    /// Translate a pointer position into a clamped seek time.
    ///
    /// Advisory: the caller forwards the result to the session's seek
    /// callback and the playhead only moves once the session feeds the new
    /// time back through [`RenderState`]. Returns `None` while the duration
    /// is unknown, when no seek target is meaningful.
    pub fn pointer_seek(duration: f64, x: f32, width: f32) -> Option<f64> {
        let base = TimeBase::new(duration);
        if base.is_degenerate() {
            return None;
        }
        Some(base.px_to_time(x, width).clamp(0.0, duration))
    }

    /// Index of the topmost segment under pixel `x`, for hover details.
    pub fn segment_at(state: &RenderState, x: f32, width: f32) -> Option<usize> {
        let base = TimeBase::new(state.duration);
        let spans: Vec<SegmentSpan> = overlay::resolve_spans(state.segments, &base, width);
        overlay::hit_test(&spans, x)
    }
}

impl Default for TimelineRenderer {
    fn default() -> Self {
        Self::new()
    }
}
