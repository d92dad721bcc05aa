//! Resolution of flagged segments into clipped pixel spans.

use crate::renderer::timebase::TimeBase;
use crate::types::segment::Segment;

/// Minimum rendered span width so zero-length anomalies stay visible and
/// clickable. Consistent across all prior timeline revisions.
pub const MIN_SEGMENT_WIDTH: f32 = 2.0;

/// A segment resolved to surface pixels. `index` points back into the
/// source list; the span doubles as the hover/click hit region.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSpan {
    pub index: usize,
    pub x0: f32,
    pub x1: f32,
    pub confidence: f32,
}

impl SegmentSpan {
    pub fn contains(&self, x: f32) -> bool {
        x >= self.x0 && x < self.x1
    }
}

/// Map the segment list to pixel spans in list order.
///
/// List order is paint order and nothing more: overlapping spans are kept
/// as-is and later entries win visually. A segment whose timecodes are
/// malformed degrades (endpoints fall back to 0) but is never dropped, and
/// never affects its neighbours.
pub fn resolve_spans(segments: &[Segment], base: &TimeBase, width: f32) -> Vec<SegmentSpan> {
    if base.is_degenerate() || width <= 0.0 {
        return Vec::new();
    }

    segments
        .iter()
        .enumerate()
        .map(|(index, seg)| {
            let mut x0 = base.time_to_px(seg.start_seconds(), width);
            let mut x1 = base.time_to_px(seg.end_seconds(), width);
            // Inverted or sub-pixel spans widen in place; spans at the right
            // edge shift left so the minimum width stays inside the surface.
            if x1 - x0 < MIN_SEGMENT_WIDTH {
                x1 = x0 + MIN_SEGMENT_WIDTH;
                if x1 > width {
                    x1 = width;
                    x0 = (width - MIN_SEGMENT_WIDTH).max(0.0);
                }
            }
            SegmentSpan {
                index,
                x0,
                x1,
                confidence: seg.clamped_confidence() as f32,
            }
        })
        .collect()
}

/// Topmost span under pixel `x`: later list entries paint over earlier
/// ones, so the hit test scans in reverse.
pub fn hit_test(spans: &[SegmentSpan], x: f32) -> Option<usize> {
    spans.iter().rev().find(|span| span.contains(x)).map(|span| span.index)
}
