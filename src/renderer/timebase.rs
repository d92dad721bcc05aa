//! Bidirectional mapping between media time and surface pixels.

/// Maps seconds to pixel offsets within a render width and back.
///
/// A duration of zero means "awaiting metadata": both directions collapse
/// to `0` instead of producing NaN or infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeBase {
    duration: f64,
}

impl TimeBase {
    pub fn new(duration: f64) -> Self {
        Self {
            duration: duration.max(0.0),
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Duration unknown or zero; scale and segment math short-circuit.
    pub fn is_degenerate(&self) -> bool {
        self.duration <= 0.0
    }

    /// Pixel offset of time `t` within `width`. Out-of-range times clamp.
    pub fn time_to_px(&self, t: f64, width: f32) -> f32 {
        if self.is_degenerate() || width <= 0.0 {
            return 0.0;
        }
        (t.clamp(0.0, self.duration) / self.duration) as f32 * width
    }

    /// Time at pixel offset `x` within `width`. Out-of-range pixels clamp.
    pub fn px_to_time(&self, x: f32, width: f32) -> f64 {
        if self.is_degenerate() || width <= 0.0 {
            return 0.0;
        }
        f64::from(x.clamp(0.0, width)) / f64::from(width) * self.duration
    }
}
