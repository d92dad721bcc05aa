//! Adaptive tick scale derived from duration and render width.

use crate::renderer::timebase::TimeBase;
use crate::types::timecode;

/// One gridline on the time axis. Every fifth tick is major and carries a
/// rendered `M:SS` label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub time: f64,
    pub x: f32,
    pub major: bool,
    pub label: Option<String>,
}

/// Number of minor ticks the scale aims for across the width.
const TARGET_TICK_COUNT: f64 = 20.0;
/// Every nth tick is promoted to a labeled major tick.
const MAJOR_EVERY: usize = 5;

/// Compute the full tick set for the current `(duration, width)`.
///
/// Recomputed from scratch on every draw: no cached tick state, so the
/// scale cannot drift or flicker while duration settles during metadata
/// load. Identical inputs always yield the identical set.
pub fn compute_ticks(base: &TimeBase, width: f32) -> Vec<Tick> {
    if base.is_degenerate() || width <= 0.0 {
        return Vec::new();
    }

    let interval = (base.duration() / TARGET_TICK_COUNT).floor().max(1.0);
    let count = (base.duration() / interval).floor() as usize;

    (0..=count)
        .map(|i| {
            let time = i as f64 * interval;
            let major = i % MAJOR_EVERY == 0;
            Tick {
                time,
                x: base.time_to_px(time, width),
                major,
                label: major.then(|| timecode::format_position(time)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_density_near_target() {
        let base = TimeBase::new(600.0);
        let ticks = compute_ticks(&base, 800.0);
        // interval = floor(600/20) = 30s -> 21 ticks including both ends.
        assert_eq!(ticks.len(), 21);
        assert_eq!(ticks[0].time, 0.0);
        assert_eq!(ticks[20].time, 600.0);
    }

    #[test]
    fn test_short_duration_clamps_interval_to_one_second() {
        let base = TimeBase::new(5.0);
        let ticks = compute_ticks(&base, 600.0);
        assert_eq!(ticks.len(), 6);
        assert_eq!(ticks[1].time, 1.0);
    }

    #[test]
    fn test_major_ticks_every_fifth_with_labels() {
        let base = TimeBase::new(600.0);
        let ticks = compute_ticks(&base, 800.0);
        for (i, tick) in ticks.iter().enumerate() {
            assert_eq!(tick.major, i % 5 == 0);
            assert_eq!(tick.label.is_some(), tick.major);
        }
        assert_eq!(ticks[5].label.as_deref(), Some("2:30"));
        assert_eq!(ticks[10].label.as_deref(), Some("5:00"));
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let base = TimeBase::new(137.0);
        assert_eq!(compute_ticks(&base, 543.0), compute_ticks(&base, 543.0));
    }

    #[test]
    fn test_degenerate_duration_yields_no_ticks() {
        assert!(compute_ticks(&TimeBase::new(0.0), 600.0).is_empty());
        assert!(compute_ticks(&TimeBase::new(60.0), 0.0).is_empty());
    }

    #[test]
    fn test_tick_positions_span_width() {
        let base = TimeBase::new(60.0);
        let ticks = compute_ticks(&base, 600.0);
        assert_eq!(ticks.first().unwrap().x, 0.0);
        assert_eq!(ticks.last().unwrap().x, 600.0);
        for pair in ticks.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }
    }
}
