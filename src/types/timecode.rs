//! Timecode parsing and formatting.
//!
//! Analysis reports express segment boundaries as `H:MM:SS` / `HH:MM:SS`
//! strings. Parsing is deliberately forgiving: a corrupt timecode degrades
//! to `0` with a warning instead of failing the caller, so one bad record
//! cannot blank the whole timeline.

use log::warn;

/// Parse an `H:MM:SS` or `HH:MM:SS` timecode into seconds.
///
/// Returns `None` when the string does not have exactly three numeric
/// colon-separated parts.
pub fn parse_timecode(s: &str) -> Option<f64> {
    let mut parts = [0u32; 3];
    let mut count = 0;
    for piece in s.trim().split(':') {
        if count == 3 {
            return None;
        }
        parts[count] = piece.parse::<u32>().ok()?;
        count += 1;
    }
    if count != 3 {
        return None;
    }
    Some(f64::from(parts[0]) * 3600.0 + f64::from(parts[1]) * 60.0 + f64::from(parts[2]))
}

/// Parse a timecode, falling back to `0.0` on malformed input.
///
/// The fallback is a contract with the rendering path: an unparsable
/// endpoint degrades that one segment rather than aborting the draw pass.
pub fn parse_timecode_lossy(s: &str) -> f64 {
    match parse_timecode(s) {
        Some(seconds) => seconds,
        None => {
            warn!("malformed timecode {s:?}, falling back to 0");
            0.0
        }
    }
}

/// Format seconds as an `H:MM:SS` timecode (report/export convention).
pub fn format_timecode(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}

/// Format seconds as a short `M:SS` position label (tick labels, readouts).
pub fn format_position(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
