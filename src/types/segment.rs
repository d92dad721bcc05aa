use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::timecode;

/// A flagged time interval with an associated manipulation confidence.
///
/// Boundaries are source timecodes (`H:MM:SS`); they are resolved to
/// seconds lazily so a corrupt record survives deserialization and only
/// degrades at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start_time: String,
    pub end_time: String,
    pub confidence: f64,
}

impl Segment {
    pub fn new(start_seconds: f64, end_seconds: f64, confidence: f64) -> Self {
        Segment {
            start_time: timecode::format_timecode(start_seconds),
            end_time: timecode::format_timecode(end_seconds),
            confidence,
        }
    }

    /// Start boundary in seconds; malformed timecodes fall back to 0.
    pub fn start_seconds(&self) -> f64 {
        timecode::parse_timecode_lossy(&self.start_time)
    }

    /// End boundary in seconds; malformed timecodes fall back to 0.
    pub fn end_seconds(&self) -> f64 {
        timecode::parse_timecode_lossy(&self.end_time)
    }

    /// Confidence clamped to `[0, 1]`. Reports are opaque external data,
    /// so out-of-range values are tolerated on load and clamped here.
    pub fn clamped_confidence(&self) -> f64 {
        self.confidence.clamp(0.0, 1.0)
    }
}

/// A manipulation-likelihood assessment for one media file.
///
/// Field layout matches the detector service's response schema so reports
/// produced by the backend load unchanged. The optional trailing fields are
/// provenance added on export and ignored when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub input_type: String,
    pub video_is_fake: bool,
    pub overall_confidence: f64,
    pub manipulated_segments: Vec<Segment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
}

impl AnalysisReport {
    /// Build a report from aggregated segments, applying the verdict rule:
    /// overall confidence is the strongest segment, fake above 0.5.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        let max_confidence = segments
            .iter()
            .map(Segment::clamped_confidence)
            .fold(0.0_f64, f64::max);
        AnalysisReport {
            input_type: "video".to_string(),
            video_is_fake: max_confidence > 0.5,
            overall_confidence: max_confidence,
            manipulated_segments: segments,
            evidence_id: None,
            generated_at: None,
            duration_seconds: None,
        }
    }

    pub fn verdict_label(&self) -> &'static str {
        if self.video_is_fake {
            "MANIPULATION DETECTED"
        } else {
            "AUTHENTIC MEDIA"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_seconds_resolution() {
        let seg = Segment {
            start_time: "0:00:10".to_string(),
            end_time: "0:00:20".to_string(),
            confidence: 0.9,
        };
        assert_eq!(seg.start_seconds(), 10.0);
        assert_eq!(seg.end_seconds(), 20.0);
    }

    #[test]
    fn test_segment_malformed_timecode_degrades_to_zero() {
        let seg = Segment {
            start_time: "garbage".to_string(),
            end_time: "0:00:05".to_string(),
            confidence: 0.7,
        };
        assert_eq!(seg.start_seconds(), 0.0);
        assert_eq!(seg.end_seconds(), 5.0);
    }

    #[test]
    fn test_confidence_clamping() {
        let seg = Segment::new(0.0, 1.0, 1.7);
        assert_eq!(seg.clamped_confidence(), 1.0);
        let seg = Segment::new(0.0, 1.0, -0.2);
        assert_eq!(seg.clamped_confidence(), 0.0);
    }

    #[test]
    fn test_verdict_from_segments() {
        let fake = AnalysisReport::from_segments(vec![
            Segment::new(4.0, 8.0, 0.4),
            Segment::new(10.0, 12.0, 0.91),
        ]);
        assert!(fake.video_is_fake);
        assert_eq!(fake.overall_confidence, 0.91);
        assert_eq!(fake.verdict_label(), "MANIPULATION DETECTED");

        let clean = AnalysisReport::from_segments(vec![]);
        assert!(!clean.video_is_fake);
        assert_eq!(clean.overall_confidence, 0.0);
        assert_eq!(clean.verdict_label(), "AUTHENTIC MEDIA");
    }

    #[test]
    fn test_backend_shaped_report_loads_without_provenance() {
        let json = r#"
        {
            "input_type": "video",
            "video_is_fake": true,
            "overall_confidence": 0.93,
            "manipulated_segments": [
                { "start_time": "0:00:04", "end_time": "0:00:09", "confidence": 0.93 }
            ]
        }
        "#;
        let report: AnalysisReport = serde_json::from_str(json).unwrap();
        assert!(report.video_is_fake);
        assert_eq!(report.manipulated_segments.len(), 1);
        assert!(report.evidence_id.is_none());
        assert!(report.duration_seconds.is_none());
    }
}
