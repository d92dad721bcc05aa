//! Simulated analysis pipeline: frames -> scores -> segments -> report.
//!
//! The real detector runs as a remote service; its output is consumed as
//! opaque report data. This module stands in for it during local review:
//! a mock expert scores frames at a fixed sampling rate and a temporal
//! aggregator groups above-threshold runs into timecoded segments.

use crate::types::segment::{AnalysisReport, Segment};

/// Frame sampling rate used by the scoring pipeline.
pub const ANALYSIS_FPS: f64 = 5.0;
/// Frame scores above this threshold are grouped into flagged segments.
pub const SEGMENT_THRESHOLD: f64 = 0.5;

/// Progress-stage labels shown while an analysis is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStage {
    SecureUpload,
    FrameExtraction,
    TemporalScan,
    PatternRecognition,
}

impl AnalysisStage {
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisStage::SecureUpload => "Stage 1/4: Initializing secure upload...",
            AnalysisStage::FrameExtraction => "Stage 2/4: Frame Extraction & Normalization",
            AnalysisStage::TemporalScan => "Stage 3/4: Temporal Inconsistency Detection",
            AnalysisStage::PatternRecognition => "Stage 4/4: Pattern Recognition",
        }
    }

    fn for_percent(percent: f32) -> Self {
        if percent < 20.0 {
            AnalysisStage::SecureUpload
        } else if percent < 30.0 {
            AnalysisStage::FrameExtraction
        } else if percent < 60.0 {
            AnalysisStage::TemporalScan
        } else {
            AnalysisStage::PatternRecognition
        }
    }
}

/// Wall-clock driven progress for a running analysis.
///
/// Later stages advance slower, mirroring the staged cadence of the
/// detector service (fast upload, slow pattern pass).
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisProgress {
    percent: f32,
}

impl AnalysisProgress {
    pub fn new() -> Self {
        Self { percent: 0.0 }
    }

    pub fn percent(&self) -> f32 {
        self.percent
    }

    pub fn stage(&self) -> AnalysisStage {
        AnalysisStage::for_percent(self.percent)
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= 100.0
    }

    /// Advance progress by `dt` seconds of wall-clock time.
    pub fn advance(&mut self, dt: f64) {
        let rate = if self.percent < 30.0 {
            4.0
        } else if self.percent < 60.0 {
            2.0
        } else {
            1.0
        };
        self.percent = (self.percent + (rate * dt) as f32).min(100.0);
    }
}

impl Default for AnalysisProgress {
    fn default() -> Self {
        Self::new()
    }
}

/// Stable pseudo-random value in `[0, 1)` derived from the frame index.
/// Hash-based so repeated runs over the same media agree.
fn unit_hash(index: usize) -> f64 {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    index.hash(&mut hasher);
    (hasher.finish() % 10_000) as f64 / 10_000.0
}

/// Mock per-frame manipulation scores for a clip of the given duration.
///
/// Frames in the middle 40-60% band score in the fake range (0.8..0.99),
/// everything else in the real range (0.0..0.2).
pub fn mock_frame_scores(duration: f64) -> Vec<f64> {
    let total = (duration.max(0.0) * ANALYSIS_FPS).floor() as usize;
    (0..total)
        .map(|i| {
            let noise = unit_hash(i);
            let fi = i as f64;
            if fi > 0.4 * total as f64 && fi < 0.6 * total as f64 {
                0.8 + noise * 0.19
            } else {
                noise * 0.2
            }
        })
        .collect()
}

/// Group consecutive above-threshold frame scores into timecoded segments.
/// Segment confidence is the mean of its member scores.
pub fn aggregate_segments(scores: &[f64], fps: f64, threshold: f64) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut run_start: Option<usize> = None;
    let mut run_sum = 0.0;

    for (i, &score) in scores.iter().enumerate() {
        if score > threshold {
            if run_start.is_none() {
                run_start = Some(i);
                run_sum = 0.0;
            }
            run_sum += score;
        } else if let Some(start) = run_start.take() {
            let len = (i - start) as f64;
            segments.push(Segment::new(start as f64 / fps, i as f64 / fps, run_sum / len));
        }
    }
    if let Some(start) = run_start {
        let len = (scores.len() - start) as f64;
        segments.push(Segment::new(
            start as f64 / fps,
            scores.len() as f64 / fps,
            run_sum / len,
        ));
    }
    segments
}

/// Full pipeline: duration -> scores -> segments -> verdict.
pub fn analyze(duration: f64) -> AnalysisReport {
    let scores = mock_frame_scores(duration);
    let segments = aggregate_segments(&scores, ANALYSIS_FPS, SEGMENT_THRESHOLD);
    AnalysisReport::from_segments(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_scores_band_placement() {
        let scores = mock_frame_scores(60.0);
        assert_eq!(scores.len(), 300);
        // Inside the 40-60% band: fake range.
        for &s in &scores[121..179] {
            assert!(s >= 0.8 && s < 0.99, "band score out of range: {s}");
        }
        // Well outside the band: real range.
        for &s in &scores[..120] {
            assert!(s < 0.2 + f64::EPSILON, "lead-in score out of range: {s}");
        }
    }

    #[test]
    fn test_mock_scores_deterministic() {
        assert_eq!(mock_frame_scores(30.0), mock_frame_scores(30.0));
    }

    #[test]
    fn test_aggregate_groups_consecutive_runs() {
        let scores = [0.1, 0.9, 0.8, 0.1, 0.1, 0.7, 0.2];
        let segments = aggregate_segments(&scores, 1.0, 0.5);
        assert_eq!(segments.len(), 2);

        assert_eq!(segments[0].start_time, "0:00:01");
        assert_eq!(segments[0].end_time, "0:00:03");
        assert!((segments[0].confidence - 0.85).abs() < 1e-9);

        assert_eq!(segments[1].start_time, "0:00:05");
        assert_eq!(segments[1].end_time, "0:00:06");
        assert!((segments[1].confidence - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_run_reaching_end() {
        let scores = [0.1, 0.9, 0.9];
        let segments = aggregate_segments(&scores, 1.0, 0.5);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].end_time, "0:00:03");
    }

    #[test]
    fn test_aggregate_empty_and_clean_scores() {
        assert!(aggregate_segments(&[], 5.0, 0.5).is_empty());
        assert!(aggregate_segments(&[0.1, 0.2, 0.3], 5.0, 0.5).is_empty());
    }

    #[test]
    fn test_analyze_flags_midsection() {
        let report = analyze(120.0);
        assert!(report.video_is_fake);
        assert!(report.overall_confidence > 0.5);
        assert!(!report.manipulated_segments.is_empty());
        // All segments fall inside the clip.
        for seg in &report.manipulated_segments {
            assert!(seg.start_seconds() < seg.end_seconds());
            assert!(seg.end_seconds() <= 120.0);
        }
    }

    #[test]
    fn test_analyze_degenerate_duration() {
        let report = analyze(0.0);
        assert!(!report.video_is_fake);
        assert!(report.manipulated_segments.is_empty());
    }

    #[test]
    fn test_progress_stages_and_completion() {
        let mut progress = AnalysisProgress::new();
        assert_eq!(progress.stage(), AnalysisStage::SecureUpload);
        assert!(!progress.is_complete());

        progress.advance(6.0); // 24%
        assert_eq!(progress.stage(), AnalysisStage::FrameExtraction);
        progress.advance(5.0); // past 30%
        assert_eq!(progress.stage(), AnalysisStage::TemporalScan);

        for _ in 0..200 {
            progress.advance(1.0);
        }
        assert!(progress.is_complete());
        assert_eq!(progress.percent(), 100.0);
        assert_eq!(progress.stage(), AnalysisStage::PatternRecognition);
    }
}
