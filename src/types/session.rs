use std::path::PathBuf;

use log::info;
use uuid::Uuid;

use crate::ops::analysis::{self, AnalysisProgress};
use crate::types::playback_state::PlaybackState;
use crate::types::segment::AnalysisReport;

/// The media file under review.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaDescriptor {
    pub file_name: String,
    pub path: PathBuf,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewStatus {
    /// Waiting for evidence to be loaded.
    Idle,
    /// Simulated analysis in flight.
    Analyzing(AnalysisProgress),
    /// Report available for review.
    Complete,
    Error(String),
}

/// One evidence review: the session owns everything the timeline consumes
/// (duration, playhead, segments) and is the sole writer of the playhead.
/// Seek requests from the UI are advisory and land here.
#[derive(Debug, Clone)]
pub struct ReviewSession {
    pub evidence_id: String,
    pub media: Option<MediaDescriptor>,
    /// Total media length in seconds; `0.0` means metadata has not arrived
    /// yet, which disables seeking and analysis.
    duration: f64,
    pub playback: PlaybackState,
    pub report: Option<AnalysisReport>,
    pub status: ReviewStatus,
}

impl ReviewSession {
    pub fn new() -> Self {
        ReviewSession {
            evidence_id: generate_evidence_id(),
            media: None,
            duration: 0.0,
            playback: PlaybackState::new(),
            report: None,
            status: ReviewStatus::Idle,
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn duration_known(&self) -> bool {
        self.duration > 0.0
    }

    /// Supply media duration (metadata arrival). Clamps the playhead into
    /// the new range.
    pub fn set_duration(&mut self, seconds: f64) {
        self.duration = seconds.max(0.0);
        self.playback.playhead = self.playback.playhead.clamp(0.0, self.duration);
    }

    /// Honor a seek request. No-op while the duration is unknown.
    pub fn seek(&mut self, time: f64) {
        if !self.duration_known() {
            return;
        }
        self.playback.playhead = time.clamp(0.0, self.duration);
    }

    /// Advance playback by `dt` seconds of wall-clock time, pausing at the
    /// end of the media.
    pub fn tick(&mut self, dt: f64) {
        if !self.playback.is_playing || !self.duration_known() {
            return;
        }
        let next = self.playback.playhead + dt * self.playback.playback_rate;
        if next >= self.duration {
            self.playback.playhead = self.duration;
            self.playback.is_playing = false;
        } else {
            self.playback.playhead = next.max(0.0);
        }
    }

    pub fn attach_media(&mut self, media: MediaDescriptor) {
        info!("evidence {} attached: {}", self.evidence_id, media.file_name);
        self.media = Some(media);
    }

    /// Start the simulated analysis. Requires known duration.
    pub fn begin_analysis(&mut self) -> bool {
        if !self.duration_known() {
            return false;
        }
        self.report = None;
        self.status = ReviewStatus::Analyzing(AnalysisProgress::new());
        true
    }

    /// Drive a running analysis forward; builds the report on completion.
    pub fn advance_analysis(&mut self, dt: f64) {
        let ReviewStatus::Analyzing(ref mut progress) = self.status else {
            return;
        };
        progress.advance(dt);
        if progress.is_complete() {
            let mut report = analysis::analyze(self.duration);
            report.evidence_id = Some(self.evidence_id.clone());
            report.duration_seconds = Some(self.duration);
            info!(
                "analysis complete for {}: {} segment(s), verdict {}",
                self.evidence_id,
                report.manipulated_segments.len(),
                report.verdict_label()
            );
            self.report = Some(report);
            self.status = ReviewStatus::Complete;
        }
    }

    /// Adopt an externally produced report (opened from disk). Picks up the
    /// report's duration when the session has none of its own.
    pub fn adopt_report(&mut self, report: AnalysisReport) {
        if !self.duration_known()
            && let Some(seconds) = report.duration_seconds
        {
            self.set_duration(seconds);
        }
        if let Some(ref id) = report.evidence_id {
            self.evidence_id = id.clone();
        }
        self.report = Some(report);
        self.status = ReviewStatus::Complete;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = ReviewStatus::Error(message.into());
    }

    /// Discard the current evidence and start over with a fresh id.
    pub fn reset(&mut self) {
        *self = ReviewSession::new();
    }
}

impl Default for ReviewSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Short uppercase evidence token, e.g. `#3FA2C1`.
fn generate_evidence_id() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("#{}", id[..6].to_uppercase())
}
