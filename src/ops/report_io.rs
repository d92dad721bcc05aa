//! Report export and import.
//!
//! Exported reports are the detector response plus provenance (evidence
//! id, generation timestamp, media duration). Import tolerates bare
//! backend responses that carry none of the extras.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use log::info;

use crate::types::segment::AnalysisReport;

/// Write the report as pretty JSON, stamping provenance fields.
pub fn export_report(
    report: &AnalysisReport,
    evidence_id: &str,
    duration: f64,
    path: &Path,
) -> Result<()> {
    let mut out = report.clone();
    out.evidence_id = Some(evidence_id.to_string());
    out.generated_at = Some(Utc::now());
    if out.duration_seconds.is_none() && duration > 0.0 {
        out.duration_seconds = Some(duration);
    }

    let file = File::create(path)
        .with_context(|| format!("failed to create report file {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &out)
        .with_context(|| format!("failed to serialize report to {}", path.display()))?;
    info!("exported report {} to {}", evidence_id, path.display());
    Ok(())
}

/// Load a report from disk. Accepts both exported reports and raw
/// detector responses.
pub fn load_report(path: &Path) -> Result<AnalysisReport> {
    let file = File::open(path)
        .with_context(|| format!("failed to open report file {}", path.display()))?;
    let report: AnalysisReport = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("{} is not a valid analysis report", path.display()))?;
    info!(
        "loaded report from {} ({} segment(s))",
        path.display(),
        report.manipulated_segments.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::segment::Segment;

    #[test]
    fn test_export_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        let report = AnalysisReport::from_segments(vec![Segment::new(10.0, 20.0, 0.92)]);
        export_report(&report, "#AB12CD", 60.0, &path).unwrap();

        let loaded = load_report(&path).unwrap();
        assert_eq!(loaded.manipulated_segments, report.manipulated_segments);
        assert_eq!(loaded.evidence_id.as_deref(), Some("#AB12CD"));
        assert_eq!(loaded.duration_seconds, Some(60.0));
        assert!(loaded.generated_at.is_some());
        assert!(loaded.video_is_fake);
    }

    #[test]
    fn test_export_skips_duration_when_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        let report = AnalysisReport::from_segments(vec![]);
        export_report(&report, "#000000", 0.0, &path).unwrap();

        let loaded = load_report(&path).unwrap();
        assert_eq!(loaded.duration_seconds, None);
    }

    #[test]
    fn test_load_backend_shaped_response() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backend.json");
        std::fs::write(
            &path,
            r#"{
                "input_type": "video",
                "video_is_fake": false,
                "overall_confidence": 0.0,
                "manipulated_segments": []
            }"#,
        )
        .unwrap();

        let loaded = load_report(&path).unwrap();
        assert!(!loaded.video_is_fake);
        assert!(loaded.evidence_id.is_none());
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(load_report(&path).is_err());
    }

    #[test]
    fn test_load_missing_file_errors() {
        assert!(load_report(Path::new("/nonexistent/report.json")).is_err());
    }
}
