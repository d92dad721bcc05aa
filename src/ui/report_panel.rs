//! Analysis report panel: verdict card plus the flagged-segment table.

use eframe::egui::{self, Color32, RichText};
use egui_extras::{Column, TableBuilder};

use crate::types::segment::AnalysisReport;

const VERDICT_RED: Color32 = Color32::from_rgb(239, 68, 68);
const VERDICT_GREEN: Color32 = Color32::from_rgb(34, 197, 94);

#[derive(Debug, Clone)]
pub enum ReportEvent {
    /// Jump the playhead to a flagged segment's start.
    SeekTo(f64),
    /// Export the report to disk.
    Export,
}

pub struct ReportPanel<'a> {
    report: &'a AnalysisReport,
    evidence_id: &'a str,
}

impl<'a> ReportPanel<'a> {
    pub fn new(report: &'a AnalysisReport, evidence_id: &'a str) -> Self {
        Self {
            report,
            evidence_id,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> Vec<ReportEvent> {
        let mut events = Vec::new();

        let accent = if self.report.video_is_fake {
            VERDICT_RED
        } else {
            VERDICT_GREEN
        };

        egui::Frame::group(ui.style())
            .stroke(egui::Stroke::new(1.0, accent))
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new("ANALYSIS VERDICT").small().weak());
                    ui.label(
                        RichText::new(self.report.verdict_label())
                            .heading()
                            .color(accent),
                    );
                    ui.label(format!(
                        "Confidence: {:.1}%",
                        self.report.overall_confidence * 100.0
                    ));
                    ui.label(RichText::new(format!("Evidence {}", self.evidence_id)).weak());
                });
            });

        ui.add_space(8.0);
        ui.label(RichText::new("Flagged Segments").strong());

        if self.report.manipulated_segments.is_empty() {
            ui.label(RichText::new("No manipulated segments detected.").weak());
        } else {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto().at_least(60.0))
                .column(Column::auto().at_least(60.0))
                .column(Column::remainder())
                .column(Column::auto())
                .header(18.0, |mut header| {
                    header.col(|ui| {
                        ui.label(RichText::new("Start").small().strong());
                    });
                    header.col(|ui| {
                        ui.label(RichText::new("End").small().strong());
                    });
                    header.col(|ui| {
                        ui.label(RichText::new("Confidence").small().strong());
                    });
                    header.col(|_| {});
                })
                .body(|mut body| {
                    for seg in &self.report.manipulated_segments {
                        body.row(20.0, |mut row| {
                            row.col(|ui| {
                                ui.monospace(&seg.start_time);
                            });
                            row.col(|ui| {
                                ui.monospace(&seg.end_time);
                            });
                            row.col(|ui| {
                                let confidence = seg.clamped_confidence() as f32;
                                ui.add(
                                    egui::ProgressBar::new(confidence)
                                        .text(format!("{:.0}%", confidence * 100.0))
                                        .desired_height(14.0),
                                );
                            });
                            row.col(|ui| {
                                if ui.small_button("Jump").clicked() {
                                    events.push(ReportEvent::SeekTo(seg.start_seconds()));
                                }
                            });
                        });
                    }
                });
        }

        ui.add_space(8.0);
        if ui.button("Export Report").clicked() {
            events.push(ReportEvent::Export);
        }

        events
    }
}
