use std::time::Instant;

use eframe::egui::{self, Color32, RichText};
use log::{debug, error};

use crate::ops::{intake, report_io};
use crate::renderer::timeline_renderer::TimelineRenderer;
use crate::types::session::{ReviewSession, ReviewStatus};
use crate::ui::report_panel::{ReportEvent, ReportPanel};
use crate::ui::timeline_panel::{TimelineEvent, TimelineWidget};

/// Frame rate of the placeholder media readout.
const DISPLAY_FPS: f64 = 30.0;

pub struct DeepscopeApp {
    pub session: ReviewSession,
    renderer: TimelineRenderer,
    error_banner: Option<String>,
    last_frame: Option<Instant>,
}

impl DeepscopeApp {
    pub fn new(session: ReviewSession) -> Self {
        Self {
            session,
            renderer: TimelineRenderer::new(),
            error_banner: None,
            last_frame: None,
        }
    }

    fn frame_dt(&mut self) -> f64 {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|last| now.duration_since(last).as_secs_f64())
            .unwrap_or(0.0);
        self.last_frame = Some(now);
        dt
    }

    fn attach_media_path(&mut self, path: &std::path::Path) {
        match intake::validate_media_file(path) {
            Ok(media) => {
                self.error_banner = None;
                self.session.attach_media(media);
            }
            Err(err) => self.error_banner = Some(err.to_string()),
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<_> = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            if let Some(path) = file.path {
                debug!("file dropped: {}", path.display());
                self.attach_media_path(&path);
            }
        }
    }

    fn export_report(&mut self) {
        let Some(report) = self.session.report.clone() else {
            return;
        };
        let suggested = format!(
            "report_{}.json",
            self.session.evidence_id.trim_start_matches('#').to_lowercase()
        );
        let picked = rfd::FileDialog::new()
            .add_filter("JSON report", &["json"])
            .set_file_name(suggested)
            .save_file();
        if let Some(path) = picked
            && let Err(err) = report_io::export_report(
                &report,
                &self.session.evidence_id,
                self.session.duration(),
                &path,
            )
        {
            error!("report export failed: {err:#}");
            self.error_banner = Some(format!("Export failed: {err}"));
        }
    }

    fn show_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("DEEPSCOPE")
                    .strong()
                    .color(Color32::from_rgb(59, 130, 246)),
            );
            ui.label(RichText::new("Forensic Media Review").weak());
            ui.colored_label(Color32::from_rgb(34, 197, 94), "●");
            ui.label(RichText::new("Engine Ready").small().weak());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(&self.session.evidence_id).monospace());
                if let Some(media) = &self.session.media {
                    ui.label(RichText::new(&media.file_name).weak());
                }
            });
        });
    }

    fn show_idle(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.25);
            ui.heading("Load Evidence");
            ui.label(RichText::new("Drag a media file here, or").weak());
            if ui.button("Select Media File...").clicked() {
                let picked = rfd::FileDialog::new()
                    .add_filter("Media", &["mp4", "avi", "mov", "jpg", "jpeg", "png"])
                    .pick_file();
                if let Some(path) = picked {
                    self.attach_media_path(&path);
                }
            }
            if ui.button("Open Report...").clicked() {
                let picked = rfd::FileDialog::new()
                    .add_filter("JSON report", &["json"])
                    .pick_file();
                if let Some(path) = picked {
                    match report_io::load_report(&path) {
                        Ok(report) => {
                            self.error_banner = None;
                            self.session.adopt_report(report);
                        }
                        Err(err) => self.error_banner = Some(err.to_string()),
                    }
                }
            }

            if self.session.media.is_some() {
                ui.add_space(12.0);
                let mut duration = self.session.duration();
                ui.horizontal(|ui| {
                    ui.label("Duration (s):");
                    if ui
                        .add(
                            egui::DragValue::new(&mut duration)
                                .range(0.0..=86_400.0)
                                .speed(1.0),
                        )
                        .changed()
                    {
                        self.session.set_duration(duration);
                    }
                });
                let ready = self.session.duration_known();
                if ui
                    .add_enabled(ready, egui::Button::new("Run Analysis"))
                    .clicked()
                {
                    self.session.begin_analysis();
                }
                if !ready {
                    ui.label(
                        RichText::new("Duration unknown; set it before analysis.")
                            .small()
                            .weak(),
                    );
                }
            }
        });
    }

    fn show_analyzing(&self, ui: &mut egui::Ui) {
        let ReviewStatus::Analyzing(ref progress) = self.session.status else {
            return;
        };
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.3);
            ui.spinner();
            ui.add_space(8.0);
            ui.label(progress.stage().label());
            ui.add_space(4.0);
            ui.add(
                egui::ProgressBar::new(progress.percent() / 100.0)
                    .desired_width(320.0)
                    .text(format!("{:.0}%", progress.percent())),
            );
        });
    }

    fn show_media_placeholder(&self, ui: &mut egui::Ui) {
        // Stand-in for the video viewport: a frame counter readout driven
        // by the same playhead the timeline renders.
        ui.centered_and_justified(|ui| {
            let playhead = self.session.playback.playhead;
            let frame = (playhead * DISPLAY_FPS).floor() as u64;
            let total = (self.session.duration() * DISPLAY_FPS).floor() as u64;
            ui.label(
                RichText::new(format!("FRAME {frame} / {total}  |  {playhead:.2}s"))
                    .monospace()
                    .size(18.0)
                    .weak(),
            );
        });
    }

    fn show_transport(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("⏮").clicked() {
                self.session.seek(0.0);
            }
            if ui.button("⏪").clicked() {
                let target = self.session.playback.playhead - 1.0;
                self.session.seek(target);
            }
            let play_label = if self.session.playback.is_playing {
                "⏸"
            } else {
                "▶"
            };
            if ui.button(play_label).clicked() && self.session.duration_known() {
                self.session.playback.is_playing = !self.session.playback.is_playing;
            }
            if ui.button("⏩").clicked() {
                let target = self.session.playback.playhead + 1.0;
                self.session.seek(target);
            }
            if ui.button("⏭").clicked() {
                let end = self.session.duration();
                self.session.seek(end);
            }
            ui.label(format!("{:.1}x", self.session.playback.playback_rate));
        });
    }

    fn show_complete(&mut self, ctx: &egui::Context) {
        let mut report_events = Vec::new();
        egui::SidePanel::right("report_panel")
            .default_width(320.0)
            .show(ctx, |ui| {
                if let Some(report) = &self.session.report {
                    report_events = ReportPanel::new(report, &self.session.evidence_id).show(ui);
                }
                ui.add_space(8.0);
                if ui.button("New Review").clicked() {
                    self.session.reset();
                }
            });

        let mut timeline_events = Vec::new();
        egui::TopBottomPanel::bottom("timeline_panel")
            .min_height(110.0)
            .show(ctx, |ui| {
                self.show_transport(ui);
                let segments = self
                    .session
                    .report
                    .as_ref()
                    .map(|r| r.manipulated_segments.clone())
                    .unwrap_or_default();
                timeline_events = TimelineWidget::new(
                    &mut self.renderer,
                    self.session.duration(),
                    self.session.playback.playhead,
                    &segments,
                )
                .show(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_media_placeholder(ui);
        });

        for event in timeline_events {
            match event {
                TimelineEvent::Seeked(time) => self.session.seek(time),
            }
        }
        for event in report_events {
            match event {
                ReportEvent::SeekTo(time) => self.session.seek(time),
                ReportEvent::Export => self.export_report(),
            }
        }
    }

    fn show_error(&mut self, ui: &mut egui::Ui, message: String) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.3);
            ui.label(
                RichText::new("Analysis failed")
                    .heading()
                    .color(Color32::from_rgb(239, 68, 68)),
            );
            ui.label(message);
            ui.add_space(8.0);
            if ui.button("Start Over").clicked() {
                self.session.reset();
            }
        });
    }
}

impl eframe::App for DeepscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt = self.frame_dt();
        self.handle_dropped_files(ctx);

        match self.session.status {
            ReviewStatus::Analyzing(_) => {
                self.session.advance_analysis(dt);
                ctx.request_repaint();
            }
            ReviewStatus::Complete if self.session.playback.is_playing => {
                self.session.tick(dt);
                ctx.request_repaint();
            }
            _ => {}
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.show_header(ui);
            if let Some(banner) = self.error_banner.clone() {
                ui.horizontal(|ui| {
                    ui.colored_label(Color32::from_rgb(239, 68, 68), banner);
                    if ui.small_button("Dismiss").clicked() {
                        self.error_banner = None;
                    }
                });
            }
        });

        match self.session.status.clone() {
            ReviewStatus::Idle => {
                egui::CentralPanel::default().show(ctx, |ui| self.show_idle(ui));
            }
            ReviewStatus::Analyzing(_) => {
                egui::CentralPanel::default().show(ctx, |ui| self.show_analyzing(ui));
            }
            ReviewStatus::Complete => self.show_complete(ctx),
            ReviewStatus::Error(message) => {
                egui::CentralPanel::default().show(ctx, |ui| self.show_error(ui, message));
            }
        }
    }
}
