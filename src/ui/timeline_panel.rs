//! Timeline track widget: hosts the renderer inside an egui allocation and
//! turns pointer input into seek events.

use eframe::egui::{self, Align2, Color32, Pos2, Rect, Sense, Stroke, vec2};

use crate::renderer::surface::{DrawSurface, SurfaceDims};
use crate::renderer::timeline_renderer::{RenderState, TimelineRenderer};
use crate::types::segment::Segment;
use crate::types::timecode;

const TRACK_HEIGHT: f32 = 48.0;

#[derive(Debug, Clone)]
pub enum TimelineEvent {
    /// User requested a seek; the session decides whether to honor it.
    Seeked(f64),
}

/// [`DrawSurface`] backed by an egui painter clipped to the track rect.
/// Surface coordinates are local; this adapter re-anchors them at the
/// allocated rect. egui repaints every frame, so `resize` has no buffer
/// to reallocate.
struct PainterSurface {
    painter: egui::Painter,
    rect: Rect,
}

impl DrawSurface for PainterSurface {
    fn resize(&mut self, _dims: SurfaceDims) {}

    fn clear(&mut self, color: Color32) {
        self.painter.rect_filled(self.rect, 2.0, color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.painter
            .rect_filled(rect.translate(self.rect.min.to_vec2()), 0.0, color);
    }

    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        let offset = self.rect.min.to_vec2();
        self.painter
            .line_segment([from + offset, to + offset], Stroke::new(width, color));
    }

    fn text(
        &mut self,
        pos: Pos2,
        anchor: Align2,
        text: &str,
        font: egui::FontId,
        color: Color32,
    ) {
        self.painter
            .text(pos + self.rect.min.to_vec2(), anchor, text, font, color);
    }
}

pub struct TimelineWidget<'a> {
    renderer: &'a mut TimelineRenderer,
    duration: f64,
    current_time: f64,
    segments: &'a [Segment],
}

impl<'a> TimelineWidget<'a> {
    pub fn new(
        renderer: &'a mut TimelineRenderer,
        duration: f64,
        current_time: f64,
        segments: &'a [Segment],
    ) -> Self {
        Self {
            renderer,
            duration,
            current_time,
            segments,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> Vec<TimelineEvent> {
        let mut events = Vec::new();

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(timecode::format_position(self.current_time))
                    .monospace()
                    .color(Color32::from_rgb(59, 130, 246)),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let total = if self.duration > 0.0 {
                    timecode::format_position(self.duration)
                } else {
                    "-:--".to_string()
                };
                ui.label(egui::RichText::new(total).monospace().weak());
            });
        });

        let (rect, response) = ui.allocate_exact_size(
            vec2(ui.available_width(), TRACK_HEIGHT),
            Sense::click_and_drag(),
        );

        let dims = SurfaceDims::new(
            rect.width(),
            rect.height(),
            ui.ctx().pixels_per_point(),
        );
        let state = RenderState {
            duration: self.duration,
            current_time: self.current_time,
            segments: self.segments,
        };
        let mut surface = PainterSurface {
            painter: ui.painter_at(rect),
            rect,
        };
        self.renderer.redraw(&mut surface, &state, dims);

        // Click seeks; holding the button scrubs. Both are advisory: the
        // playhead only moves once the session applies the seek and the
        // next frame's state reflects it.
        if response.clicked() || response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local_x = pos.x - rect.min.x;
                if let Some(time) =
                    TimelineRenderer::pointer_seek(self.duration, local_x, rect.width())
                {
                    events.push(TimelineEvent::Seeked(time));
                }
            }
        }

        if let Some(pos) = response.hover_pos() {
            let local_x = pos.x - rect.min.x;
            if let Some(index) = TimelineRenderer::segment_at(&state, local_x, rect.width()) {
                let seg = &self.segments[index];
                response.on_hover_text(format!(
                    "Manipulation {} - {}  ({:.0}% confidence)",
                    seg.start_time,
                    seg.end_time,
                    seg.clamped_confidence() * 100.0
                ));
            } else if self.duration > 0.0 {
                let time =
                    TimelineRenderer::pointer_seek(self.duration, local_x, rect.width());
                if let Some(time) = time {
                    response.on_hover_text(timecode::format_position(time));
                }
            }
        }

        ui.add_space(2.0);
        ui.horizontal(|ui| {
            legend_swatch(ui, Color32::from_rgb(59, 130, 246), "Current Position");
            ui.add_space(12.0);
            legend_swatch(ui, Color32::from_rgb(239, 68, 68), "Detected Manipulation");
        });

        events
    }
}

fn legend_swatch(ui: &mut egui::Ui, color: Color32, label: &str) {
    let (rect, _) = ui.allocate_exact_size(vec2(10.0, 10.0), Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color);
    ui.label(egui::RichText::new(label).small().weak());
}
