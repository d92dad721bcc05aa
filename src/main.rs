mod cli;
mod ops;
mod renderer;
mod types;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use log::info;

use crate::types::session::ReviewSession;
use crate::ui::app::DeepscopeApp;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .init();

    let mut session = ReviewSession::new();

    if let Some(path) = &args.media {
        let media = ops::intake::validate_media_file(path)
            .with_context(|| format!("cannot load media {}", path.display()))?;
        session.attach_media(media);
    }
    if let Some(seconds) = args.duration {
        session.set_duration(seconds);
    }
    if let Some(path) = &args.report {
        let report = ops::report_io::load_report(path)?;
        session.adopt_report(report);
    }
    if args.autoplay && session.duration_known() {
        session.playback.is_playing = true;
    }
    info!("starting review session {}", session.evidence_id);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([720.0, 480.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Deepscope",
        options,
        Box::new(|_cc| Ok(Box::new(DeepscopeApp::new(session)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to start UI: {err}"))
}
