//! Top-level entry point for showing the score plot in a native window.

use eframe::egui;

use crate::config::ScorePlotConfig;
use crate::data::scores::Scores;

use super::scoreplot_app::ScorePlotApp;

/// Open the score plot in a native window.
///
/// Native options come from `cfg` when set; otherwise a 900×650 window is used.
/// The call blocks until the window is closed.
pub fn run_scoreplot(scores: Scores, mut cfg: ScorePlotConfig) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let mut opts = cfg.native_options.take().unwrap_or_default();

    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(900.0, 650.0));
    }

    tracing::debug!(points = scores.len(), "opening plot window");
    let app = ScorePlotApp::new(scores, cfg);
    eframe::run_native(&title, opts, Box::new(|_cc| Ok(Box::new(app))))
}
