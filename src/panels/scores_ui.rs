//! Interactive scatter plot of the scores.

use std::path::PathBuf;

use egui::{Color32, Ui};
use egui_plot::{MarkerShape, Plot, Points};

use crate::config::ScorePlotConfig;
use crate::data::axis::PlotBounds;
use crate::data::export;
use crate::data::scores::Scores;

/// Outcome of the last "Save image…" action, shown next to the buttons.
enum SaveStatus {
    Saved(PathBuf),
    Failed(String),
}

pub struct ScoresPanel {
    scores: Scores,
    points: Vec<[f64; 2]>,
    bounds: PlotBounds,
    cfg: ScorePlotConfig,
    /// Apply `bounds` on the next frame (first frame and after "Reset view").
    reset_view: bool,
    status: Option<SaveStatus>,
}

impl ScoresPanel {
    pub fn new(scores: Scores, cfg: ScorePlotConfig) -> Self {
        Self {
            points: scores.points(),
            bounds: PlotBounds::for_scores(&scores, &cfg),
            scores,
            cfg,
            reset_view: true,
            status: None,
        }
    }

    /// Title, view reset and export controls.
    pub fn render_menu(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(&self.cfg.title);
        });
        ui.horizontal(|ui| {
            if ui
                .button("⟲ Reset view")
                .on_hover_text("Restore the default axis range")
                .clicked()
            {
                self.reset_view = true;
            }
            if ui
                .button("🖼 Save image…")
                .on_hover_text("Export the plot as PNG")
                .clicked()
            {
                self.save_dialog();
            }
            match &self.status {
                Some(SaveStatus::Saved(path)) => {
                    ui.label(format!("Saved {}", path.display()));
                }
                Some(SaveStatus::Failed(err)) => {
                    ui.colored_label(Color32::LIGHT_RED, err);
                }
                None => {}
            }
        });
    }

    fn save_dialog(&mut self) {
        let default_name = self
            .cfg
            .output_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "scores.png".to_string());
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(&default_name)
            .add_filter("PNG", &["png"])
            .save_file()
        else {
            return;
        };
        self.status = Some(match export::render_png(&self.scores, &self.cfg, &path) {
            Ok(()) => SaveStatus::Saved(path),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to save plot image");
                SaveStatus::Failed(format!("Failed to save image: {e}"))
            }
        });
    }

    /// The plot itself, filling the remaining space.
    pub fn render_panel(&mut self, ui: &mut Ui) {
        let plot = Plot::new("scores_plot")
            .x_axis_label(self.cfg.x_label.clone())
            .y_axis_label(self.cfg.y_label.clone())
            .allow_scroll(false)
            .allow_boxed_zoom(true);

        let reset = std::mem::take(&mut self.reset_view);
        let (x0, x1) = self.bounds.x;
        let (y0, y1) = self.bounds.y;
        plot.show(ui, |plot_ui| {
            if reset {
                plot_ui.set_plot_bounds_x(x0..=x1);
                plot_ui.set_plot_bounds_y(y0..=y1);
            }
            plot_ui.points(
                Points::new("scores", self.points.clone())
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(self.cfg.marker_radius)
                    .color(self.cfg.marker_color),
            );
        });
    }
}
