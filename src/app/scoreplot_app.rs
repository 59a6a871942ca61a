//! Standalone application wrapper for the score plot.
//!
//! [`ScorePlotApp`] owns a [`ScoresPanel`] and implements [`eframe::App`] so the
//! plot can run in its own native window.

use eframe::egui;

use crate::config::ScorePlotConfig;
use crate::data::scores::Scores;
use crate::panels::scores_ui::ScoresPanel;

pub struct ScorePlotApp {
    pub panel: ScoresPanel,
}

impl ScorePlotApp {
    pub fn new(scores: Scores, cfg: ScorePlotConfig) -> Self {
        Self {
            panel: ScoresPanel::new(scores, cfg),
        }
    }
}

impl eframe::App for ScorePlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("scoreplot_headline").show(ctx, |ui| {
            self.panel.render_menu(ui);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.panel.render_panel(ui);
        });
    }
}
