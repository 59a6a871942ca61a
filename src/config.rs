//! Configuration for the score plot (headless export and interactive window).
//!
//! Every field has a fixed default; the binaries never override them. The
//! struct exists so the renderers share one source of truth and tests can
//! point the loader and exporter at scratch files.

use std::path::PathBuf;

use eframe::egui::Color32;

/// Number of scores the fixed x-axis is laid out for.
pub const EXPECTED_SCORES: usize = 27;

/// Shared configuration for [`crate::data::export`] and [`crate::app::run_scoreplot`].
pub struct ScorePlotConfig {
    /// Plot title, also used as the window title.
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Visible x-axis range (inclusive). Points outside are clipped.
    pub x_range: (f64, f64),
    /// Scores file read by the `show_scores` binary.
    pub input_path: PathBuf,
    /// PNG written before the window opens.
    pub output_path: PathBuf,
    /// Exported image size in pixels.
    pub image_size: (u32, u32),
    /// Marker radius in pixels.
    pub marker_radius: f32,
    pub marker_color: Color32,
    /// Optional eframe native options. If `None`, defaults are used.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for ScorePlotConfig {
    fn default() -> Self {
        Self {
            title: "Ranking estimation".to_string(),
            x_label: "Ranking".to_string(),
            y_label: "estimated score".to_string(),
            x_range: (1.0, EXPECTED_SCORES as f64),
            input_path: PathBuf::from("scores.txt"),
            output_path: PathBuf::from("scores.png"),
            image_size: (640, 480),
            marker_radius: 3.5,
            marker_color: Color32::from_rgb(31, 119, 180),
            native_options: None,
        }
    }
}
