//! scoreplot crate root: re-exports and module wiring.
//!
//! Plots estimated ranking scores against their rank:
//! - `data`: loading scores, axis fitting and headless PNG export
//! - `panels` / `app`: the interactive egui/eframe window
//! - `ranking`: estimating preferences (and from them, scores) out of pairwise comparisons
//! - `config`, `error`: shared configuration and error types

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod panels;
pub mod ranking;

// Public re-exports for a compact external API
pub use app::{run_scoreplot, ScorePlotApp};
pub use config::{ScorePlotConfig, EXPECTED_SCORES};
pub use data::export::{render_png, render_svg};
pub use data::scores::{load_scores, parse_scores, Scores};
pub use error::{EstimateError, ScorePlotError, ScorePlotResult};
pub use ranking::{Choice, Comparison, Estimate, EstimatorConfig, ModelKind, Regularization};

/// Install the fmt subscriber used by the binaries. `RUST_LOG` sets the filter (default `info`).
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
