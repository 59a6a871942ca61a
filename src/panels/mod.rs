pub mod scores_ui;

pub use scores_ui::ScoresPanel;
