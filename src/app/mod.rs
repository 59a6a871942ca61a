//! Native window for the score plot.
//!
//! | Sub-module          | Responsibility |
//! | ------------------- | -------------- |
//! | [`scoreplot_app`]   | [`ScorePlotApp`] (eframe) wrapper around the plot panel |
//! | [`run`]             | [`run_scoreplot()`] entry point |

mod run;
mod scoreplot_app;

pub use run::run_scoreplot;
pub use scoreplot_app::ScorePlotApp;
