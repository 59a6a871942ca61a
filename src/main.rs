//! show_scores: plot `scores.txt` against rank, save `scores.png`, then show the plot.

use scoreplot::{load_scores, render_png, run_scoreplot, ScorePlotConfig, ScorePlotResult};

fn main() {
    scoreplot::init_logging();
    if let Err(err) = run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> ScorePlotResult<()> {
    let cfg = ScorePlotConfig::default();
    let scores = load_scores(&cfg.input_path)?;
    render_png(&scores, &cfg, &cfg.output_path)?;
    run_scoreplot(scores, cfg)?;
    Ok(())
}
