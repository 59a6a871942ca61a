//! Axis bounds and tick placement shared by the exporter and the window.

use crate::config::ScorePlotConfig;
use crate::data::scores::Scores;

/// Fraction of the data span added above and below the y data range.
const Y_MARGIN: f64 = 0.05;

/// Visible plot area in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl PlotBounds {
    /// X is taken from the config unchanged; Y is fitted to the finite scores.
    pub fn for_scores(scores: &Scores, cfg: &ScorePlotConfig) -> Self {
        Self {
            x: cfg.x_range,
            y: fit_y(scores),
        }
    }

    pub fn contains(&self, p: [f64; 2]) -> bool {
        p[0] >= self.x.0 && p[0] <= self.x.1 && p[1] >= self.y.0 && p[1] <= self.y.1
    }
}

/// Y range with a 5% margin. A flat series gets ±0.5, an empty one `[0, 1]`.
///
/// The result is always finite with `y0 < y1`, also for scores near `f64::MAX`
/// or so large that ±0.5 is below their precision.
pub fn fit_y(scores: &Scores) -> (f64, f64) {
    let Some((lo, hi)) = scores.finite_range() else {
        return (0.0, 1.0);
    };
    let mag = lo.abs().max(hi.abs());
    // smallest pad that still moves the bounds off the data
    let min_pad = mag * f64::EPSILON * 16.0;
    // half span cannot overflow, unlike hi - lo
    let half_span = hi / 2.0 - lo / 2.0;
    let pad = if half_span <= f64::EPSILON * mag.max(1.0) / 2.0 {
        0.5f64.max(min_pad)
    } else {
        (half_span * 2.0 * Y_MARGIN).max(min_pad)
    };
    ((lo - pad).max(f64::MIN), (hi + pad).min(f64::MAX))
}

/// Position of `v` within `[lo, hi]` as a fraction, without overflowing on huge ranges.
pub fn fraction(v: f64, lo: f64, hi: f64) -> f64 {
    (v / 2.0 - lo / 2.0) / (hi / 2.0 - lo / 2.0)
}

/// Tick step of the form 1, 2, 2.5 or 5 times a power of ten, giving roughly `target` ticks.
pub fn nice_step(span: f64, target: usize) -> f64 {
    if !(span.is_finite() && span > 0.0) || target == 0 {
        return 1.0;
    }
    let raw = span / target as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick positions inside `[lo, hi]` and the step between them.
///
/// Stops early once ticks no longer advance at the precision of `lo`/`hi`.
pub fn ticks(lo: f64, hi: f64, target: usize) -> (Vec<f64>, f64) {
    let step = nice_step(hi / 2.0 - lo / 2.0, (target / 2).max(1));
    let mut out: Vec<f64> = Vec::new();
    let first = (lo / step).ceil();
    let tol = step * 1e-9;
    for k in 0..=(target * 4) {
        let t = (first + k as f64) * step;
        if !t.is_finite() || t > hi + tol {
            break;
        }
        if out.last().is_some_and(|&last| t <= last) {
            break;
        }
        // avoid printing "-0"
        out.push(if t == 0.0 { 0.0 } else { t });
    }
    (out, step)
}

/// Format a tick value with just enough decimals to distinguish ticks `step` apart.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = (0..=10)
        .find(|&d| {
            let scaled = step * 10f64.powi(d);
            (scaled - scaled.round()).abs() < 1e-6 * scaled.abs().max(1.0)
        })
        .unwrap_or(10) as usize;
    let s = format!("{:.*}", decimals, value);
    if s.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        s.trim_start_matches('-').to_string()
    } else {
        s
    }
}
