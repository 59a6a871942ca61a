//! Linear preference model: an item's score is the dot product of the
//! preference vector with its features.

use super::{descend, dot, Comparison, Estimate, EstimatorConfig, ModelKind, PreferenceModel};
use crate::error::EstimateError;

struct Linear;

impl PreferenceModel for Linear {
    const KIND: ModelKind = ModelKind::Linear;

    fn diff(w: &[f64], c: &Comparison) -> f64 {
        dot(w, &c.second) - dot(w, &c.first)
    }

    fn accumulate(grad: &mut [f64], c: &Comparison, a: f64) {
        for (k, g) in grad.iter_mut().enumerate() {
            *g += (c.second[k] - c.first[k]) * a;
        }
    }
}

/// Estimate the preference vector from pairwise comparisons.
///
/// Starts from the uniform vector `1/d` and runs gradient descent until the
/// objective stops improving by at least `cfg.threshold`.
pub fn estimate(comparisons: &[Comparison], cfg: &EstimatorConfig) -> Result<Estimate, EstimateError> {
    descend::<Linear>(comparisons, cfg)
}

/// Score of an item under preference `w`.
pub fn score(w: &[f64], f: &[f64]) -> f64 {
    dot(w, f)
}
