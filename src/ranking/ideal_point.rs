//! Ideal-point model: the user prefers items whose features lie close to a
//! point `w` in feature space.

use super::{
    descend, squared_distance, Comparison, Estimate, EstimatorConfig, ModelKind, PreferenceModel,
};
use crate::error::EstimateError;

struct IdealPoint;

impl PreferenceModel for IdealPoint {
    const KIND: ModelKind = ModelKind::IdealPoint;

    fn diff(w: &[f64], c: &Comparison) -> f64 {
        squared_distance(w, &c.first) - squared_distance(w, &c.second)
    }

    fn accumulate(grad: &mut [f64], c: &Comparison, a: f64) {
        for (k, g) in grad.iter_mut().enumerate() {
            *g += -2.0 * (c.first[k] - c.second[k]) * a;
        }
    }
}

/// Estimate the ideal point from pairwise comparisons.
///
/// Normalizing moves the point onto the unit sphere, which changes the ranking
/// it induces; most callers want `cfg.normalize = false` here.
pub fn estimate(comparisons: &[Comparison], cfg: &EstimatorConfig) -> Result<Estimate, EstimateError> {
    descend::<IdealPoint>(comparisons, cfg)
}

/// Score of an item: negated squared distance, so higher is still better.
pub fn score(w: &[f64], f: &[f64]) -> f64 {
    -squared_distance(w, f)
}
