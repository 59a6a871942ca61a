//! Preference estimation from pairwise comparisons.
//!
//! Each item is described by a feature vector. A user compares two items at a
//! time and picks one; from many such choices we fit a preference model with
//! regularized gradient descent on the logistic negative log-likelihood.
//!
//! | Module            | Model |
//! | ----------------- | ----- |
//! | [`linear`]        | score = `w · f` (preference direction) |
//! | [`ideal_point`]   | score = `-‖w - f‖²` (preferred point in feature space) |
//! | [`grid`]          | feature grids, ground-truth ranking, exhaustive comparisons |

pub mod grid;
pub mod ideal_point;
pub mod linear;

use serde::{Deserialize, Serialize};

use crate::error::EstimateError;

/// Which option of a comparison was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    First,
    Second,
}

impl Choice {
    /// Label used in the likelihood: 1 for the first option, 0 for the second.
    pub fn label(self) -> f64 {
        match self {
            Choice::First => 1.0,
            Choice::Second => 0.0,
        }
    }
}

/// One pairwise comparison between two feature vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub choice: Choice,
    pub first: Vec<f64>,
    pub second: Vec<f64>,
}

impl Comparison {
    pub fn new(choice: Choice, first: Vec<f64>, second: Vec<f64>) -> Self {
        Self {
            choice,
            first,
            second,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regularization {
    L1,
    L2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelKind {
    Linear,
    IdealPoint,
}

/// Gradient descent settings shared by both models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    pub max_iterations: usize,
    pub regularization: Regularization,
    /// Regularization weight.
    pub lambda: f64,
    /// Learning rate.
    pub eta: f64,
    /// Stop once an iteration improves the objective by less than this.
    pub threshold: f64,
    /// Scale the result to unit length.
    pub normalize: bool,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            regularization: Regularization::L2,
            lambda: 0.01,
            eta: 0.005,
            threshold: 1e-7,
            normalize: true,
        }
    }
}

/// Result of an estimation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub model: ModelKind,
    pub preferences: Vec<f64>,
    pub iterations: usize,
    pub objective: f64,
}

pub fn dot(w: &[f64], f: &[f64]) -> f64 {
    w.iter().zip(f).map(|(a, b)| a * b).sum()
}

pub fn squared_distance(w: &[f64], f: &[f64]) -> f64 {
    w.iter().zip(f).map(|(a, b)| (a - b) * (a - b)).sum()
}

/// `ln(1 + e^x)` without overflow for large `x`.
fn softplus(x: f64) -> f64 {
    if x > 0.0 {
        x + (-x).exp().ln_1p()
    } else {
        x.exp().ln_1p()
    }
}

/// Dimension of the comparisons, checking that every vector agrees.
fn dimension(comparisons: &[Comparison]) -> Result<usize, EstimateError> {
    let d = comparisons
        .first()
        .ok_or(EstimateError::NoComparisons)?
        .first
        .len();
    for (index, c) in comparisons.iter().enumerate() {
        for v in [&c.first, &c.second] {
            if v.len() != d {
                return Err(EstimateError::DimensionMismatch {
                    expected: d,
                    found: v.len(),
                    index,
                });
            }
        }
    }
    Ok(d)
}

fn penalty(w: &[f64], reg: Regularization, lambda: f64) -> f64 {
    match reg {
        Regularization::L1 => w.iter().map(|x| x.abs()).sum::<f64>() * lambda,
        Regularization::L2 => dot(w, w) * lambda / 2.0,
    }
}

/// Per-model pieces plugged into [`descend`].
trait PreferenceModel {
    const KIND: ModelKind;

    /// Log-odds against the first option: positive means the second is favoured.
    fn diff(w: &[f64], c: &Comparison) -> f64;

    /// Add `a * d(diff)/dw` into `grad`.
    fn accumulate(grad: &mut [f64], c: &Comparison, a: f64);
}

fn objective<M: PreferenceModel>(
    comparisons: &[Comparison],
    w: &[f64],
    cfg: &EstimatorConfig,
) -> f64 {
    let nll: f64 = comparisons
        .iter()
        .map(|c| {
            let diff = M::diff(w, c);
            softplus(diff) + (c.choice.label() - 1.0) * diff
        })
        .sum();
    nll + penalty(w, cfg.regularization, cfg.lambda)
}

fn descend<M: PreferenceModel>(
    comparisons: &[Comparison],
    cfg: &EstimatorConfig,
) -> Result<Estimate, EstimateError> {
    let d = dimension(comparisons)?;
    let mut w = vec![1.0 / d as f64; d];
    let mut cur = objective::<M>(comparisons, &w, cfg);
    let mut iterations = 0;

    while iterations < cfg.max_iterations {
        let mut grad = vec![0.0; d];
        for c in comparisons {
            let a = c.choice.label() - 1.0 / (1.0 + M::diff(&w, c).exp());
            M::accumulate(&mut grad, c, a);
        }
        for (wk, gk) in w.iter_mut().zip(&grad) {
            let reg = match cfg.regularization {
                Regularization::L1 if *wk >= 0.0 => cfg.lambda,
                Regularization::L1 => -cfg.lambda,
                Regularization::L2 => cfg.lambda * *wk,
            };
            *wk -= cfg.eta * (reg + gk);
        }
        iterations += 1;

        let next = objective::<M>(comparisons, &w, cfg);
        if !next.is_finite() {
            return Err(EstimateError::NonFinite {
                iteration: iterations,
            });
        }
        let improvement = cur - next;
        cur = next;
        if improvement < cfg.threshold {
            break;
        }
    }
    tracing::debug!(model = ?M::KIND, iterations, objective = cur, "gradient descent finished");

    if cfg.normalize {
        let n = dot(&w, &w).sqrt();
        if n > 0.0 {
            w.iter_mut().for_each(|x| *x /= n);
        }
    }
    Ok(Estimate {
        model: M::KIND,
        preferences: w,
        iterations,
        objective: cur,
    })
}
