//! Error types for loading, rendering and estimating scores.

use std::num::ParseFloatError;
use std::path::PathBuf;

/// Result type for score loading and plot rendering.
pub type ScorePlotResult<T> = Result<T, ScorePlotError>;

/// Failures while loading scores or producing the plot.
#[derive(Debug, thiserror::Error)]
pub enum ScorePlotError {
    #[error("cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path:?} line {line}: {text:?} is not a number: {source}")]
    Parse {
        path: PathBuf,
        line: usize,
        text: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("failed to parse generated SVG: {0}")]
    Svg(#[from] usvg::Error),

    #[error("render error: {0}")]
    Render(String),

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("display window failed: {0}")]
    Display(#[from] eframe::Error),
}

/// Failures of the pairwise preference estimators.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimateError {
    #[error("no comparisons given")]
    NoComparisons,

    #[error("comparison {index}: feature vector has {found} components, expected {expected}")]
    DimensionMismatch {
        expected: usize,
        found: usize,
        index: usize,
    },

    #[error("objective became non-finite at iteration {iteration}")]
    NonFinite { iteration: usize },
}
