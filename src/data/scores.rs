//! Scores: the ordered list of estimated scores read from a text file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::EXPECTED_SCORES;
use crate::error::{ScorePlotError, ScorePlotResult};

/// Ordered scores. Position `i` in the list is rank `i + 1`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scores {
    values: Vec<f64>,
}

impl Scores {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Plot points `[rank, score]` with 1-based rank.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| [(i + 1) as f64, v])
            .collect()
    }

    /// Smallest and largest finite score, or `None` if there is none.
    pub fn finite_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Read scores from `path`, one number per line, until end of file.
///
/// The file handle is dropped before this returns, whether loading succeeded or not.
pub fn load_scores<P: AsRef<Path>>(path: P) -> ScorePlotResult<Scores> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ScorePlotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let scores = parse_scores(BufReader::new(file), path)?;
    tracing::debug!(count = scores.len(), path = %path.display(), "loaded scores");
    if scores.len() != EXPECTED_SCORES {
        tracing::warn!(
            count = scores.len(),
            expected = EXPECTED_SCORES,
            "score count does not match the plotted rank range"
        );
    }
    Ok(scores)
}

/// Parse scores from any buffered reader. `path` only labels errors.
///
/// Surrounding whitespace is ignored. A blank line before the end is a parse error.
pub fn parse_scores<R: BufRead>(reader: R, path: &Path) -> ScorePlotResult<Scores> {
    let mut values = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| ScorePlotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = line.trim();
        let v: f64 = text.parse().map_err(|source| ScorePlotError::Parse {
            path: path.to_path_buf(),
            line: idx + 1,
            text: text.to_string(),
            source,
        })?;
        values.push(v);
    }
    Ok(Scores::new(values))
}
