//! Feature grids and exhaustive comparisons against a known ranking.

use super::{Choice, Comparison};

/// Every combination of `levels` over `dims` components, first component varying slowest.
///
/// `feature_grid(&[1.0, 0.5, 0.1], 3)` yields the 27 items `[1,1,1], [1,1,0.5], …, [0.1,0.1,0.1]`.
pub fn feature_grid(levels: &[f64], dims: usize) -> Vec<Vec<f64>> {
    let n = levels.len();
    if n == 0 {
        return Vec::new();
    }
    let count = n.pow(dims as u32);
    (0..count)
        .map(|mut idx| {
            let mut item = vec![0.0; dims];
            for slot in item.iter_mut().rev() {
                *slot = levels[idx % n];
                idx /= n;
            }
            item
        })
        .collect()
}

/// 0-based rank of every item by descending score. Ties keep item order.
pub fn rank_by<F>(items: &[Vec<f64>], score: F) -> Vec<usize>
where
    F: Fn(&[f64]) -> f64,
{
    let scores: Vec<f64> = items.iter().map(|f| score(f)).collect();
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    let mut ranking = vec![0; items.len()];
    for (rank, idx) in order.into_iter().enumerate() {
        ranking[idx] = rank;
    }
    ranking
}

/// One comparison for every ordered pair `(i, j)`, including `i == j`.
///
/// The first option wins when it is ranked strictly better (lower rank).
pub fn all_pairs(items: &[Vec<f64>], ranking: &[usize]) -> Vec<Comparison> {
    let mut out = Vec::with_capacity(items.len() * items.len());
    for (i, first) in items.iter().enumerate() {
        for (j, second) in items.iter().enumerate() {
            let choice = if ranking[i] < ranking[j] {
                Choice::First
            } else {
                Choice::Second
            };
            out.push(Comparison::new(choice, first.clone(), second.clone()));
        }
    }
    out
}

/// Reorder per-item `values` so position `r` holds the value of the item ranked `r`.
pub fn in_rank_order(values: &[f64], ranking: &[usize]) -> Vec<f64> {
    let mut out = vec![0.0; values.len()];
    for (&v, &r) in values.iter().zip(ranking) {
        out[r] = v;
    }
    out
}
