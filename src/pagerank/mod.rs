//! PageRank algorithms
//!
//! This module provides the weighted power-iteration PageRank used to score
//! sentence salience.

pub mod standard;

use std::cmp::Ordering;

/// Width of the buckets scores are rounded into before comparison.
pub const SCORE_EPSILON: f64 = 1e-10;

/// Score rounded to the nearest multiple of [`SCORE_EPSILON`]
fn score_bucket(score: f64) -> f64 {
    // + 0.0 folds -0.0 into 0.0 for total_cmp
    (score / SCORE_EPSILON).round() + 0.0
}

/// Order node ids by score descending, ties by node id ascending
///
/// Scores in the same bucket tie. Bucketing keeps this a total order, so it
/// is safe to pass to `sort_by`.
pub fn score_order(a: (usize, f64), b: (usize, f64)) -> Ordering {
    score_bucket(b.1)
        .total_cmp(&score_bucket(a.1))
        .then(a.0.cmp(&b.0))
}

/// Result of a PageRank computation
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta
    pub delta: f64,
    /// Whether the algorithm converged
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_order_breaks_ties_by_node_id() {
        let mut indexed = vec![(0, 0.2), (1, 0.4), (2, 0.2), (3, 0.2 + 1e-12)];
        indexed.sort_by(|&a, &b| score_order(a, b));

        let order: Vec<_> = indexed.iter().map(|(i, _)| *i).collect();
        assert_eq!(order, vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_score_order_is_total_for_closely_spaced_scores() {
        let n = 230;
        let mut indexed: Vec<(usize, f64)> = (0..n)
            .map(|k| (k * 97) % n)
            .map(|i| (i, 0.1 + i as f64 * 1e-12))
            .collect();
        indexed.sort_by(|&a, &b| score_order(a, b));

        assert_eq!(indexed.len(), n);
        for w in indexed.windows(2) {
            let (a, b) = (score_bucket(w[0].1), score_bucket(w[1].1));
            assert!(a > b || (a == b && w[0].0 < w[1].0));
        }
        // Spread covers more than one bucket
        assert!(score_bucket(indexed[0].1) > score_bucket(indexed[n - 1].1));
    }

    #[test]
    fn test_score_order_treats_signed_zeros_as_tied() {
        let mut indexed = vec![(1, -0.0), (0, 0.0), (2, -1e-12), (3, 0.5)];
        indexed.sort_by(|&a, &b| score_order(a, b));

        let order: Vec<_> = indexed.iter().map(|(i, _)| *i).collect();
        assert_eq!(order, vec![3, 0, 1, 2]);
    }
}
