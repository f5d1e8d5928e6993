//! Sentence salience ranking
//!
//! Runs PageRank over the sentence similarity graph. When PageRank does not
//! converge or yields a non-finite score, every sentence is scored 1.0.

use crate::graph::csr::CsrGraph;
use crate::pagerank::standard::StandardPageRank;
use crate::pagerank::{score_order, PageRankResult};
use crate::types::{SimilarityMatrix, SummarizerConfig};
use serde::Serialize;

/// Score assigned to every sentence when ranking falls back
pub const FALLBACK_SCORE: f64 = 1.0;

/// Per-sentence salience scores, indexed by surviving-sentence position
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentenceScores {
    /// Score for each sentence
    pub scores: Vec<f64>,
    /// PageRank iterations performed
    pub iterations: usize,
    /// Whether PageRank converged
    pub converged: bool,
    /// Whether the uniform fallback replaced the PageRank scores
    pub fallback: bool,
}

impl SentenceScores {
    fn from_pagerank(result: PageRankResult) -> Self {
        Self {
            scores: result.scores,
            iterations: result.iterations,
            converged: result.converged,
            fallback: false,
        }
    }

    fn uniform(n: usize, iterations: usize, converged: bool) -> Self {
        Self {
            scores: vec![FALLBACK_SCORE; n],
            iterations,
            converged,
            fallback: true,
        }
    }

    /// Number of scored sentences
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if nothing was scored
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Score of one sentence (0 if out of range)
    pub fn score(&self, index: usize) -> f64 {
        self.scores.get(index).copied().unwrap_or(0.0)
    }

    /// Top N sentences by score descending, ties by lower index
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        let mut indexed: Vec<_> = self.scores.iter().copied().enumerate().collect();
        indexed.sort_by(|&a, &b| score_order(a, b));
        indexed.truncate(n);
        indexed
    }
}

/// PageRank-based sentence ranker
#[derive(Debug, Clone, Default)]
pub struct SentenceRanker {
    pagerank: StandardPageRank,
}

impl SentenceRanker {
    /// Create a ranker with default PageRank settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ranker from summarizer configuration
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            pagerank: StandardPageRank::new()
                .with_damping(config.damping)
                .with_max_iterations(config.max_iterations)
                .with_threshold(config.convergence_threshold),
        }
    }

    /// Score every sentence in the similarity matrix
    pub fn rank(&self, matrix: &SimilarityMatrix) -> SentenceScores {
        if matrix.is_empty() {
            return SentenceScores::default();
        }

        let graph = CsrGraph::from_matrix(matrix);
        let result = self.pagerank.run(&graph);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            nodes = graph.num_nodes,
            edges = graph.num_edges() / 2,
            iterations = result.iterations,
            converged = result.converged,
            "pagerank finished"
        );

        let finite = result.scores.iter().all(|s| s.is_finite());
        if !result.converged || !finite {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                iterations = result.iterations,
                delta = result.delta,
                finite,
                "pagerank unusable, scoring sentences uniformly"
            );
            return SentenceScores::uniform(matrix.size(), result.iterations, result.converged);
        }

        SentenceScores::from_pagerank(result)
    }
}
