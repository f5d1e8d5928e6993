//! Sentence similarity graph construction
//!
//! Every pair of sentences is connected with its cosine similarity as edge
//! weight. Only the upper triangle is computed; it is mirrored so the
//! resulting matrix is symmetric with a zero diagonal (no self-loops).

use crate::summarizer::vector::SentenceVector;
use crate::types::SimilarityMatrix;
use rayon::prelude::*;

/// Sentence counts at or above this build rows in parallel
const PARALLEL_MIN_SENTENCES: usize = 128;

/// Builds a [`SimilarityMatrix`] from sentence vectors
#[derive(Debug, Clone)]
pub struct SimilarityGraphBuilder {
    parallel_min_sentences: usize,
}

impl Default for SimilarityGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityGraphBuilder {
    /// Create a builder with the default parallelism cutoff
    pub fn new() -> Self {
        Self {
            parallel_min_sentences: PARALLEL_MIN_SENTENCES,
        }
    }

    /// Set the sentence count at which rows are computed in parallel
    pub fn with_parallel_min_sentences(mut self, n: usize) -> Self {
        self.parallel_min_sentences = n.max(1);
        self
    }

    /// Build the similarity matrix
    pub fn build(&self, vectors: &[SentenceVector]) -> SimilarityMatrix {
        if vectors.len() < self.parallel_min_sentences {
            build_matrix(vectors)
        } else {
            build_matrix_parallel(vectors)
        }
    }
}

/// Build the similarity matrix sequentially
pub fn build_matrix(vectors: &[SentenceVector]) -> SimilarityMatrix {
    let n = vectors.len();
    let mut matrix = SimilarityMatrix::zeros(n);

    for i in 0..n {
        for j in (i + 1)..n {
            let sim = vectors[i].cosine_similarity(&vectors[j]);
            matrix.set(i, j, sim);
            matrix.set(j, i, sim);
        }
    }

    matrix
}

/// Build the similarity matrix with upper-triangle rows computed in parallel
///
/// Produces exactly the same matrix as [`build_matrix`].
pub fn build_matrix_parallel(vectors: &[SentenceVector]) -> SimilarityMatrix {
    let n = vectors.len();

    // Row i holds similarities to sentences i+1..n
    let upper: Vec<Vec<f64>> = (0..n)
        .into_par_iter()
        .map(|i| {
            ((i + 1)..n)
                .map(|j| vectors[i].cosine_similarity(&vectors[j]))
                .collect()
        })
        .collect();

    let mut matrix = SimilarityMatrix::zeros(n);
    for (i, row) in upper.iter().enumerate() {
        for (offset, &sim) in row.iter().enumerate() {
            let j = i + 1 + offset;
            matrix.set(i, j, sim);
            matrix.set(j, i, sim);
        }
    }

    matrix
}
