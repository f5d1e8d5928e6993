//! Term-frequency sentence vectors
//!
//! Builds sparse count vectors over the non-stopword, purely alphanumeric
//! tokens of a sentence, and compares them with cosine similarity.

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{is_alphanumeric, Tokenizer};
use crate::types::Sentence;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// A sparse term-frequency vector
///
/// Only tokens with a positive count are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceVector {
    /// Non-zero dimensions: token -> count
    pub counts: FxHashMap<String, u32>,
}

impl SentenceVector {
    /// Create a new empty vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Count tokens into a vector
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts: FxHashMap<String, u32> = FxHashMap::default();
        for token in tokens {
            *counts.entry(token.into()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count for a token (0 if absent)
    pub fn count(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Sum of squared counts
    fn squared_norm(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c) * u64::from(c)).sum()
    }

    /// Compute cosine similarity with another vector
    ///
    /// Integer accumulation keeps the result exactly symmetric. Empty or
    /// zero-magnitude vectors have similarity 0.
    pub fn cosine_similarity(&self, other: &SentenceVector) -> f64 {
        if self.is_empty() || other.is_empty() {
            return 0.0;
        }

        let (small, large) = if self.counts.len() <= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };
        let dot: u64 = small
            .counts
            .iter()
            .filter_map(|(token, &a)| large.counts.get(token).map(|&b| u64::from(a) * u64::from(b)))
            .sum();

        let norm_a = self.squared_norm();
        let norm_b = other.squared_norm();
        if norm_a == 0 || norm_b == 0 {
            return 0.0;
        }

        let magnitude = (norm_a as f64).sqrt() * (norm_b as f64).sqrt();
        (dot as f64 / magnitude).clamp(0.0, 1.0)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the vector is empty
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Cosine similarity between two sentence vectors
pub fn cosine(a: &SentenceVector, b: &SentenceVector) -> f64 {
    a.cosine_similarity(b)
}

/// Builds [`SentenceVector`]s from sentences
#[derive(Debug, Clone)]
pub struct Vectorizer {
    tokenizer: Tokenizer,
    stopwords: Arc<StopwordFilter>,
}

impl Default for Vectorizer {
    fn default() -> Self {
        Self::new(StopwordFilter::english())
    }
}

impl Vectorizer {
    /// Create a vectorizer with the given stopword filter
    pub fn new(stopwords: Arc<StopwordFilter>) -> Self {
        Self {
            tokenizer: Tokenizer::new().with_lowercase(true),
            stopwords,
        }
    }

    /// Vectorize raw sentence text
    pub fn vectorize_text(&self, text: &str) -> SentenceVector {
        SentenceVector::from_tokens(
            self.tokenizer
                .tokenize(text)
                .into_iter()
                .filter(|t| is_alphanumeric(t) && !self.stopwords.is_stopword(t)),
        )
    }

    /// Vectorize a sentence
    pub fn vectorize(&self, sentence: &Sentence) -> SentenceVector {
        self.vectorize_text(&sentence.text)
    }

    /// Vectorize every sentence, preserving order
    pub fn vectorize_all(&self, sentences: &[Sentence]) -> Vec<SentenceVector> {
        sentences.iter().map(|s| self.vectorize(s)).collect()
    }
}
