//! Exact and near-duplicate sentence removal
//!
//! Two passes, always in this order:
//! 1. Exact: normalized text (lowercase, collapsed whitespace) seen before.
//! 2. Near: cosine similarity against any already accepted sentence meets
//!    the threshold.
//!
//! The near pass runs over the survivors of the exact pass only.

use super::vector::{SentenceVector, Vectorizer};
use crate::types::Sentence;
use rustc_hash::FxHashSet;

/// Sentences surviving deduplication, in original relative order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DedupResult {
    /// Surviving sentences
    pub sentences: Vec<Sentence>,
    /// For each survivor, its index in the pre-dedup sequence
    pub original_indices: Vec<usize>,
}

impl DedupResult {
    /// Number of surviving sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if nothing survived
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Keep every sentence, mapping each to its own position
    pub fn identity(sentences: &[Sentence]) -> Self {
        Self {
            sentences: sentences.to_vec(),
            original_indices: (0..sentences.len()).collect(),
        }
    }

    fn push(&mut self, sentence: &Sentence, original_index: usize) {
        self.sentences.push(sentence.clone());
        self.original_indices.push(original_index);
    }
}

/// Lowercase, trim, and collapse internal whitespace runs to one space
pub fn normalize_sentence(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Removes exact and near-duplicate sentences
#[derive(Debug, Clone)]
pub struct Deduplicator<'v> {
    vectorizer: &'v Vectorizer,
    threshold: f64,
}

impl<'v> Deduplicator<'v> {
    /// Create a deduplicator with a near-duplicate cosine threshold
    pub fn new(vectorizer: &'v Vectorizer, threshold: f64) -> Self {
        Self {
            vectorizer,
            threshold,
        }
    }

    /// Run both passes
    ///
    /// A non-empty input never yields an empty result: if every sentence
    /// would be dropped, the first one is kept.
    pub fn dedupe(&self, sentences: &[Sentence]) -> DedupResult {
        let exact = remove_exact_duplicates(sentences);

        let mut result = if exact.len() > 1 {
            self.remove_near_duplicates(&exact)
        } else {
            exact
        };

        if result.is_empty() {
            if let Some(first) = sentences.first() {
                result.push(first, 0);
            }
        }

        result
    }

    /// Sequential near-duplicate sweep over exact-pass survivors
    fn remove_near_duplicates(&self, exact: &DedupResult) -> DedupResult {
        let vectors: Vec<SentenceVector> = self.vectorizer.vectorize_all(&exact.sentences);
        let mut accepted: Vec<usize> = Vec::new();
        // Each unordered pair is scored at most once
        let mut compared: FxHashSet<(usize, usize)> = FxHashSet::default();

        for candidate in 0..vectors.len() {
            let is_duplicate = accepted.iter().any(|&kept| {
                let key = (kept.min(candidate), kept.max(candidate));
                compared.insert(key)
                    && vectors[candidate].cosine_similarity(&vectors[kept]) >= self.threshold
            });

            if !is_duplicate {
                accepted.push(candidate);
            }
        }

        let mut result = DedupResult::default();
        for pos in accepted {
            result.push(&exact.sentences[pos], exact.original_indices[pos]);
        }
        result
    }
}

/// First occurrence of each normalized form; blanks are dropped
pub fn remove_exact_duplicates(sentences: &[Sentence]) -> DedupResult {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut result = DedupResult::default();

    for (i, sentence) in sentences.iter().enumerate() {
        let normalized = normalize_sentence(&sentence.text);
        if normalized.is_empty() {
            continue;
        }
        if seen.insert(normalized) {
            result.push(sentence, i);
        }
    }

    result
}
