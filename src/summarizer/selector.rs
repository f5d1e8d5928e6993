//! Top-K sentence selection for summarization
//!
//! Picks the highest-scoring sentences and restores document order.

use super::ranker::SentenceScores;
use crate::types::{Sentence, SummaryOptions};
use serde::Serialize;

/// A selected sentence with its salience score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedSentence {
    /// The original sentence
    pub sentence: Sentence,
    /// Salience score from ranking
    pub score: f64,
    /// 1-based rank by score
    pub rank: usize,
}

/// Number of sentences a summary should contain
///
/// `round(survivors * ratio)` clamped to `[min_sentences, max_sentences]`,
/// then to `survivors`. Rounds half away from zero.
pub fn target_sentence_count(survivors: usize, options: &SummaryOptions) -> usize {
    let by_ratio = (survivors as f64 * options.ratio).round() as usize;
    by_ratio
        .max(options.min_sentences)
        .min(options.max_sentences)
        .min(survivors)
}

/// Select the top `count` sentences and return them in document order
///
/// `sentences[i]` is the sentence scored by `scores.scores[i]`. Equal scores
/// favour the earlier sentence.
pub fn select_sentences(
    sentences: &[Sentence],
    scores: &SentenceScores,
    count: usize,
) -> Vec<SelectedSentence> {
    let mut selected: Vec<SelectedSentence> = scores
        .top_n(count)
        .into_iter()
        .filter_map(|(i, score)| sentences.get(i).map(|s| (s, score)))
        .enumerate()
        .map(|(rank, (sentence, score))| SelectedSentence {
            sentence: sentence.clone(),
            score,
            rank: rank + 1,
        })
        .collect();

    // Sort by document order
    selected.sort_by_key(|s| s.sentence.index);
    selected
}
