//! TextRank extractive summarizer
//!
//! Stages run strictly forward: segment, deduplicate, vectorize, build the
//! similarity graph, rank, select. Short or degenerate inputs return early
//! with a defined result instead of an error; only inconsistent options are
//! rejected.

use super::dedup::{DedupResult, Deduplicator};
use super::ranker::SentenceRanker;
use super::selector::{select_sentences, target_sentence_count, SelectedSentence};
use super::vector::Vectorizer;
use crate::errors::Result;
use crate::graph::builder::SimilarityGraphBuilder;
use crate::nlp::segmenter::{AbbreviationAwareDetector, Segmenter, SentenceDetector};
use crate::nlp::stopwords::StopwordFilter;
use crate::types::{join_sentences, Sentence, SummarizerConfig, SummaryOptions};
use serde::Serialize;
use std::sync::Arc;

/// Span label for sentence segmentation
pub const STAGE_SEGMENT: &str = "segment";
/// Span label for duplicate removal
pub const STAGE_DEDUP: &str = "dedup";
/// Span label for term-frequency vectorization
pub const STAGE_VECTORIZE: &str = "vectorize";
/// Span label for similarity matrix construction
pub const STAGE_GRAPH: &str = "graph";
/// Span label for PageRank scoring
pub const STAGE_RANK: &str = "rank";
/// Span label for top-K selection
pub const STAGE_SELECT: &str = "select";

/// Enter a tracing span for a summary stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summary_stage", stage = $name).entered();
    };
}

/// How a summary was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryOutcome {
    /// Blank input, empty summary
    EmptyInput,
    /// Segmentation found no sentences; the input is returned as is
    NoSentences,
    /// At most `min_sentences` sentences; the input is returned as is
    TooShort,
    /// At most `min_sentences` survived deduplication; survivors are joined
    ShortAfterDedup,
    /// Sentences were ranked and the top ones selected
    Ranked,
}

/// Summary text plus how it was derived
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    /// The summary
    pub summary: String,
    /// Which path produced the summary
    pub outcome: SummaryOutcome,
    /// Sentences found by segmentation
    pub total_sentences: usize,
    /// Sentences left after deduplication (equal to total when disabled)
    pub surviving_sentences: usize,
    /// Ranked selection in document order (empty unless `Ranked`)
    pub selected: Vec<SelectedSentence>,
    /// PageRank iterations performed
    pub iterations: usize,
    /// Whether PageRank converged (true when ranking was not needed)
    pub converged: bool,
    /// Whether ranking fell back to uniform scores
    pub fallback: bool,
}

impl SummaryReport {
    fn early(text: String, outcome: SummaryOutcome, total: usize, surviving: usize) -> Self {
        Self {
            summary: text,
            outcome,
            total_sentences: total,
            surviving_sentences: surviving,
            selected: Vec::new(),
            iterations: 0,
            converged: true,
            fallback: false,
        }
    }

    /// Original indices of the selected sentences, ascending
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected.iter().map(|s| s.sentence.index).collect()
    }
}

/// Duplicate counts for a text
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DuplicateStatistics {
    /// Sentences found by segmentation
    pub total_sentences: usize,
    /// Sentences left after exact and near-duplicate removal
    pub unique_sentences: usize,
    /// `total_sentences - unique_sentences`
    pub duplicate_sentences: usize,
    /// Share of sentences removed, in percent, rounded to two decimals
    pub duplicate_percentage: f64,
}

impl DuplicateStatistics {
    fn from_counts(total: usize, unique: usize) -> Self {
        let duplicates = total.saturating_sub(unique);
        let duplicate_percentage = if total == 0 {
            0.0
        } else {
            (duplicates as f64 / total as f64 * 100.0 * 100.0).round() / 100.0
        };
        Self {
            total_sentences: total,
            unique_sentences: unique,
            duplicate_sentences: duplicates,
            duplicate_percentage,
        }
    }
}

/// Extractive summarizer
///
/// Holds only immutable state, so one instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct TextSummarizer<D = AbbreviationAwareDetector> {
    config: SummarizerConfig,
    segmenter: Segmenter<D>,
    vectorizer: Vectorizer,
    graph_builder: SimilarityGraphBuilder,
    ranker: SentenceRanker,
}

impl TextSummarizer<AbbreviationAwareDetector> {
    /// Create a summarizer using the abbreviations of the configured language
    pub fn new(config: SummarizerConfig) -> Result<Self> {
        let detector = AbbreviationAwareDetector::for_language(&config.language);
        Self::with_detector(config, detector)
    }
}

impl<D: SentenceDetector> TextSummarizer<D> {
    /// Create a summarizer around a custom sentence detector
    pub fn with_detector(config: SummarizerConfig, detector: D) -> Result<Self> {
        config.validate()?;

        let vectorizer = Vectorizer::new(load_stopwords(&config));
        let ranker = SentenceRanker::from_config(&config);

        Ok(Self {
            config,
            segmenter: Segmenter::with_detector(detector),
            vectorizer,
            graph_builder: SimilarityGraphBuilder::new(),
            ranker,
        })
    }

    /// The construction-time configuration
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Split text into sentences
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        self.segmenter.segment(text)
    }

    /// Remove exact and near-duplicate sentences
    pub fn dedupe(&self, sentences: &[Sentence]) -> DedupResult {
        Deduplicator::new(&self.vectorizer, self.config.similarity_threshold).dedupe(sentences)
    }

    /// Generate a summary of the input text
    pub fn generate_summary(&self, text: &str, options: &SummaryOptions) -> Result<String> {
        self.summarize_with_details(text, options)
            .map(|report| report.summary)
    }

    /// Generate a summary with selection details
    pub fn summarize_with_details(
        &self,
        text: &str,
        options: &SummaryOptions,
    ) -> Result<SummaryReport> {
        options.validate()?;

        if text.trim().is_empty() {
            return Ok(SummaryReport::early(
                String::new(),
                SummaryOutcome::EmptyInput,
                0,
                0,
            ));
        }

        let sentences = {
            trace_stage!(STAGE_SEGMENT);
            self.segment(text)
        };
        let total = sentences.len();

        if sentences.is_empty() {
            return Ok(SummaryReport::early(
                text.to_string(),
                SummaryOutcome::NoSentences,
                0,
                0,
            ));
        }
        if total <= options.min_sentences {
            return Ok(SummaryReport::early(
                text.to_string(),
                SummaryOutcome::TooShort,
                total,
                total,
            ));
        }

        let survivors = if options.remove_duplicates {
            trace_stage!(STAGE_DEDUP);
            let deduped = self.dedupe(&sentences);
            #[cfg(feature = "tracing")]
            tracing::debug!(
                total,
                surviving = deduped.len(),
                "removed duplicate sentences"
            );
            if deduped.len() <= options.min_sentences {
                return Ok(SummaryReport::early(
                    join_sentences(&deduped.sentences),
                    SummaryOutcome::ShortAfterDedup,
                    total,
                    deduped.len(),
                ));
            }
            deduped
        } else {
            DedupResult::identity(&sentences)
        };

        let vectors = {
            trace_stage!(STAGE_VECTORIZE);
            self.vectorizer.vectorize_all(&survivors.sentences)
        };
        let matrix = {
            trace_stage!(STAGE_GRAPH);
            self.graph_builder.build(&vectors)
        };
        let scores = {
            trace_stage!(STAGE_RANK);
            self.ranker.rank(&matrix)
        };

        let selected = {
            trace_stage!(STAGE_SELECT);
            let count = target_sentence_count(survivors.len(), options);
            select_sentences(&survivors.sentences, &scores, count)
        };
        let summary = join_sentences(selected.iter().map(|s| &s.sentence));

        #[cfg(feature = "tracing")]
        tracing::debug!(
            total,
            surviving = survivors.len(),
            selected = selected.len(),
            "summary generated"
        );

        Ok(SummaryReport {
            summary,
            outcome: SummaryOutcome::Ranked,
            total_sentences: total,
            surviving_sentences: survivors.len(),
            selected,
            iterations: scores.iterations,
            converged: scores.converged,
            fallback: scores.fallback,
        })
    }

    /// Count exact and near-duplicate sentences
    pub fn get_duplicate_statistics(&self, text: &str) -> DuplicateStatistics {
        let sentences = self.segment(text);
        let unique = self.dedupe(&sentences).len();
        DuplicateStatistics::from_counts(sentences.len(), unique)
    }
}

/// Shared English list unless another language or extra words are configured
fn load_stopwords(config: &SummarizerConfig) -> Arc<StopwordFilter> {
    let is_english = matches!(
        config.language.trim().to_lowercase().as_str(),
        "en" | "english"
    );
    if is_english && config.stopwords.is_empty() {
        return StopwordFilter::english();
    }

    let mut filter = if is_english {
        StopwordFilter::english().as_ref().clone()
    } else {
        StopwordFilter::for_language(&config.language)
    };
    filter.add_stopwords(&config.stopwords);
    Arc::new(filter)
}

/// Convenience function to summarize with the default configuration
pub fn generate_summary(text: &str, options: &SummaryOptions) -> Result<String> {
    TextSummarizer::new(SummarizerConfig::default())?.generate_summary(text, options)
}

/// Convenience function to compute duplicate statistics with the default configuration
pub fn get_duplicate_statistics(text: &str) -> Result<DuplicateStatistics> {
    Ok(TextSummarizer::new(SummarizerConfig::default())?.get_duplicate_statistics(text))
}
