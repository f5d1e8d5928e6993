//! Core types for rapid_summarizer
//!
//! This module defines the data structures shared by the pipeline stages:
//! sentences with their original positions, the dense similarity matrix,
//! and the construction-time and per-call configuration.

use crate::errors::{Result, SummarizerError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input text
///
/// `index` is the position in the original segmented sequence. It is
/// assigned once during segmentation and carried unchanged through
/// deduplication and ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text, trimmed
    pub text: String,
    /// Start byte offset in the original text
    pub start: usize,
    /// End byte offset in the original text (exclusive)
    pub end: usize,
    /// Sentence index within the document
    pub index: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }

    /// Whether the sentence holds nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Join sentence texts with single spaces
pub fn join_sentences<'a, I>(sentences: I) -> String
where
    I: IntoIterator<Item = &'a Sentence>,
{
    sentences
        .into_iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Similarity Matrix
// ============================================================================

/// A dense, square similarity matrix stored row-major
///
/// Built symmetric with a zero diagonal; see
/// [`crate::graph::builder::SimilarityGraphBuilder`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Create an all-zero matrix of the given size
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            values: vec![0.0; size * size],
        }
    }

    /// Assemble a matrix from full rows
    ///
    /// Every row must have exactly `rows.len()` entries.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let size = rows.len();
        debug_assert!(rows.iter().all(|r| r.len() == size));
        Self {
            size,
            values: rows.into_iter().flatten().collect(),
        }
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if the matrix has no rows
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Get the value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.size + col]
    }

    /// Set the value at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.values[row * self.size + col] = value;
    }

    /// Borrow one row
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.size;
        &self.values[start..start + self.size]
    }

    /// Check symmetry within `epsilon`
    pub fn is_symmetric(&self, epsilon: f64) -> bool {
        (0..self.size).all(|i| {
            ((i + 1)..self.size).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= epsilon)
        })
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Construction-time configuration for [`crate::TextSummarizer`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Language code or name for stopwords (e.g., "en", "english", "de")
    pub language: String,
    /// Cosine similarity at or above which a sentence is a near-duplicate
    pub similarity_threshold: f64,
    /// Damping factor for PageRank (typically 0.85)
    pub damping: f64,
    /// Maximum iterations for PageRank convergence
    pub max_iterations: usize,
    /// Per-node convergence tolerance (stop when L1 delta < n * tolerance)
    pub convergence_threshold: f64,
    /// Additional stopwords (extends the built-in list)
    pub stopwords: Vec<String>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            similarity_threshold: 0.8,
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-6,
            stopwords: Vec::new(),
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SummarizerError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(SummarizerError::invalid_config(format!(
                "similarity_threshold must be between 0 and 1, got {}",
                self.similarity_threshold
            )));
        }

        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(SummarizerError::invalid_config(format!(
                "damping must be strictly between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(SummarizerError::invalid_config("max_iterations must be > 0"));
        }

        if !(self.convergence_threshold > 0.0) {
            return Err(SummarizerError::invalid_config(
                "convergence_threshold must be > 0",
            ));
        }

        Ok(())
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: set near-duplicate similarity threshold
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: add extra stopwords
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }
}

/// Per-call options for summary generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryOptions {
    /// Fraction of surviving sentences to keep, in (0, 1]
    pub ratio: f64,
    /// Minimum number of sentences in the summary
    pub min_sentences: usize,
    /// Maximum number of sentences in the summary
    pub max_sentences: usize,
    /// Whether to remove exact and near-duplicate sentences first
    pub remove_duplicates: bool,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            ratio: 0.3,
            min_sentences: 2,
            max_sentences: 10,
            remove_duplicates: true,
        }
    }
}

impl SummaryOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse JSON options; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)
            .map_err(|e| SummarizerError::invalid_config(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if !(self.ratio.is_finite() && self.ratio > 0.0 && self.ratio <= 1.0) {
            return Err(SummarizerError::invalid_config(format!(
                "ratio must be in (0, 1], got {}",
                self.ratio
            )));
        }

        if self.min_sentences == 0 {
            return Err(SummarizerError::invalid_config("min_sentences must be > 0"));
        }

        if self.max_sentences < self.min_sentences {
            return Err(SummarizerError::invalid_config(format!(
                "max_sentences ({}) must be >= min_sentences ({})",
                self.max_sentences, self.min_sentences
            )));
        }

        Ok(())
    }

    /// Builder method: set ratio
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Builder method: set minimum sentence count
    pub fn with_min_sentences(mut self, min_sentences: usize) -> Self {
        self.min_sentences = min_sentences;
        self
    }

    /// Builder method: set maximum sentence count
    pub fn with_max_sentences(mut self, max_sentences: usize) -> Self {
        self.max_sentences = max_sentences;
        self
    }

    /// Builder method: toggle duplicate removal
    pub fn with_remove_duplicates(mut self, remove_duplicates: bool) -> Self {
        self.remove_duplicates = remove_duplicates;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SummarizerConfig::default().validate().is_ok());
        assert!(SummaryOptions::default().validate().is_ok());
    }

    #[test]
    fn test_config_rejects_out_of_range_values() {
        let cfg = SummarizerConfig::new().with_similarity_threshold(1.5);
        assert!(matches!(cfg.validate(), Err(SummarizerError::InvalidConfig(_))));

        let cfg = SummarizerConfig::new().with_damping(1.0);
        assert!(cfg.validate().is_err());

        let cfg = SummarizerConfig::new().with_max_iterations(0);
        assert!(cfg.validate().is_err());

        let cfg = SummarizerConfig::new().with_convergence_threshold(0.0);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_options_reject_inconsistent_bounds() {
        let opts = SummaryOptions::new().with_min_sentences(5).with_max_sentences(3);
        let err = opts.validate().unwrap_err();
        assert!(err.to_string().contains("max_sentences"));

        assert!(SummaryOptions::new().with_ratio(0.0).validate().is_err());
        assert!(SummaryOptions::new().with_ratio(1.2).validate().is_err());
        assert!(SummaryOptions::new().with_ratio(f64::NAN).validate().is_err());
        assert!(SummaryOptions::new().with_min_sentences(0).validate().is_err());
        assert!(SummaryOptions::new().with_ratio(1.0).validate().is_ok());
    }

    #[test]
    fn test_config_from_partial_json() {
        let cfg: SummarizerConfig =
            serde_json::from_str(r#"{ "similarity_threshold": 0.9, "language": "de" }"#).unwrap();
        assert_eq!(cfg.language, "de");
        assert!((cfg.similarity_threshold - 0.9).abs() < 1e-12);
        assert_eq!(cfg.max_iterations, 100);

        let opts: SummaryOptions = serde_json::from_str(r#"{ "ratio": 0.5 }"#).unwrap();
        assert_eq!(opts.min_sentences, 2);
        assert!(opts.remove_duplicates);
    }

    #[test]
    fn test_from_json_validates() {
        let cfg = SummarizerConfig::from_json(r#"{ "damping": 0.9 }"#).unwrap();
        assert!((cfg.damping - 0.9).abs() < 1e-12);

        assert!(matches!(
            SummarizerConfig::from_json(r#"{ "damping": 1.5 }"#),
            Err(SummarizerError::InvalidConfig(_))
        ));
        assert!(SummarizerConfig::from_json("not json").is_err());
        assert!(SummaryOptions::from_json(r#"{ "min_sentences": 4, "max_sentences": 2 }"#).is_err());
        assert_eq!(SummaryOptions::from_json("{}").unwrap(), SummaryOptions::default());
    }

    #[test]
    fn test_similarity_matrix_access() {
        let mut m = SimilarityMatrix::zeros(3);
        m.set(0, 1, 0.5);
        m.set(1, 0, 0.5);

        assert_eq!(m.size(), 3);
        assert_eq!(m.row(0), &[0.0, 0.5, 0.0]);
        assert!(m.is_symmetric(1e-12));

        m.set(2, 0, 0.1);
        assert!(!m.is_symmetric(1e-12));
    }

    #[test]
    fn test_join_sentences() {
        let sentences = vec![
            Sentence::new("First one.", 0, 10, 0),
            Sentence::new("Second one.", 11, 22, 1),
        ];
        assert_eq!(join_sentences(&sentences), "First one. Second one.");
        assert_eq!(join_sentences(&Vec::<Sentence>::new()), "");
    }
}
