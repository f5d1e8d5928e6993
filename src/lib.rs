//! # rapid_summarizer
//!
//! Extractive text summarization using TextRank-style sentence ranking.
//!
//! Text is split into sentences, exact and near-duplicate sentences are
//! removed, each sentence becomes a term-frequency vector, and PageRank over
//! the cosine-similarity graph scores sentence salience. The highest-scoring
//! sentences are returned verbatim, in their original order.
//!
//! ## Features
//!
//! - **Deterministic**: ties are broken by document position
//! - **Unicode-aware**: sentence and word boundaries follow UAX #29, with
//!   abbreviations such as "Dr." kept inside their sentence
//! - **Multi-language stopwords** via the `stop-words` crate
//! - **Tracing** spans per stage behind the `tracing` feature
//!
//! ```rust,ignore
//! use rapid_summarizer::{SummarizerConfig, SummaryOptions, TextSummarizer};
//!
//! let summarizer = TextSummarizer::new(SummarizerConfig::default())?;
//! let summary = summarizer.generate_summary(text, &SummaryOptions::default())?;
//! ```

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, SummarizerError};
pub use types::{Sentence, SimilarityMatrix, SummarizerConfig, SummaryOptions};

// Re-export main functionality
pub use graph::{builder::SimilarityGraphBuilder, csr::CsrGraph};
pub use nlp::{
    segmenter::{AbbreviationAwareDetector, Segmenter, SentenceDetector},
    stopwords::StopwordFilter,
    tokenizer::Tokenizer,
};
pub use pagerank::{standard::StandardPageRank, PageRankResult};
pub use summarizer::dedup::{DedupResult, Deduplicator};
pub use summarizer::engine::{
    generate_summary, get_duplicate_statistics, DuplicateStatistics, SummaryOutcome,
    SummaryReport, TextSummarizer,
};
pub use summarizer::ranker::{SentenceRanker, SentenceScores};
pub use summarizer::selector::SelectedSentence;
pub use summarizer::vector::{cosine, SentenceVector, Vectorizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
