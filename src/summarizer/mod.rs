//! Summarization components
//!
//! Provides extractive summarization: duplicate removal, term-frequency
//! sentence vectors, PageRank sentence ranking, and top-K selection.

pub mod dedup;
pub mod engine;
pub mod ranker;
pub mod selector;
pub mod vector;
