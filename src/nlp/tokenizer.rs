//! Word tokenization
//!
//! Splits a sentence into word-level tokens on Unicode word boundaries
//! (UAX #29). Whitespace runs are skipped; punctuation is kept as separate
//! tokens so callers can decide what to discard.

use unicode_segmentation::UnicodeSegmentation;

/// Unicode-aware word tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    lowercase: bool,
}

impl Tokenizer {
    /// Create a tokenizer that preserves case
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether tokens are lowercased
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Tokenize into an ordered token sequence
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_word_bounds()
            .filter(|t| !t.trim().is_empty())
            .map(|t| {
                if self.lowercase {
                    t.to_lowercase()
                } else {
                    t.to_string()
                }
            })
            .collect()
    }
}

/// Whether every character of a token is alphabetic or numeric
pub fn is_alphanumeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}
