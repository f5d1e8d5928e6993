//! Stopword filtering
//!
//! This module provides multi-language stopword filtering using the `stop-words` crate
//! with support for custom stopword lists. The English list is loaded once per
//! process and shared read-only.

use crate::errors::{Result, SummarizerError};
use rustc_hash::FxHashSet;
use std::sync::{Arc, LazyLock};
use stop_words::{get, LANGUAGE};

static ENGLISH: LazyLock<Arc<StopwordFilter>> =
    LazyLock::new(|| Arc::new(StopwordFilter::for_language("en")));

/// A filter for removing stopwords from text
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::for_language("en")
    }
}

impl StopwordFilter {
    /// Load the stopword list for a language
    ///
    /// Accepts ISO codes or English names: en, de, fr, es, it, pt, nl, ru,
    /// sv, no, da, fi, hu, tr, pl, ar.
    pub fn try_new(language: &str) -> Result<Self> {
        let lang = Self::parse_language(language)
            .ok_or_else(|| SummarizerError::unsupported_language(language))?;
        let stopwords = get(lang).iter().map(|s| s.to_lowercase()).collect();
        Ok(Self { stopwords })
    }

    /// Load the stopword list for a language, degrading to an empty filter
    ///
    /// An unavailable list means every token is counted; summarization still works.
    pub fn for_language(language: &str) -> Self {
        match Self::try_new(language) {
            Ok(filter) => filter,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_err, "stopwords unavailable, counting all tokens");
                Self::empty()
            }
        }
    }

    /// The process-wide English stopword filter
    pub fn english() -> Arc<StopwordFilter> {
        Arc::clone(&ENGLISH)
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Check if a word is a stopword (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.stopwords.contains(word) {
            return true;
        }
        word.chars().any(char::is_uppercase) && self.stopwords.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn parse_language(language: &str) -> Option<LANGUAGE> {
        let lang = match language.trim().to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => return None,
        };
        Some(lang)
    }
}
