//! Error types for rapid_summarizer
//!
//! Summarization itself never fails on degenerate text; errors only surface
//! for inconsistent configuration or an explicitly requested language that
//! has no stopword list.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SummarizerError>;

/// Errors raised while configuring or running the summarizer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SummarizerError {
    /// A configuration value is out of range or inconsistent with another
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No stopword list is available for the requested language
    #[error("unsupported stopword language: {0}")]
    UnsupportedLanguage(String),
}

impl SummarizerError {
    /// Create an invalid-configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        SummarizerError::InvalidConfig(message.into())
    }

    /// Create an unsupported-language error
    pub fn unsupported_language(language: impl Into<String>) -> Self {
        SummarizerError::UnsupportedLanguage(language.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SummarizerError::invalid_config("ratio must be in (0, 1]");
        assert_eq!(err.to_string(), "invalid configuration: ratio must be in (0, 1]");

        let err = SummarizerError::unsupported_language("klingon");
        assert_eq!(err.to_string(), "unsupported stopword language: klingon");
    }
}
