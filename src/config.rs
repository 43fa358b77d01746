//! Configuration types for analysis.
//!
//! [`AnalysisConfig`] holds the knobs of the aggregation step: how many
//! entries each ranking keeps, which body counts as a media placeholder and
//! where the stop-word list comes from. It has no CLI framework dependency
//! and can be loaded from a JSON file.
//!
//! # Example
//!
//! ```rust
//! use chatscope::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::new()
//!     .with_top_senders(5)
//!     .with_top_emojis(3);
//!
//! assert_eq!(config.top_senders, 5);
//! assert_eq!(config.top_months, 5);
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ChatscopeError;
use crate::record::MEDIA_OMITTED;

/// Settings for the aggregation step.
///
/// Every field has a default, so a JSON file only needs the keys it changes:
///
/// ```json
/// { "top_senders": 3, "stop_words_path": "stop_words.txt" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Entries kept in the busiest-month ranking (default: 5)
    pub top_months: usize,

    /// Entries kept in the busiest-sender ranking (default: 10)
    pub top_senders: usize,

    /// Entries kept in the emoji ranking (default: 10)
    pub top_emojis: usize,

    /// Entries kept in the word-frequency list (default: 20)
    pub top_words: usize,

    /// Body text that marks an omitted attachment (default: `<Media omitted>`)
    pub media_placeholder: String,

    /// Stop-word file replacing the built-in list (default: none)
    pub stop_words_path: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_months: 5,
            top_senders: 10,
            top_emojis: 10,
            top_words: 20,
            media_placeholder: MEDIA_OMITTED.to_string(),
            stop_words_path: None,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from a JSON file.
    ///
    /// Missing keys fall back to their defaults.
    #[cfg(feature = "json-output")]
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, ChatscopeError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every ranking keeps at least one entry.
    pub fn validate(&self) -> Result<(), ChatscopeError> {
        let caps = [
            ("top_months", self.top_months),
            ("top_senders", self.top_senders),
            ("top_emojis", self.top_emojis),
            ("top_words", self.top_words),
        ];
        if let Some((name, _)) = caps.iter().find(|(_, value)| *value == 0) {
            return Err(ChatscopeError::invalid_config(format!(
                "{name} must be at least 1"
            )));
        }
        if self.media_placeholder.is_empty() {
            return Err(ChatscopeError::invalid_config(
                "media_placeholder must not be empty",
            ));
        }
        Ok(())
    }

    /// Sets the busiest-month cap.
    #[must_use]
    pub fn with_top_months(mut self, n: usize) -> Self {
        self.top_months = n;
        self
    }

    /// Sets the busiest-sender cap.
    #[must_use]
    pub fn with_top_senders(mut self, n: usize) -> Self {
        self.top_senders = n;
        self
    }

    /// Sets the emoji ranking cap.
    #[must_use]
    pub fn with_top_emojis(mut self, n: usize) -> Self {
        self.top_emojis = n;
        self
    }

    /// Sets the word-frequency cap.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the media placeholder text.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Uses a stop-word file instead of the built-in list.
    #[must_use]
    pub fn with_stop_words_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stop_words_path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.top_months, 5);
        assert_eq!(config.top_senders, 10);
        assert_eq!(config.top_emojis, 10);
        assert_eq!(config.media_placeholder, "<Media omitted>");
        assert!(config.stop_words_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_chain() {
        let config = AnalysisConfig::new()
            .with_top_months(3)
            .with_top_senders(2)
            .with_top_emojis(1)
            .with_top_words(7)
            .with_media_placeholder("<attached>")
            .with_stop_words_path("stop.txt");
        assert_eq!(config.top_months, 3);
        assert_eq!(config.top_senders, 2);
        assert_eq!(config.top_emojis, 1);
        assert_eq!(config.top_words, 7);
        assert_eq!(config.media_placeholder, "<attached>");
        assert_eq!(config.stop_words_path, Some(PathBuf::from("stop.txt")));
    }

    #[test]
    fn test_validate_rejects_zero_cap() {
        let err = AnalysisConfig::new().with_top_emojis(0).validate().unwrap_err();
        assert!(err.to_string().contains("top_emojis"));
    }

    #[test]
    fn test_validate_rejects_empty_placeholder() {
        let err = AnalysisConfig::new()
            .with_media_placeholder("")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("media_placeholder"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AnalysisConfig = serde_json::from_str(r#"{"top_senders": 3}"#).unwrap();
        assert_eq!(config.top_senders, 3);
        assert_eq!(config.top_months, 5);
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"top_months": 2, "top_words": 4}}"#).unwrap();

        let config = AnalysisConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.top_months, 2);
        assert_eq!(config.top_words, 4);
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_file_invalid() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"top_months": 0}}"#).unwrap();

        let result = AnalysisConfig::from_json_file(file.path());
        assert!(matches!(result, Err(ChatscopeError::InvalidConfig { .. })));
    }
}
