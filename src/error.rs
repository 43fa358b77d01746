//! Unified error types for chatscope.
//!
//! This module provides a single [`ChatscopeError`] enum that covers all error
//! cases in the library, in the same spirit as `reqwest`, `serde_json` and `csv`.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get one clear message per failed run
//! - **Developers** get source error chains for debugging
//!
//! Parsing is all-or-nothing: an export either yields a complete record
//! table or one of these errors. An empty result after filtering is *not*
//! an error.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatscope operations.
///
/// # Example
///
/// ```rust
/// use chatscope::error::Result;
/// use chatscope::MessageRecord;
///
/// fn load() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatscopeError>;

/// The error type for all chatscope operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatscopeError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - The output path cannot be written
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input contained no timestamped messages at all.
    ///
    /// Raised for empty uploads and for files that are not chat exports.
    #[error("No messages found: the input does not look like a chat export")]
    NoMessages,

    /// A matched timestamp did not conform to the export's date format.
    #[error("Invalid timestamp '{input}'. Expected format: {expected}")]
    InvalidTimestamp {
        /// The timestamp text as it appeared in the export
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// The analysis configuration is unusable.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing/serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    ///
    /// Occurs when file content is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatscopeError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatscopeError::Utf8 {
            context: "input decoding".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatscopeError {
    /// Creates an invalid timestamp error.
    pub fn invalid_timestamp(input: impl Into<String>) -> Self {
        ChatscopeError::InvalidTimestamp {
            input: input.into(),
            expected: "M/D/YY, H:MM AM/PM",
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatscopeError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ChatscopeError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatscopeError::Io(_))
    }

    /// Returns `true` if the input held no messages.
    pub fn is_no_messages(&self) -> bool {
        matches!(self, ChatscopeError::NoMessages)
    }

    /// Returns `true` if a timestamp failed to parse.
    pub fn is_invalid_timestamp(&self) -> bool {
        matches!(self, ChatscopeError::InvalidTimestamp { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatscopeError::InvalidDate { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
