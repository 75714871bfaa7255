//! Error types for RegexLab
//!
//! This module provides error handling using the `thiserror` crate.
//! Errors are categorized by their source: pattern compilation, flag parsing,
//! request validation, generation, matching, or the training store.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The main error type for RegexLab
#[derive(Error, Debug)]
pub enum RegexLabError {
    /// The native engine rejected the pattern
    #[error("Invalid regex pattern: {message}")]
    InvalidPattern {
        /// The pattern as submitted
        pattern: String,
        /// The engine's error message
        message: String,
    },

    /// A flag character that is not supported
    #[error("invalid flag '{0}'")]
    InvalidFlag(char),

    /// A flag character given more than once
    #[error("duplicate flag '{0}'")]
    DuplicateFlag(char),

    /// Request-level input validation failed
    #[error("validation failed for {field}: {message}")]
    Validation {
        /// The offending field
        field: &'static str,
        /// What was wrong with it
        message: String,
    },

    /// Description matched nothing and no examples were supplied
    #[error("Unable to generate regex from description. Please provide examples.")]
    Generation,

    /// The engine failed while searching (e.g. backtracking limit)
    #[error("match error: {0}")]
    Match(String),

    /// No exercise with this id
    #[error("training exercise {0} not found")]
    ExerciseNotFound(u32),

    /// Errors from reading or writing the store
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors raised by the file-backed training store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the store file failed
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// The store file is not valid JSON for the store document
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse classification of an error, mirroring request/response status classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller sent something unusable
    BadRequest,
    /// The referenced record does not exist
    NotFound,
    /// Anything else
    Internal,
}

impl RegexLabError {
    /// Classify the error
    pub fn category(&self) -> ErrorCategory {
        match self {
            RegexLabError::InvalidPattern { .. }
            | RegexLabError::InvalidFlag(_)
            | RegexLabError::DuplicateFlag(_)
            | RegexLabError::Validation { .. }
            | RegexLabError::Generation => ErrorCategory::BadRequest,
            RegexLabError::ExerciseNotFound(_) => ErrorCategory::NotFound,
            RegexLabError::Match(_) | RegexLabError::Store(_) => ErrorCategory::Internal,
        }
    }

    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        RegexLabError::Validation {
            field,
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for RegexLabError {
    fn from(err: std::io::Error) -> Self {
        RegexLabError::Store(StoreError::Io(err))
    }
}

impl From<serde_json::Error> for RegexLabError {
    fn from(err: serde_json::Error) -> Self {
        RegexLabError::Store(StoreError::Json(err))
    }
}

/// A span representing a location in a pattern or text.
///
/// Offsets count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Create a span for a single character
    pub fn single(pos: usize) -> Self {
        Span {
            start: pos,
            end: pos + 1,
        }
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Result type alias for RegexLab operations
pub type Result<T> = std::result::Result<T, RegexLabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_display() {
        let err = RegexLabError::InvalidPattern {
            pattern: "(".to_string(),
            message: "unclosed group".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid regex pattern: unclosed group");
    }

    #[test]
    fn test_generation_display() {
        assert_eq!(
            RegexLabError::Generation.to_string(),
            "Unable to generate regex from description. Please provide examples."
        );
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            RegexLabError::InvalidFlag('z').category(),
            ErrorCategory::BadRequest
        );
        assert_eq!(
            RegexLabError::validation("pattern", "must not be empty").category(),
            ErrorCategory::BadRequest
        );
        assert_eq!(
            RegexLabError::ExerciseNotFound(7).category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            RegexLabError::Match("limit".to_string()).category(),
            ErrorCategory::Internal
        );
    }

    #[test]
    fn test_store_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: RegexLabError = io.into();
        assert!(matches!(err, RegexLabError::Store(StoreError::Io(_))));
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.to_string().starts_with("store error: io:"));
    }

    #[test]
    fn test_span_creation() {
        let span = Span::new(10, 20);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_single() {
        let span = Span::single(5);
        assert_eq!(span, Span::new(5, 6));
        assert_eq!(span.len(), 1);
    }
}
