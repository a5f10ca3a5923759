//! Error types for the runtime layer.
//!
//! Uses `thiserror`. Library crates below this one report lookup failures
//! through their own error types; this module folds them, together with
//! file and codec failures, into a single [`Error`].

use thiserror::Error;

/// The main error type for litxap runtime operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred, such as a file path.
    pub context: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Creates an error for a malformed dictionary line.
    #[must_use]
    pub fn dictionary_format(line: usize, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DictionaryFormat {
            line,
            message: message.into(),
        })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Encoding a JSON dump failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A dictionary file has a line that is not `KEY = NOTATION`.
    #[error("dictionary format error on line {line}: {message}")]
    DictionaryFormat {
        /// Line number (1-indexed).
        line: usize,
        /// What is wrong with the line.
        message: String,
    },

    /// A dictionary failed while annotating a line.
    #[error(transparent)]
    Annotation(#[from] litxap_annotate::Error),
}

impl From<litxap_annotate::Error> for Error {
    fn from(err: litxap_annotate::Error) -> Self {
        Self::new(ErrorKind::Annotation(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

/// Result type alias using the runtime [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
