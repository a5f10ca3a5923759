//! Error types for dictionary lookups and entry notation.
//!
//! Uses `thiserror`. Grammar failures (unsplittable words, spellings that
//! do not align) are not errors; they show up as `None`.

use std::error::Error as StdError;

use thiserror::Error;

/// Boxed source error carried by [`LookupError::Failure`].
pub type BoxedError = Box<dyn StdError + Send + Sync>;

/// The result of a dictionary lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The dictionary has no entry for the word. This is expected for most
    /// words in free text and callers skip the word.
    #[error("entry not found")]
    NotFound,

    /// The dictionary itself failed.
    #[error("lookup failed: {0}")]
    Failure(BoxedError),
}

impl LookupError {
    /// Wraps a backend error.
    #[must_use]
    pub fn failure(source: impl Into<BoxedError>) -> Self {
        Self::Failure(source.into())
    }

    /// Returns true for [`LookupError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Entry notation that cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// The root field is empty.
    #[error("entry notation has an empty root")]
    EmptyRoot,
}
