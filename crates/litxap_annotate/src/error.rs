//! Errors raised while annotating a line.

use litxap_lexicon::LookupError;
use thiserror::Error;

/// A dictionary failed while annotating a line.
///
/// Words the dictionary does not know are skipped, so this only carries
/// real lookup failures.
#[derive(Debug, Error)]
#[error("failed to lookup \"{word}\": {source}")]
pub struct Error {
    /// The lowercase spelling that was looked up.
    pub word: String,
    /// What the dictionary reported.
    #[source]
    pub source: LookupError,
}

impl Error {
    /// Creates a lookup error for `word`.
    #[must_use]
    pub fn lookup(word: impl Into<String>, source: LookupError) -> Self {
        Self {
            word: word.into(),
            source,
        }
    }
}

/// Result type for annotation.
pub type Result<T> = std::result::Result<T, Error>;
