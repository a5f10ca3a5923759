//! The dictionary capability and the in-memory dictionaries.

use std::sync::Arc;

use im::{HashMap, Vector};

use crate::entry::Entry;
use crate::error::{LookupError, NotationError};

/// Anything that can answer "which entries could this word be?".
///
/// Implementations return every sense that could match the lowercase word,
/// in their own order, or [`LookupError::NotFound`] if there is none. Any
/// other error aborts the line being annotated. Dictionaries are shared
/// between threads, so implementations must be `Send + Sync`.
pub trait Dictionary: Send + Sync {
    /// Looks up every entry for `word`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] if no entry matches, or
    /// [`LookupError::Failure`] if the dictionary itself failed.
    fn lookup(&self, word: &str) -> Result<Vec<Entry>, LookupError>;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn lookup(&self, word: &str) -> Result<Vec<Entry>, LookupError> {
        (**self).lookup(word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn lookup(&self, word: &str) -> Result<Vec<Entry>, LookupError> {
        (**self).lookup(word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Arc<D> {
    fn lookup(&self, word: &str) -> Result<Vec<Entry>, LookupError> {
        (**self).lookup(word)
    }
}

// =============================================================================
// MultiDictionary
// =============================================================================

/// Queries several dictionaries and concatenates their answers in order.
///
/// Any failure other than `NotFound` fails the whole lookup, even if other
/// dictionaries had answers.
#[derive(Default)]
pub struct MultiDictionary {
    sources: Vec<Box<dyn Dictionary>>,
}

impl MultiDictionary {
    /// Creates an empty dictionary that finds nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a source after the existing ones.
    pub fn push(&mut self, source: impl Dictionary + 'static) {
        self.sources.push(Box::new(source));
    }

    /// Builder form of [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, source: impl Dictionary + 'static) -> Self {
        self.push(source);
        self
    }

    /// Returns the number of sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns true if there are no sources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Dictionary for MultiDictionary {
    fn lookup(&self, word: &str) -> Result<Vec<Entry>, LookupError> {
        let mut found = Vec::new();
        for source in &self.sources {
            match source.lookup(word) {
                Ok(entries) => found.extend(entries),
                Err(LookupError::NotFound) => {}
                Err(err) => return Err(err),
            }
        }

        if found.is_empty() {
            Err(LookupError::NotFound)
        } else {
            Ok(found)
        }
    }
}

impl FromIterator<Box<dyn Dictionary>> for MultiDictionary {
    fn from_iter<I: IntoIterator<Item = Box<dyn Dictionary>>>(iter: I) -> Self {
        Self {
            sources: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Debug for MultiDictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiDictionary")
            .field("sources", &self.sources.len())
            .finish()
    }
}

// =============================================================================
// MapDictionary
// =============================================================================

/// A dictionary held in memory, keyed by lowercase spelling.
///
/// Every key maps to its senses in insertion order. Cloning is cheap since
/// the table is a persistent map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDictionary {
    table: HashMap<String, Vector<Entry>>,
}

impl MapDictionary {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dictionary from `(key, notation)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`NotationError`] for the first notation with an empty root.
    pub fn from_entries<I, K, N>(entries: I) -> Result<Self, NotationError>
    where
        I: IntoIterator<Item = (K, N)>,
        K: AsRef<str>,
        N: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for (key, notation) in entries {
            dictionary.insert(key.as_ref(), notation.as_ref().parse()?);
        }
        Ok(dictionary)
    }

    /// Adds a sense for `key` after any existing ones.
    pub fn insert(&mut self, key: &str, entry: Entry) {
        self.table
            .entry(key.to_lowercase())
            .or_default()
            .push_back(entry);
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if there are no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the total number of senses across all keys.
    #[must_use]
    pub fn sense_count(&self) -> usize {
        self.table.values().map(Vector::len).sum()
    }

    /// Adds every sense of `other` after this dictionary's senses.
    pub fn extend(&mut self, other: &Self) {
        for (key, entries) in &other.table {
            self.table
                .entry(key.clone())
                .or_default()
                .append(entries.clone());
        }
    }
}

impl Dictionary for MapDictionary {
    fn lookup(&self, word: &str) -> Result<Vec<Entry>, LookupError> {
        match self.table.get(word.to_lowercase().as_str()) {
            Some(entries) if !entries.is_empty() => Ok(entries.iter().cloned().collect()),
            _ => Err(LookupError::NotFound),
        }
    }
}
