//! Lines of text split into words and the entries each word matched.

use std::ops::Index;

use litxap_lexicon::{Dictionary, Entry, run_word};
use tracing::debug;

use crate::error::{Error, Result};

/// One entry a word matched, with the word split along that entry's syllables.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinePartMatch {
    /// The word as written, split into syllables.
    pub syllables: Vec<String>,
    /// The stressed syllable, or `None` if the word is unstressed here.
    pub stress: Option<usize>,
    /// The entry that matched.
    pub entry: Entry,
    /// The word takes emphatic stress even if it has a single syllable.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stressed_word: bool,
}

impl LinePartMatch {
    /// Creates a match without emphatic stress.
    #[must_use]
    pub fn new(syllables: Vec<String>, stress: Option<usize>, entry: Entry) -> Self {
        Self {
            syllables,
            stress,
            entry,
            stressed_word: false,
        }
    }
}

/// A word or the text between two words.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinePart {
    /// The text as written.
    pub raw: String,
    /// The spelling to look the word up by, when it differs from `raw`.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub lookup: Option<String>,
    /// True for words, false for whitespace and punctuation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_word: bool,
    /// Every entry the word matched, in dictionary order.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub matches: Vec<LinePartMatch>,
}

impl LinePart {
    /// Creates a word part.
    #[must_use]
    pub fn word(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            is_word: true,
            ..Self::default()
        }
    }

    /// Creates a part for the text between words.
    #[must_use]
    pub fn separator(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            ..Self::default()
        }
    }

    /// Sets the lookup spelling.
    #[must_use]
    pub fn with_lookup(mut self, lookup: impl Into<String>) -> Self {
        self.lookup = Some(lookup.into());
        self
    }

    /// Adds a match.
    #[must_use]
    pub fn with_match(mut self, m: LinePartMatch) -> Self {
        self.matches.push(m);
        self
    }

    /// Returns the lowercase spelling this word is looked up by.
    #[must_use]
    pub fn lookup_key(&self) -> String {
        self.lookup.as_deref().unwrap_or(&self.raw).to_lowercase()
    }
}

/// A tokenized line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Line {
    parts: Vec<LinePart>,
}

impl Line {
    /// Creates a line from its parts.
    #[must_use]
    pub fn new(parts: Vec<LinePart>) -> Self {
        Self { parts }
    }

    /// Returns the parts in reading order.
    #[must_use]
    pub fn parts(&self) -> &[LinePart] {
        &self.parts
    }

    pub(crate) fn parts_mut(&mut self) -> &mut [LinePart] {
        &mut self.parts
    }

    /// Consumes the line, returning its parts.
    #[must_use]
    pub fn into_parts(self) -> Vec<LinePart> {
        self.parts
    }

    /// Returns the number of parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns true if the line has no parts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Iterates over the parts.
    pub fn iter(&self) -> std::slice::Iter<'_, LinePart> {
        self.parts.iter()
    }

    /// Looks up every word and keeps the entries its spelling aligns with.
    ///
    /// Words the dictionary does not know get no matches, as do entries
    /// whose citation form does not fit the spelling.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the dictionary fails with anything but
    /// `NotFound`. No partial line is returned.
    pub fn run<D: Dictionary + ?Sized>(&self, dictionary: &D) -> Result<Self> {
        let mut line = self.clone();

        for part in line.parts.iter_mut().filter(|p| p.is_word) {
            let key = part.lookup_key();
            let entries = match dictionary.lookup(&key) {
                Ok(entries) => entries,
                Err(err) if err.is_not_found() => continue,
                Err(err) => return Err(Error::lookup(key, err)),
            };

            for entry in entries {
                match run_word(&part.raw, &entry) {
                    Some((syllables, stress)) => {
                        part.matches.push(LinePartMatch::new(syllables, stress, entry));
                    }
                    None => debug!(word = %part.raw, entry = %entry, "entry does not fit spelling"),
                }
            }
        }

        Ok(line)
    }
}

impl Index<usize> for Line {
    type Output = LinePart;

    fn index(&self, index: usize) -> &LinePart {
        &self.parts[index]
    }
}

impl From<Vec<LinePart>> for Line {
    fn from(parts: Vec<LinePart>) -> Self {
        Self::new(parts)
    }
}

impl<'a> IntoIterator for &'a Line {
    type Item = &'a LinePart;
    type IntoIter = std::slice::Iter<'a, LinePart>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

// =============================================================================
// Tokenizer
// =============================================================================

fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c == '\'' || c == '-'
}

/// Splits a line into alternating runs of word and non-word text.
///
/// Typographic apostrophes are read as `'`. Inside a word, `lookup|raw`
/// shows `raw` but looks it up as `lookup`. Hyphenated words containing
/// *na* are split at the hyphens, with a leading or trailing attributive
/// *a* split off into a word of its own.
#[must_use]
pub fn parse_line(text: &str) -> Line {
    let text = text.replace(['’', '‘'], "'");
    let mut parts = Vec::with_capacity(text.len() / 5 + 1);
    let mut current = String::new();
    let mut in_word = false;

    for c in text.chars() {
        if c != '|' && is_word_char(c) != in_word {
            push_run(&mut parts, &current, in_word);
            current.clear();
            in_word = !in_word;
        }
        current.push(c);
    }
    push_run(&mut parts, &current, in_word);

    Line::new(parts)
}

fn push_run(parts: &mut Vec<LinePart>, run: &str, is_word: bool) {
    if run.is_empty() {
        return;
    }
    if !is_word {
        parts.push(LinePart::separator(run));
        return;
    }

    if run.contains('-') && run.contains("na") {
        push_linked_words(parts, run);
    } else if let Some((lookup, raw)) = run.rsplit_once('|') {
        parts.push(LinePart::word(raw).with_lookup(lookup));
    } else {
        parts.push(LinePart::word(run));
    }
}

/// `aean-na-pay` is read as `a ean - na - pay`.
fn push_linked_words(parts: &mut Vec<LinePart>, run: &str) {
    let pieces: Vec<&str> = run.split('-').collect();
    let last = pieces.len() - 1;

    for (i, piece) in pieces.into_iter().enumerate() {
        let mut token = piece;
        if i > 0 {
            parts.push(LinePart::separator("-"));
        }

        if i == 0 {
            if let Some(rest) = token.strip_prefix('a') {
                parts.push(LinePart::word("a"));
                token = rest;
            }
        }

        let trailing = if i == last { token.strip_suffix('a') } else { None };
        if let Some(rest) = trailing {
            token = rest;
        }

        if !token.is_empty() {
            parts.push(LinePart::word(token));
        }
        if trailing.is_some() {
            parts.push(LinePart::word("a"));
        }
    }
}

/// Tokenizes `text` and looks up every word.
///
/// # Errors
///
/// Returns [`Error`] if the dictionary fails with anything but `NotFound`.
pub fn run_line<D: Dictionary + ?Sized>(text: &str, dictionary: &D) -> Result<Line> {
    parse_line(text).run(dictionary)
}
