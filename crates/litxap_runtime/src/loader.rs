//! Loading dictionaries from text files.
//!
//! A dictionary file has one entry per line:
//!
//! ```text
//! # key = notation
//! kaltxì = kal.*txì: : hello
//! kameie = k·a.m·e: <ei>: see
//! kameie = k··ä: <am,ei>: go
//! ```
//!
//! A repeated key adds another sense. Lines starting with `#` and blank
//! lines are ignored.

use std::fs;
use std::path::Path;

use litxap_lexicon::{Entry, MapDictionary};
use tracing::{debug, warn};

use crate::error::{Error, Result};

const SEPARATOR: &str = " = ";
const COMMENT: char = '#';

/// Parses one non-blank, non-comment line into its key and entry.
fn parse_entry_line(line: &str) -> std::result::Result<(&str, Entry), String> {
    let Some((key, notation)) = line.split_once(SEPARATOR) else {
        return Err(format!("expected \"KEY{SEPARATOR}NOTATION\""));
    };
    let key = key.trim();
    if key.is_empty() {
        return Err("empty key".to_string());
    }
    let entry = notation.trim().parse::<Entry>().map_err(|e| e.to_string())?;
    Ok((key, entry))
}

fn parse(text: &str, strict: bool) -> Result<MapDictionary> {
    let mut dictionary = MapDictionary::new();

    for (index, line) in text.lines().enumerate() {
        let number = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT) {
            continue;
        }

        match parse_entry_line(trimmed) {
            Ok((key, entry)) => dictionary.insert(key, entry),
            Err(message) if strict => return Err(Error::dictionary_format(number, message)),
            Err(message) => warn!(line = number, "skipping dictionary line: {message}"),
        }
    }

    Ok(dictionary)
}

/// Parses dictionary text, skipping malformed lines with a warning.
#[must_use]
pub fn parse_dictionary(text: &str) -> MapDictionary {
    // Lenient parsing never fails.
    parse(text, false).unwrap_or_default()
}

/// Parses dictionary text, failing on the first malformed line.
///
/// # Errors
///
/// Returns [`ErrorKind::DictionaryFormat`](crate::ErrorKind::DictionaryFormat)
/// with the 1-indexed line number.
pub fn parse_dictionary_strict(text: &str) -> Result<MapDictionary> {
    parse(text, true)
}

/// Loads a dictionary text file into memory.
///
/// # Errors
///
/// Returns an error if the file cannot be read. Malformed lines are
/// skipped, not reported.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<MapDictionary> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        Error::io(format!("failed to read '{}': {e}", path.display()))
            .with_context(path.display().to_string())
    })?;
    let dictionary = parse_dictionary(&text);

    debug!(
        path = %path.display(),
        keys = dictionary.len(),
        senses = dictionary.sense_count(),
        "loaded dictionary"
    );
    Ok(dictionary)
}
