//! A dictionary that answers octal numerals.

use litxap_phonology::Attributive;
use litxap_phonology::number;
use tracing::trace;

use crate::dictionary::Dictionary;
use crate::entry::Entry;
use crate::error::LookupError;

/// Recognizes numeral words (*mrrvomrr*, *azave*, *tsìvola*) without any
/// stored entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NumberDictionary;

impl NumberDictionary {
    /// Creates the dictionary.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dictionary for NumberDictionary {
    fn lookup(&self, word: &str) -> Result<Vec<Entry>, LookupError> {
        let parsed = number::parse(&word.to_lowercase()).ok_or(LookupError::NotFound)?;
        let (syllables, stress) = parsed
            .generate_syllables(false)
            .ok_or(LookupError::NotFound)?;

        let mut notation = String::new();
        for (i, syllable) in syllables.iter().enumerate() {
            if i > 0 {
                notation.push('.');
            }
            if i == stress && stress > 0 {
                notation.push('*');
            }
            notation.push_str(syllable);
        }

        notation.push_str(match parsed.attributive {
            Attributive::None => ": : ",
            Attributive::Prefix => ": a-: ",
            Attributive::Suffix => ": -a: ",
        });

        let kind = if parsed.ordinal { "Ordinal number" } else { "Number" };
        let value = parsed.value;
        notation.push_str(&if value < 0o10 {
            format!("{kind} {value}")
        } else {
            format!("{kind} °{value:o} ({value})")
        });

        trace!(word, %notation, "numeral");
        let entry = Entry::parse(&notation).ok_or(LookupError::NotFound)?;
        Ok(vec![entry])
    }
}
