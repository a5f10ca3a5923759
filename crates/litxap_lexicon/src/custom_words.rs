//! A dictionary of proper names and the inflected forms they can take.

use im::{HashMap, Vector};

use crate::dictionary::Dictionary;
use crate::entry::Entry;
use crate::error::LookupError;

const TRANSLATION: &str = "Custom Name";

const CASE_SUFFIXES: &[&str] = &[
    "l", "ìl", "t", "ti", "it", "r", "ur", "ru", "ri", "ìri", "yä", "ä", "ye",
];

const LOANWORD_SUFFIXES: &[&str] = &["ìl", "it", "ur", "ìri", "ä"];

/// Adpositions that can be attached to a name. New adpositions in the
/// language need to be added here.
const ADPOSITIONS: &[&str] = &[
    "äo", "eo", "fa", "fpi", "ftu", "hu", "ìlä", "ka", "kip", "mì", "mungwrr", "na", "ne", "ta",
    "teri", "vay", "fkip", "io", "kxamlä", "lok", "maw", "mìkam", "nemfa", "pxaw", "pxel", "sìn",
    "takip", "uo", "luke", "tafkip", "ro", "sre", "wä", "pxisre", "pximaw", "rofa", "few",
    "lisre", "kam", "kay", "nuä", "sko", "talun", "ftumfa", "yoa", "krrka", "ftuopa", "raw", "ken",
];

/// Names like *Neytiri* or *Tsu'tey* that no dictionary has.
///
/// Each name is written with its syllables separated by `.` or `-` and an
/// optional `*` before the stressed syllable. A leading `-` marks the name
/// as unstressed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomWords {
    table: HashMap<String, Vector<String>>,
}

impl CustomWords {
    /// Builds the table of every form of `names`.
    #[must_use]
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        let mut words = Self::default();
        for name in names {
            words.add(name.as_ref());
        }
        words
    }

    /// Registers one more name.
    pub fn add(&mut self, name: &str) {
        let (name, no_stress) = match name.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (name, false),
        };
        let name = name.to_lowercase().replace('-', ".");

        let key = spelling(&name);
        self.register(&key, notation(&name, None, no_stress));
        for suffix in CASE_SUFFIXES.iter().chain(ADPOSITIONS) {
            self.register(&format!("{key}{suffix}"), notation(&name, Some(suffix), no_stress));
        }

        if let Some(stem) = name.strip_suffix('ì') {
            let key = spelling(stem);
            self.register(&key, notation(&name, None, no_stress));
            for suffix in LOANWORD_SUFFIXES {
                self.register(&format!("{key}{suffix}"), notation(&name, Some(suffix), no_stress));
            }
        }
    }

    /// Returns the number of recognized spellings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if no names were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn register(&mut self, key: &str, notation: String) {
        self.table
            .entry(key.to_string())
            .or_default()
            .push_back(notation);
    }
}

/// Writes the notation of a name without its translation.
fn notation(name: &str, suffix: Option<&str>, no_stress: bool) -> String {
    let mut affixes = suffix.map(|s| format!("-{s}")).unwrap_or_default();
    if no_stress {
        if !affixes.is_empty() {
            affixes.push(' ');
        }
        affixes.push_str("no_stress");
    }
    format!("{name}: {affixes}")
}

fn spelling(name: &str) -> String {
    name.chars().filter(|c| !matches!(c, '*' | '.')).collect()
}

impl Dictionary for CustomWords {
    fn lookup(&self, word: &str) -> Result<Vec<Entry>, LookupError> {
        let notations = self
            .table
            .get(word.to_lowercase().as_str())
            .ok_or(LookupError::NotFound)?;

        Ok(notations
            .iter()
            .filter_map(|notation| Entry::parse(&format!("{notation}: {TRANSLATION}")))
            .collect())
    }
}
