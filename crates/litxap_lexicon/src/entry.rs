//! Dictionary entries and their compact notation.
//!
//! An entry is written `ROOT[: AFFIXES][: TRANSLATION]`:
//!
//! ```text
//! t·ì.*r·an: tì- <us> -ìri: walk
//! │          │   │    │     └ translation
//! │          │   │    └ suffixes, innermost first
//! │          │   └ infixes
//! │          └ prefixes, outermost first
//! └ root syllables, `*` marks stress and `·` marks infix slots
//! ```
//!
//! Formatting a parsed entry gives back the text it was parsed from. The
//! affix field is kept as written, so token order and grouping survive
//! (`-ti -ri` and `-ti-ri` parse the same but format differently).

use std::fmt;
use std::str::FromStr;

use litxap_phonology::{
    INFIX_MARKER, apply_infixes, apply_prefixes, apply_suffixes_with_stress, coda_of,
    has_infix_slots,
};
use tracing::debug;

use crate::error::NotationError;

/// One syllable of a root template.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RootSyllable {
    /// The syllable, with any `·` infix markers.
    pub text: String,
    /// True if a new word starts at this syllable (`u.*van si`).
    pub word_start: bool,
}

/// One dictionary sense.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// The citation spelling: the root without markers, words separated by spaces.
    pub word: String,
    /// The gloss, if any.
    pub translation: Option<String>,
    /// The root template.
    pub root: Vec<RootSyllable>,
    /// The stressed root syllable, if marked. Unmarked roots stress the first syllable.
    pub stress: Option<usize>,
    /// The word carries no stress of its own.
    pub no_stress: bool,
    /// Prefixes, outermost first.
    pub prefixes: Vec<String>,
    /// Infixes in slot order.
    pub infixes: Vec<String>,
    /// Suffixes, innermost first.
    pub suffixes: Vec<String>,
    /// The affix field as written, `None` if the notation had no `:`.
    affix_field: Option<String>,
}

impl Entry {
    /// Parses entry notation. Returns `None` if the root is empty.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut fields = s.splitn(3, ':').map(|f| f.strip_prefix(' ').unwrap_or(f));
        let root_field = fields.next().unwrap_or_default();
        let affix_field = fields.next();
        let translation = fields.next().map(str::to_string);

        let mut root = Vec::new();
        let mut stress = None;
        for word in root_field.split_whitespace() {
            for (i, syllable) in word.split('.').enumerate() {
                let text = match syllable.strip_prefix('*') {
                    Some(text) => {
                        stress = Some(root.len());
                        text
                    }
                    None => syllable,
                };

                root.push(RootSyllable {
                    text: text.to_string(),
                    word_start: i == 0 && !root.is_empty(),
                });
            }
        }

        if root.is_empty() {
            return None;
        }

        let mut entry = Self {
            word: String::new(),
            translation,
            root,
            stress,
            no_stress: false,
            prefixes: Vec::new(),
            infixes: Vec::new(),
            suffixes: Vec::new(),
            affix_field: affix_field.map(str::to_string),
        };
        entry.word = entry.citation();

        for token in affix_field.unwrap_or_default().split_whitespace() {
            if token == "no_stress" {
                entry.no_stress = true;
            } else if let Some(list) = token.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
                entry
                    .infixes
                    .extend(list.split(',').filter(|s| !s.is_empty()).map(String::from));
            } else if let Some(list) = token.strip_prefix('-') {
                entry.suffixes.extend(split_affixes(list));
            } else if let Some(list) = token.strip_suffix('-') {
                entry.prefixes.extend(split_affixes(list));
            } else {
                debug!(token, notation = s, "unrecognized affix token");
            }
        }

        Some(entry)
    }

    /// Builds the root without markers.
    fn citation(&self) -> String {
        let mut word = String::with_capacity(self.root.len() * 3);
        for syllable in &self.root {
            if syllable.word_start {
                word.push(' ');
            }
            word.extend(syllable.text.chars().filter(|c| *c != INFIX_MARKER));
        }
        word
    }

    /// Returns true if the root has infix slots, which is what marks a verb.
    #[must_use]
    pub fn is_verb_root(&self) -> bool {
        has_infix_slots(&self.template())
    }

    /// Returns the number of space separated words in the citation form.
    #[must_use]
    pub fn word_count(&self) -> usize {
        1 + self.root.iter().filter(|s| s.word_start).count()
    }

    /// Roots that open on a bare infix slot and stress a closed syllable
    /// (`·i.*n·an`, `·o.*m·um`) keep the stress with the initial vowel once
    /// anything is added in front of the root or into its slots.
    fn stress_stays_initial(&self) -> bool {
        let Some(stressed) = self.stress.filter(|s| *s > 0) else {
            return false;
        };
        self.root[0].text.starts_with(INFIX_MARKER)
            && coda_of(&self.root[stressed].text).is_some()
            && (!self.prefixes.is_empty() || !self.infixes.is_empty())
    }

    fn template(&self) -> Vec<&str> {
        self.root.iter().map(|s| s.text.as_str()).collect()
    }

    /// Builds the citation form of this entry with all its affixes.
    ///
    /// Returns the syllables, the index of the stressed syllable and the
    /// number of syllables the prefixes added in front of the root.
    #[must_use]
    pub fn generate_syllables(&self) -> (Vec<String>, usize, usize) {
        let template = self.template();
        let stress = self.stress.unwrap_or(0);

        let (syllables, mut stress) = apply_infixes(&template, &self.infixes, stress);
        if self.stress_stays_initial() {
            stress = apply_infixes(&template, &self.infixes, 0).1;
        }
        let (syllables, stress) = apply_suffixes_with_stress(
            syllables,
            &self.suffixes,
            has_infix_slots(&template),
            stress,
        );
        let (syllables, offset) = apply_prefixes(syllables, &self.prefixes);

        (syllables, stress + offset, offset)
    }
}

fn split_affixes(list: &str) -> impl Iterator<Item = String> + '_ {
    list.split('-').filter(|s| !s.is_empty()).map(String::from)
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, syllable) in self.root.iter().enumerate() {
            if i > 0 {
                f.write_str(if syllable.word_start { " " } else { "." })?;
            }
            if self.stress == Some(i) {
                f.write_str("*")?;
            }
            f.write_str(&syllable.text)?;
        }

        if self.affix_field.is_some() || self.translation.is_some() {
            f.write_str(": ")?;
            f.write_str(self.affix_field.as_deref().unwrap_or_default())?;
        }
        if let Some(translation) = &self.translation {
            write!(f, ": {translation}")?;
        }

        Ok(())
    }
}

impl FromStr for Entry {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(NotationError::EmptyRoot)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Entry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Entry {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let notation = String::deserialize(deserializer)?;
        notation.parse().map_err(serde::de::Error::custom)
    }
}
