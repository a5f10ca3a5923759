//! Prefix application.

use crate::lenition::lenite;

/// Syllable starts that a lost tail consonant can attach to.
const ATTACHABLE_CORES: &[&str] = &[
    "a", "ä", "e", "é", "i", "ì", "o", "u", "ù", "ay", "ey", "aw", "ew",
];

/// A prefix and the sound changes it brings along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prefix {
    pieces: &'static [&'static str],
    /// Final consonant that moves onto a vowel-initial root, e.g. tsuk + inan = tsu.ki.nan.
    lose_tail: Option<&'static str>,
    lenition: bool,
}

impl Prefix {
    const fn new(pieces: &'static [&'static str], lose_tail: Option<&'static str>) -> Self {
        Self {
            pieces,
            lose_tail,
            lenition: false,
        }
    }

    const fn lenited(mut self) -> Self {
        self.lenition = true;
        self
    }

    /// Returns true if this prefix lenites the word it is attached to.
    #[must_use]
    pub const fn has_lenition(&self) -> bool {
        self.lenition
    }

    /// Looks up a known prefix by name.
    #[must_use]
    pub fn find(name: &str) -> Option<Self> {
        PREFIXES
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, prefix)| *prefix)
    }

    /// Attaches this prefix in front of `syllables`.
    ///
    /// Returns the new syllables and how many syllables now sit in front of
    /// the old first syllable.
    #[must_use]
    pub fn apply(&self, mut syllables: Vec<String>) -> (Vec<String>, usize) {
        if self.lenition {
            if let Some(first) = syllables.first_mut() {
                *first = lenite(first).into_owned();
            }
        }

        let mut pieces: Vec<String> = self.pieces.iter().map(|p| (*p).to_string()).collect();
        let offset = pieces.len();

        if let Some(tail) = self.lose_tail {
            match syllables.first_mut() {
                Some(next) if next != "oe" && starts_with_core(next) => {
                    next.insert_str(0, tail);
                }
                _ => {
                    if let Some(last) = pieces.last_mut() {
                        last.push_str(tail);
                    }
                }
            }
        }

        pieces.append(&mut syllables);
        (pieces, offset)
    }
}

fn starts_with_core(syllable: &str) -> bool {
    ATTACHABLE_CORES.iter().any(|core| syllable.starts_with(core))
}

const PREFIXES: &[(&str, Prefix)] = &[
    ("tsuk", Prefix::new(&["tsu"], Some("k"))),
    ("ketsuk", Prefix::new(&["ke", "tsu"], Some("k"))),
    ("pe", Prefix::new(&["pe"], None).lenited()),
    ("me", Prefix::new(&["me"], None).lenited()),
    ("pxe", Prefix::new(&["pxe"], None).lenited()),
    ("ay", Prefix::new(&["a"], Some("y")).lenited()),
    ("pay", Prefix::new(&["pa"], Some("y")).lenited()),
    ("fay", Prefix::new(&["fa"], Some("y")).lenited()),
    ("tsay", Prefix::new(&["tsa"], Some("y")).lenited()),
];

/// Applies a single prefix by name. Unknown names become one opaque syllable.
#[must_use]
pub fn apply_prefix(name: &str, syllables: Vec<String>) -> (Vec<String>, usize) {
    match Prefix::find(name) {
        Some(prefix) => prefix.apply(syllables),
        None => {
            let mut result = Vec::with_capacity(syllables.len() + 1);
            result.push(name.to_string());
            result.extend(syllables);
            (result, 1)
        }
    }
}

/// Applies prefixes listed outermost first, so the last one is attached first.
///
/// Returns the new syllables and the total number of syllables added in front.
#[must_use]
pub fn apply_prefixes<S: AsRef<str>>(syllables: Vec<String>, names: &[S]) -> (Vec<String>, usize) {
    names
        .iter()
        .rev()
        .fold((syllables, 0), |(current, total), name| {
            let (next, offset) = apply_prefix(name.as_ref(), current);
            (next, total + offset)
        })
}
