//! Syllable splitting.
//!
//! Words are split back to front. Each pass strips an optional coda, a
//! mandatory body, an optional onset and an optional pre-onset from the end
//! of the remaining text, and the result is reversed at the end.
//!
//! When no body can be found the leftover consonant is folded into the onset
//! of the syllable that was split off before it. This is how colloquial
//! clusters like the `tl` in *tlalim* or the `kw` in *mangkwan* are handled;
//! such clusters are reported through [`Syllables::irregulars`].

use std::fmt;
use std::ops::Deref;

use tracing::debug;

const PRE_ONSETS: &[&str] = &["f", "ts", "s"];
const ONSETS_AFTER_PRE_F: &[&str] = &[
    "k", "kx", "l", "m", "n", "ng", "p", "px", "t", "tx", "w", "y",
];
const ONSETS_AFTER_PRE_S: &[&str] = &[
    "h", "k", "kx", "l", "m", "n", "ng", "p", "px", "t", "tx", "w", "y",
];
const ONSETS: &[&str] = &[
    "'", "h", "k", "kx", "l", "m", "n", "ng", "p", "px", "r", "t", "ts", "tx", "s", "v", "w", "y",
    "z", "b", "d", "g",
];
const BODIES: &[&str] = &[
    "a", "ä", "e", "é", "i", "ì", "o", "õ", "u", "ù", "rr", "ll", "ay", "ey", "aw", "ew",
];
const CODAS: &[&str] = &[
    "'", "k", "kx", "l", "m", "n", "ng", "p", "px", "r", "t", "tx", "d", "b", "g",
];

/// One syllable, split into its phonotactic slots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Syllable {
    /// `f`, `ts` or `s` in front of the onset.
    pub pre_onset: String,
    /// The onset consonant.
    pub onset: String,
    /// Part of a cluster that had to be moved over from the previous syllable.
    pub irregular: String,
    /// Vowel, diphthong or syllabic consonant.
    pub body: String,
    /// The closing consonant.
    pub coda: String,
}

impl Syllable {
    /// Returns true if this syllable starts with a vowel or diphthong.
    #[must_use]
    pub fn is_open_start(&self) -> bool {
        self.pre_onset.is_empty() && self.onset.is_empty() && self.irregular.is_empty()
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.pre_onset, self.onset, self.irregular, self.body, self.coda
        )
    }
}

/// An ordered, non-empty run of syllables in reading order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Syllables(Vec<Syllable>);

impl Syllables {
    /// Returns the irregular clusters, written as pre-onset + onset + irregular.
    #[must_use]
    pub fn irregulars(&self) -> Vec<String> {
        self.0
            .iter()
            .filter(|s| !s.irregular.is_empty())
            .map(|s| format!("{}{}{}", s.pre_onset, s.onset, s.irregular))
            .collect()
    }

    /// Renders every syllable as a plain string.
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// Consumes the wrapper and returns the syllables.
    #[must_use]
    pub fn into_inner(self) -> Vec<Syllable> {
        self.0
    }
}

impl Deref for Syllables {
    type Target = [Syllable];

    fn deref(&self) -> &[Syllable] {
        &self.0
    }
}

impl fmt::Display for Syllables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, syllable) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{syllable}")?;
        }

        let irregulars = self.irregulars();
        if !irregulars.is_empty() {
            write!(f, " (irregulars: {})", irregulars.join(","))?;
        }

        Ok(())
    }
}

/// Returns the first table entry that `s` ends with.
fn match_suffix(s: &str, table: &[&'static str]) -> Option<&'static str> {
    table.iter().copied().find(|candidate| s.ends_with(candidate))
}

/// Returns the coda the splitter would take off the end of `s`.
///
/// A final `r` or `l` is not a coda when it is part of a syllabic `rr`/`ll`,
/// unless a third copy of the letter follows.
#[must_use]
pub fn coda_of(s: &str) -> Option<&'static str> {
    let coda = match_suffix(s, CODAS)?;
    let geminate = match coda {
        "r" => s.ends_with("rr") && !s.ends_with("rrr"),
        "l" => s.ends_with("ll") && !s.ends_with("lll"),
        _ => false,
    };

    if geminate { None } else { Some(coda) }
}

/// Splits a lowercase word into syllables.
///
/// Returns `None` if the word cannot be syllabified. An empty input yields
/// an empty result.
#[must_use]
pub fn split(word: &str) -> Option<Syllables> {
    let mut rest = word;
    let mut result: Vec<Syllable> = Vec::with_capacity(word.len() / 2 + 1);
    let mut repaired = false;

    while !rest.is_empty() {
        let mut current = Syllable::default();

        if let Some(coda) = coda_of(rest) {
            current.coda = coda.to_string();
            rest = &rest[..rest.len() - coda.len()];
        }

        let Some(body) = match_suffix(rest, BODIES) else {
            // Fold the stray consonant into the onset of the following syllable.
            let last = result.last_mut()?;
            if repaired || !last.pre_onset.is_empty() || current.coda.is_empty() {
                return None;
            }

            debug!(word, cluster = %format!("{}{}", current.coda, last.onset), "irregular cluster");
            last.irregular = std::mem::take(&mut last.onset);
            last.onset = current.coda;
            repaired = true;
            continue;
        };
        repaired = false;
        current.body = body.to_string();
        rest = &rest[..rest.len() - body.len()];

        if let Some(onset) = match_suffix(rest, ONSETS) {
            current.onset = onset.to_string();
            rest = &rest[..rest.len() - onset.len()];
        }

        if let Some(pre_onset) = match_suffix(rest, PRE_ONSETS) {
            let allowed = if pre_onset == "f" {
                ONSETS_AFTER_PRE_F
            } else {
                ONSETS_AFTER_PRE_S
            };
            if !allowed.contains(&current.onset.as_str()) {
                return None;
            }

            current.pre_onset = pre_onset.to_string();
            rest = &rest[..rest.len() - pre_onset.len()];
        }

        // rr and ll must have an onset, lenition or not.
        if (current.body == "rr" || current.body == "ll") && current.onset.is_empty() {
            return None;
        }

        result.push(current);
    }

    result.reverse();
    Some(Syllables(result))
}

/// Splits a word and returns the syllables as plain strings.
#[must_use]
pub fn split_strings(word: &str) -> Option<Vec<String>> {
    split(word).map(|s| s.to_strings())
}
