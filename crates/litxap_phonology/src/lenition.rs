//! Initial consonant lenition.

use std::borrow::Cow;

/// Lenition pairs, longest source first.
const LENITIONS: &[(&str, &str)] = &[
    ("ts", "s"),
    ("kx", "k"),
    ("px", "p"),
    ("tx", "t"),
    ("k", "h"),
    ("p", "f"),
    ("t", "s"),
    ("'", ""),
];

/// Returns the lenited form of an initial segment, if it has one.
#[must_use]
pub fn lenited_onset(onset: &str) -> Option<&'static str> {
    LENITIONS
        .iter()
        .find(|(from, _)| *from == onset)
        .map(|(_, to)| *to)
}

/// Lenites the start of a syllable or word.
///
/// An apostrophe in front of a syllabic `rr` or `ll` is kept. Anything
/// without a lenited form is returned unchanged.
#[must_use]
pub fn lenite(syllable: &str) -> Cow<'_, str> {
    for (from, to) in LENITIONS {
        if let Some(rest) = syllable.strip_prefix(from) {
            if *from == "'" && (rest.starts_with("rr") || rest.starts_with("ll")) {
                break;
            }
            return Cow::Owned(format!("{to}{rest}"));
        }
    }

    Cow::Borrowed(syllable)
}
