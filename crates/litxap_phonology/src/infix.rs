//! Infix insertion.
//!
//! Verb roots mark their two infix positions with `·` inside the template
//! syllables, e.g. `t·ì.r·an` or `k··ä`. The first marker takes the
//! pre-first position infixes followed by the first position ones, the
//! second marker takes the second position infixes.

use tracing::debug;

use crate::syllables::split_strings;

/// The infix position marker used inside root templates.
pub const INFIX_MARKER: char = '·';

const PRE_FIRST: &[&str] = &["äp", "eyk", "äpeyk"];
const SECOND: &[&str] = &["ei", "äng", "eiy", "uy", "ats"];
const FIRST: &[&str] = &[
    "am", "ìm", "ìy", "ay", "ol", "er", "ìyev", "iyev", "ìlm", "ìly", "alm", "aly", "arm", "ary",
    "ìrm", "ìry", "us", "awn", "ìsy", "ìmv",
];

/// The slot an infix is inserted into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InfixPosition {
    /// Before the first position, at the first marker.
    PreFirst,
    /// The first marker.
    First,
    /// The second marker.
    Second,
}

impl InfixPosition {
    /// Returns the slot of a named infix. Unknown names go in the first position.
    #[must_use]
    pub fn of(name: &str) -> Self {
        if PRE_FIRST.contains(&name) {
            Self::PreFirst
        } else if SECOND.contains(&name) {
            Self::Second
        } else {
            if !FIRST.contains(&name) {
                debug!(infix = name, "unknown infix placed in first position");
            }
            Self::First
        }
    }
}

/// Inserts infixes into a root template and strips the markers.
///
/// Each template syllable that received an infix is split again, so one
/// template syllable can become several. `stress` is the index of the
/// stressed template syllable; the returned index points at the last
/// syllable produced from it.
#[must_use]
pub fn apply_infixes<T: AsRef<str>, S: AsRef<str>>(
    template: &[T],
    infixes: &[S],
    stress: usize,
) -> (Vec<String>, usize) {
    let mut first = String::new();
    let mut second = String::new();
    for position in [InfixPosition::PreFirst, InfixPosition::First] {
        for name in infixes.iter().map(AsRef::as_ref) {
            if InfixPosition::of(name) == position {
                first.push_str(name);
            }
        }
    }
    for name in infixes.iter().map(AsRef::as_ref) {
        if InfixPosition::of(name) == InfixPosition::Second {
            second.push_str(name);
        }
    }

    let markers = template
        .iter()
        .map(|s| s.as_ref().matches(INFIX_MARKER).count())
        .sum::<usize>();
    if markers == 0 && !infixes.is_empty() {
        debug!(infixes = infixes.len(), "root has no infix slots, infixes ignored");
    }

    let mut seen = 0;
    let mut result = Vec::with_capacity(template.len() + 2);
    let mut new_stress = 0;

    for (i, syllable) in template.iter().enumerate() {
        let syllable = syllable.as_ref();
        let mut filled = String::with_capacity(syllable.len() + first.len() + second.len());
        let mut modified = false;

        for ch in syllable.chars() {
            if ch != INFIX_MARKER {
                filled.push(ch);
                continue;
            }

            let infix = match seen {
                0 => first.as_str(),
                1 => second.as_str(),
                _ => "",
            };
            seen += 1;
            if !infix.is_empty() {
                filled.push_str(infix);
                modified = true;
            }
        }

        let group = if modified {
            split_strings(&filled)
                .filter(|parts| !parts.is_empty())
                .unwrap_or_else(|| vec![filled])
        } else {
            vec![filled]
        };

        if i == stress {
            new_stress = result.len() + group.len() - 1;
        }
        result.extend(group);
    }

    (result, new_stress)
}

/// Returns true if the template carries infix markers.
#[must_use]
pub fn has_infix_slots<T: AsRef<str>>(template: &[T]) -> bool {
    template
        .iter()
        .any(|s| s.as_ref().contains(INFIX_MARKER))
}
