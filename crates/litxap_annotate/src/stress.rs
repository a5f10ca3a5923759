//! Choosing which stress to show for a word with several matches.

use crate::line::{LinePart, LinePartMatch};

/// The stress reported for one part of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PartStress {
    /// Whitespace or punctuation.
    NotWord,
    /// A word no entry matched.
    NoMatches,
    /// A word whose matches disagree on stress.
    Ambiguous,
    /// A word the caller marked as free to stress any syllable.
    AnyStress,
    /// A word with no stress of its own.
    Unstressed,
    /// A word stressed on the given syllable.
    Stressed(usize),
}

impl PartStress {
    fn of(stress: Option<usize>) -> Self {
        stress.map_or(Self::Unstressed, Self::Stressed)
    }
}

impl LinePart {
    /// Picks the match and stress to display.
    ///
    /// A `selection` below the match count picks that match. A selection
    /// equal to the match count marks the word as [`PartStress::AnyStress`].
    /// Otherwise the matches must agree on the stressed syllable, or the
    /// word is [`PartStress::Ambiguous`]. The returned match is the one
    /// whose syllables should be shown.
    #[must_use]
    pub fn select(&self, selection: Option<usize>) -> (Option<&LinePartMatch>, PartStress) {
        if !self.is_word {
            return (None, PartStress::NotWord);
        }
        let Some(first) = self.matches.first() else {
            return (None, PartStress::NoMatches);
        };

        if let Some(index) = selection {
            if index == self.matches.len() {
                return (Some(first), PartStress::AnyStress);
            }
            if let Some(selected) = self.matches.get(index) {
                return (Some(selected), PartStress::of(selected.stress));
            }
        }

        if self.matches.iter().all(|m| m.stress == first.stress) {
            (Some(first), PartStress::of(first.stress))
        } else {
            (Some(first), PartStress::Ambiguous)
        }
    }
}
