use crate::format::LineFormatter;
use crate::line::LinePart;
use crate::stress::PartStress;

/// Compact HTML: a `<span>` around every word, with a two-letter class for
/// the special cases (`am` ambiguous, `nm` no matches, `as` any stress), and
/// `<u>` around the stressed syllable.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompactHtml;

impl LineFormatter for CompactHtml {
    fn line_part_tags(&self, _part: &LinePart, stress: PartStress) -> (&str, &str) {
        match stress {
            PartStress::NotWord => ("", ""),
            PartStress::Ambiguous => ("<span class=\"am\">", "</span>"),
            PartStress::NoMatches => ("<span class=\"nm\">", "</span>"),
            PartStress::AnyStress => ("<span class=\"as\">", "</span>"),
            PartStress::Unstressed | PartStress::Stressed(_) => ("<span>", "</span>"),
        }
    }

    fn stressed_syllable_tags(&self) -> (&str, &str) {
        ("<u>", "</u>")
    }
}
