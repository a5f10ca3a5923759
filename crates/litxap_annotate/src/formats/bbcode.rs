use crate::format::LineFormatter;
use crate::line::LinePart;
use crate::stress::PartStress;

/// Forum markup: colored words and underlined stress.
#[derive(Clone, Copy, Debug, Default)]
pub struct BbCode;

impl LineFormatter for BbCode {
    fn line_part_tags(&self, _part: &LinePart, stress: PartStress) -> (&str, &str) {
        match stress {
            PartStress::Ambiguous => ("[color=yellow]", "[/color]"),
            PartStress::NoMatches => ("[color=red]", "[/color]"),
            PartStress::AnyStress => ("[color=skyblue]", "[/color]"),
            PartStress::NotWord | PartStress::Unstressed | PartStress::Stressed(_) => ("", ""),
        }
    }

    fn stressed_syllable_tags(&self) -> (&str, &str) {
        ("[u]", "[/u]")
    }
}
