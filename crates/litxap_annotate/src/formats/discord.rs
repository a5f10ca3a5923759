use crate::format::LineFormatter;
use crate::line::LinePart;
use crate::stress::PartStress;

/// Discord markdown: underlined stress, with uncertain words starred and
/// labelled.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscordMarkdown;

impl LineFormatter for DiscordMarkdown {
    fn line_part_tags(&self, _part: &LinePart, stress: PartStress) -> (&str, &str) {
        match stress {
            PartStress::NoMatches => ("\\*", "(NO MATCHES)"),
            PartStress::Ambiguous => ("\\*", "(AMBIGUOUS)"),
            _ => ("", ""),
        }
    }

    fn stressed_syllable_tags(&self) -> (&str, &str) {
        ("__", "__")
    }
}
