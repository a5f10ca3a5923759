//! Integration tests for rendering annotated lines

use std::collections::HashMap;

use litxap_annotate::{
    BbCode, CompactHtml, DiscordMarkdown, LineFormatter, LinePart, PartStress, run_line,
};
use litxap_lexicon::MapDictionary;

fn dictionary() -> MapDictionary {
    MapDictionary::from_entries([
        ("oel", "o.e: -l"),
        ("ngati", "nga: -ti"),
        ("kameie", "k·a.m·e: <ei>: see"),
        ("kameie", "k··ä: <am,ei>: go"),
    ])
    .unwrap()
}

/// Marks stress with brackets and ambiguity with question marks.
struct Plain;

impl LineFormatter for Plain {
    fn line_part_tags(&self, _part: &LinePart, stress: PartStress) -> (&str, &str) {
        match stress {
            PartStress::Ambiguous => ("?", "?"),
            _ => ("", ""),
        }
    }

    fn stressed_syllable_tags(&self) -> (&str, &str) {
        ("[", "]")
    }
}

#[test]
fn built_in_formatters() {
    let line = run_line("Oel ngati kameie.", &dictionary()).unwrap();
    let none = HashMap::new();

    assert_eq!(
        line.format(&BbCode, &none),
        "Oel [u]nga[/u]ti [color=yellow]kameie[/color]."
    );
    assert_eq!(
        line.format(&CompactHtml, &none),
        r#"<span>Oel</span> <span><u>nga</u>ti</span> <span class="am">kameie</span>."#
    );
    assert_eq!(
        line.format(&DiscordMarkdown, &none),
        "Oel __nga__ti \\*kameie(AMBIGUOUS)."
    );
}

#[test]
fn selections_resolve_ambiguity() {
    let line = run_line("Oel ngati kameie.", &dictionary()).unwrap();

    assert_eq!(line.format(&Plain, &HashMap::new()), "Oel [nga]ti ?kameie?.");
    assert_eq!(line.format(&Plain, &HashMap::from([(4, 0)])), "Oel [nga]ti [ka]meie.");
    assert_eq!(line.format(&Plain, &HashMap::from([(4, 1)])), "Oel [nga]ti kamei[e].");
}
