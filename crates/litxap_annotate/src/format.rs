//! Rendering an annotated line as marked-up text.

use std::collections::HashMap;

use crate::line::{Line, LinePart};
use crate::stress::PartStress;

/// Supplies the markup a [`Line`] is rendered with.
pub trait LineFormatter {
    /// Returns the text written before and after a part.
    fn line_part_tags(&self, part: &LinePart, stress: PartStress) -> (&str, &str);

    /// Returns the text written around the stressed syllable.
    fn stressed_syllable_tags(&self) -> (&str, &str);
}

impl Line {
    /// Renders the line, marking the stressed syllable of every word.
    ///
    /// `selections` maps part indices to match selections, see
    /// [`LinePart::select`]. Single-syllable words are written without a
    /// stress mark unless they carry emphatic stress.
    #[must_use]
    pub fn format(&self, formatter: &dyn LineFormatter, selections: &HashMap<usize, usize>) -> String {
        let mut out = String::with_capacity(self.iter().map(|p| p.raw.len() + 8).sum());

        for (i, part) in self.iter().enumerate() {
            let (selected, stress) = part.select(selections.get(&i).copied());
            let (open, close) = formatter.line_part_tags(part, stress);
            out.push_str(open);

            match (selected, stress) {
                (Some(m), PartStress::Stressed(index)) if m.syllables.len() > 1 || m.stressed_word => {
                    let (stress_open, stress_close) = formatter.stressed_syllable_tags();
                    for (j, syllable) in m.syllables.iter().enumerate() {
                        if j == index {
                            out.push_str(stress_open);
                            out.push_str(syllable);
                            out.push_str(stress_close);
                        } else {
                            out.push_str(syllable);
                        }
                    }
                }
                _ => out.push_str(&part.raw),
            }

            out.push_str(close);
        }

        out
    }
}
