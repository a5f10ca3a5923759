//! Destressing light verbs.
//!
//! In a light-verb construction like *uvan si* ("play"), the helper verb
//! *si* loses its stress. If the negator *ke* sits between the two words
//! the stem loses its stress as well and *ke* is stressed instead:
//!
//! ```text
//! po uvan soli       → po uvan soli        (soli unstressed)
//! po uvan ke soli    → po uvan KE soli     (uvan and soli unstressed)
//! po uvan rä'ä soli  → po uvan rä'ä soli   (soli unstressed)
//! ```

use std::borrow::Cow;

use litxap_lexicon::Dictionary;
use tracing::debug;

use crate::error::{Error, Result};
use crate::line::{Line, LinePart};

const MARKER: &str = "si";
const NEGATOR: &str = "ke";
const PROHIBITIVE: &str = "rä'ä";

impl LinePart {
    fn is_light_verb_marker(&self) -> bool {
        self.is_word && self.matches.iter().any(|m| m.entry.word == MARKER)
    }
}

impl Line {
    /// Returns the index of the closest word before `index`, if only
    /// whitespace separates the two.
    fn preceding_word(&self, index: usize) -> Option<usize> {
        for i in (0..index).rev() {
            let part = &self[i];
            if part.is_word {
                return Some(i);
            }
            if !part.raw.chars().all(char::is_whitespace) {
                return None;
            }
        }
        None
    }

    /// Unstresses the helper verb of every light-verb construction.
    ///
    /// A construction is a word, optionally followed by *ke* or *rä'ä*, then
    /// a form of *si*, where the dictionary has a multi-word entry ending in
    /// *si* for the word and the *si* form together. The line is only
    /// copied if something changes.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the dictionary fails with anything but
    /// `NotFound`.
    pub fn unstress_light_verbs<D: Dictionary + ?Sized>(&self, dictionary: &D) -> Result<Cow<'_, Self>> {
        let mut line = Cow::Borrowed(self);

        for marker in 0..self.len() {
            if !self[marker].is_light_verb_marker() {
                continue;
            }
            let Some(mut stem) = self.preceding_word(marker) else {
                continue;
            };

            let mut negator = None;
            let particle = self[stem].lookup_key();
            if particle == NEGATOR || particle == PROHIBITIVE {
                if particle == NEGATOR {
                    negator = Some(stem);
                }
                let Some(before) = self.preceding_word(stem) else {
                    continue;
                };
                stem = before;
            }

            let key = format!("{} {}", self[stem].lookup_key(), self[marker].lookup_key());
            let entries = match dictionary.lookup(&key) {
                Ok(entries) => entries,
                Err(err) if err.is_not_found() => continue,
                Err(err) => return Err(Error::lookup(key, err)),
            };
            let is_light_verb = entries.iter().any(|e| {
                e.word_count() >= 2 && e.word.split_whitespace().next_back() == Some(MARKER)
            });
            if !is_light_verb {
                continue;
            }

            debug!(verb = %key, negated = negator.is_some(), "unstressing light verb");
            let parts = line.to_mut().parts_mut();
            for m in &mut parts[marker].matches {
                m.stress = None;
            }
            if let Some(negator) = negator {
                for m in &mut parts[stem].matches {
                    m.stress = None;
                }
                for m in &mut parts[negator].matches {
                    m.stressed_word = true;
                }
            }
        }

        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use litxap_lexicon::Entry;

    use super::*;
    use crate::line::LinePartMatch;
    use crate::testdata::{BrokenDictionary, dummy_dictionary, matched};

    fn entry(key: &str) -> Entry {
        dummy_dictionary().lookup(key).unwrap().remove(0)
    }

    fn word(raw: &str, syllables: &[&str], stress: Option<usize>, key: &str) -> LinePart {
        LinePart::word(raw).with_match(matched(syllables, stress, entry(key)))
    }

    fn po_uvan_soli(particle: Option<LinePart>) -> Line {
        let mut parts = vec![
            word("Po", &["Po"], Some(0), "po"),
            LinePart::separator(" "),
            word("uvan", &["u", "van"], Some(1), "uvan"),
            LinePart::separator(" "),
        ];
        if let Some(particle) = particle {
            parts.push(particle);
            parts.push(LinePart::separator(" "));
        }
        parts.extend([
            word("soli", &["so", "li"], Some(1), "soli"),
            LinePart::separator(" "),
            word("ikranhu", &["ik", "ran", "hu"], Some(0), "ikranhu"),
            LinePart::separator("."),
        ]);
        Line::new(parts)
    }

    fn stresses(line: &Line) -> Vec<Option<usize>> {
        line.iter()
            .filter(|p| p.is_word)
            .map(|p| p.matches[0].stress)
            .collect()
    }

    fn flagged(line: &Line) -> Vec<bool> {
        line.iter()
            .filter(|p| p.is_word)
            .map(|p| p.matches[0].stressed_word)
            .collect()
    }

    #[test]
    fn test_unstresses_si() {
        let line = po_uvan_soli(None);
        let result = line.unstress_light_verbs(&dummy_dictionary()).unwrap();

        assert!(matches!(result, Cow::Owned(_)));
        assert_eq!(stresses(&result), [Some(0), Some(1), None, Some(0)]);
        assert_eq!(flagged(&result), [false; 4]);
        assert_eq!(stresses(&line), [Some(0), Some(1), Some(1), Some(0)]);
    }

    #[test]
    fn test_negated() {
        let line = po_uvan_soli(Some(word("ke", &["ke"], Some(0), "ke")));
        let result = line.unstress_light_verbs(&dummy_dictionary()).unwrap();

        assert_eq!(stresses(&result), [Some(0), None, Some(0), None, Some(0)]);
        assert_eq!(flagged(&result), [false, false, true, false, false]);
    }

    #[test]
    fn test_prohibitive_keeps_stem() {
        let line = po_uvan_soli(Some(word("rä'ä", &["rä'ä"], Some(1), "rä'ä")));
        let result = line.unstress_light_verbs(&dummy_dictionary()).unwrap();

        assert_eq!(stresses(&result), [Some(0), Some(1), Some(1), None, Some(0)]);
        assert_eq!(flagged(&result), [false; 5]);
    }

    #[test]
    fn test_sub_clause_is_unchanged() {
        let line = Line::new(vec![
            word("Uvan", &["U", "van"], Some(1), "uvan"),
            LinePart::separator(" "),
            word("a", &["a"], Some(0), "a"),
            LinePart::separator(" "),
            word("po", &["po"], Some(0), "po"),
            LinePart::separator(" "),
            word("soli", &["so", "li"], Some(1), "soli"),
            LinePart::separator(" "),
            word("ikranhu", &["ik", "ran", "hu"], Some(0), "ikranhu"),
            LinePart::separator("."),
        ]);
        let result = line.unstress_light_verbs(&dummy_dictionary()).unwrap();

        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(*result, line);
    }

    #[test]
    fn test_sentence_boundary_is_unchanged() {
        let line = Line::new(vec![
            word("Uvan", &["U", "van"], Some(1), "uvan"),
            LinePart::separator(", "),
            word("soli", &["so", "li"], Some(1), "soli"),
            LinePart::separator(" "),
            word("po", &["po"], Some(0), "po"),
            LinePart::separator("."),
        ]);
        let result = line.unstress_light_verbs(&dummy_dictionary()).unwrap();

        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_no_word_before_negator() {
        let line = Line::new(vec![
            word("Ke", &["Ke"], Some(1), "ke"),
            LinePart::separator(" "),
            word("soli", &["so", "li"], Some(1), "soli"),
            LinePart::separator("."),
        ]);
        let result = line.unstress_light_verbs(&dummy_dictionary()).unwrap();

        assert_eq!(*result, line);
    }

    #[test]
    fn test_marker_lookup_override() {
        let line = Line::new(vec![
            word("Uvan", &["U", "van"], Some(1), "uvan"),
            LinePart::separator(" "),
            LinePart::word("sòli")
                .with_lookup("soli")
                .with_match(matched(&["sò", "li"], Some(1), entry("soli"))),
            LinePart::separator("."),
        ]);
        let result = line.unstress_light_verbs(&dummy_dictionary()).unwrap();

        assert_eq!(stresses(&result), [Some(1), None]);
    }

    #[test]
    fn test_lookup_failure_propagates() {
        let line = po_uvan_soli(None);
        let err = line.unstress_light_verbs(&BrokenDictionary).unwrap_err();
        assert_eq!(err.word, "uvan soli");
    }

    #[test]
    fn test_works_on_run_lines() {
        let dictionary = dummy_dictionary();
        let line = crate::run_line("Po uvan ke soli ikranhu.", &dictionary).unwrap();
        let result = line.unstress_light_verbs(&dictionary).unwrap();

        let ke: &LinePartMatch = &result[4].matches[0];
        assert!(ke.stressed_word);
        assert_eq!(result[2].matches[0].stress, None);
        assert_eq!(result[6].matches[0].stress, None);
    }
}
