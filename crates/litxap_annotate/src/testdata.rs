//! Dictionaries and lines shared by the unit tests.

use litxap_lexicon::{Dictionary, Entry, LookupError, MapDictionary};

use crate::line::{Line, LinePart, LinePartMatch};

pub struct BrokenDictionary;

impl Dictionary for BrokenDictionary {
    fn lookup(&self, _word: &str) -> Result<Vec<Entry>, LookupError> {
        Err(LookupError::failure("500 something something"))
    }
}

pub fn dummy_dictionary() -> MapDictionary {
    MapDictionary::from_entries([
        ("kaltxì", "kal.*txì"),
        ("ma", "ma"),
        ("fmetokyu", "fme.tok: -yu"),
        ("ayhapxìtu", "ha.*pxì.tu: ay-"),
        ("soaiä", "so.*a.i.a: -ä"),
        ("ngeyä", "nga: -yä"),
        ("lu", "lu"),
        ("oeru", "o.e: -ru"),
        ("let'eylan", "let.*'ey.lan"),
        ("nìwotx", "nì.*wotx"),
        ("oel", "o.e: -l"),
        ("ngati", "nga: -ti"),
        ("kameie", "k·a.m·e: <ei>: see, see into, understand, know (spiritual sense)"),
        ("kameie", "k··ä: <am,ei>: go"),
        ("säkeynven", "sä.keyn.*ven"),
        ("vola", "vol: -a"),
        ("tsafneioanghu", "i.*o.ang: tsa-fne- -hu"),
        ("rä'ä", "rä.*'ä"),
        ("tsaheyl si", "tsa.heyl.*s··i"),
        ("'eylan", "'ey.lan"),
        ("tsaheyl", "tsa.heyl: no_stress"),
        ("soli", "s··i: <ol>"),
        ("po", "po"),
        ("ikranhu", "ik.ran: -hu"),
        ("ke", "ke"),
        ("a", "a"),
        ("uvan", "u.*van"),
        ("uvan soli", "u.*van si: <ol>"),
        ("po soli", "po"),
        ("po soli", "si: <ol>"),
    ])
    .unwrap()
}

pub fn matched(syllables: &[&str], stress: Option<usize>, entry: Entry) -> LinePartMatch {
    LinePartMatch::new(
        syllables.iter().map(ToString::to_string).collect(),
        stress,
        entry,
    )
}

fn m(syllables: &[&str], stress: usize, notation: &str) -> LinePartMatch {
    matched(syllables, Some(stress), Entry::parse(notation).unwrap())
}

pub fn line_oel_ngati_kameie() -> Line {
    Line::new(vec![
        LinePart::word("Oel").with_match(m(&["Oel"], 0, "o.e: -l")),
        LinePart::separator(" "),
        LinePart::word("ngati").with_match(m(&["nga", "ti"], 0, "nga: -ti")),
        LinePart::separator(" "),
        LinePart::word("kameie")
            .with_match(m(
                &["ka", "me", "i", "e"],
                0,
                "k·a.m·e: <ei>: see, see into, understand, know (spiritual sense)",
            ))
            .with_match(m(&["ka", "me", "i", "e"], 3, "k··ä: <am,ei>: go")),
        LinePart::separator("."),
    ])
}

pub fn line_fikem_ila_fyao() -> Line {
    Line::new(vec![
        LinePart::word("Fìkem")
            .with_match(m(&["Fì", "kem"], 1, "fì.*kem"))
            .with_match(m(&["Fì", "kem"], 1, "kem: fì-")),
        LinePart::separator(" "),
        LinePart::word("ìlä")
            .with_match(m(&["ì", "lä"], 0, "*ì.lä"))
            .with_match(m(&["ì", "lä"], 1, "ì.*lä")),
        LinePart::separator(" "),
        LinePart::word("fya'o").with_match(m(&["fya", "'o"], 0, "*fya.'o")),
        LinePart::separator("!"),
    ])
}

pub fn line_kaltxi_ma_fmetokyu() -> Line {
    Line::new(vec![
        LinePart::word("Kaltxì").with_match(m(&["Kal", "txì"], 1, "kal.*txì")),
        LinePart::separator(", "),
        LinePart::word("ma").with_match(m(&["ma"], 0, "ma")),
        LinePart::separator(" "),
        LinePart::word("fmetokyu").with_match(m(&["fme", "tok", "yu"], 0, "fme.tok: -yu")),
        LinePart::separator("!"),
    ])
}

pub fn line_vola_skeynven() -> Line {
    Line::new(vec![
        LinePart::word("Vola").with_match(m(&["Vo", "la"], 0, "vol: -a")),
        LinePart::separator(" "),
        LinePart::word("skeynven"),
        LinePart::separator("."),
    ])
}
