//! Integration tests for entry notation

use litxap_lexicon::{Entry, NotationError};

#[test]
fn notation_round_trips() {
    for notation in [
        "kal.*txì: : hello",
        "t·ì.*r·an: tì- <us> -ìri: walk",
        "tsa.heyl: no_stress: (part of tsaheyl si)",
        "u.*van si: <ol>",
        "u.*van: -ti -ri",
        "lo.ran: pe- fne-",
        "u.*van: -ti <us>",
        "nor: : proper name",
    ] {
        let entry: Entry = notation.parse().unwrap();
        assert_eq!(entry.to_string(), notation);
    }
}

#[test]
fn citation_form_drops_markers() {
    let entry: Entry = "k·a.m·e: <ei>: see".parse().unwrap();
    assert_eq!(entry.word, "kame");
    assert!(entry.is_verb_root());
    assert_eq!(entry.stress, None);
}

#[test]
fn generated_syllables_follow_affixes() {
    let entry: Entry = "em.*k··ä: pe-pxe-tì- <us> -tsyìp-ìl".parse().unwrap();
    let (syllables, stress, offset) = entry.generate_syllables();

    assert_eq!(syllables.join("."), "pe.pe.sì.em.ku.sä.tsyì.pìl");
    assert_eq!(stress, 5);
    assert_eq!(offset, 3);
}

#[test]
fn empty_root_is_an_error() {
    assert_eq!(": -ti".parse::<Entry>(), Err(NotationError::EmptyRoot));
    assert!(Entry::parse("").is_none());
}
