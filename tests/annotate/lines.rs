//! Integration tests for annotating lines

use litxap_annotate::{PartStress, parse_line, run_line};
use litxap_lexicon::{MapDictionary, MultiDictionary, NumberDictionary};

fn dictionary() -> MultiDictionary {
    let words = MapDictionary::from_entries([
        ("kaltxì", "kal.*txì"),
        ("ma", "ma"),
        ("fmetokyu", "fme.tok: -yu"),
        ("po", "po"),
        ("uvan", "u.*van"),
        ("ke", "ke"),
        ("soli", "s··i: <ol>"),
        ("uvan soli", "u.*van si: <ol>"),
        ("ikranhu", "ik.ran: -hu"),
    ])
    .unwrap();

    MultiDictionary::new().with(words).with(NumberDictionary::new())
}

#[test]
fn tokenizes_words_and_separators() {
    let line = parse_line("Kaltxì, ma fmetokyu!");
    let raw: Vec<&str> = line.iter().map(|p| p.raw.as_str()).collect();
    let words: Vec<bool> = line.iter().map(|p| p.is_word).collect();

    assert_eq!(raw, ["Kaltxì", ", ", "ma", " ", "fmetokyu", "!"]);
    assert_eq!(words, [true, false, true, false, true, false]);
}

#[test]
fn curly_apostrophes_are_straightened() {
    let line = parse_line("fya’o");
    assert_eq!(line.len(), 1);
    assert_eq!(line[0].raw, "fya'o");
}

#[test]
fn runs_words_through_the_dictionary() {
    let line = run_line("Kaltxì, ma tsmukan!", &dictionary()).unwrap();

    assert_eq!(line[0].matches[0].syllables, ["Kal", "txì"]);
    assert_eq!(line[0].select(None).1, PartStress::Stressed(1));
    assert_eq!(line[2].select(None).1, PartStress::Stressed(0));
    assert_eq!(line[4].select(None).1, PartStress::NoMatches);
    assert_eq!(line[5].select(None).1, PartStress::NotWord);
}

#[test]
fn numerals_are_recognized() {
    let line = run_line("mrrvomrr", &dictionary()).unwrap();
    assert_eq!(line[0].matches[0].syllables, ["mrr", "vo", "mrr"]);
    assert_eq!(line[0].matches[0].stress, Some(2));
}

#[test]
fn negated_light_verb() {
    let dictionary = dictionary();
    let line = run_line("Po uvan ke soli ikranhu.", &dictionary).unwrap();
    let line = line.unstress_light_verbs(&dictionary).unwrap();

    assert_eq!(line[2].select(None).1, PartStress::Unstressed);
    assert!(line[4].matches[0].stressed_word);
    assert_eq!(line[6].select(None).1, PartStress::Unstressed);
    assert_eq!(line[8].select(None).1, PartStress::Stressed(0));
}
