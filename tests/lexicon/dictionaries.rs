//! Integration tests for dictionaries and how they chain

use litxap_lexicon::{
    CustomWords, Dictionary, Entry, LookupError, MapDictionary, MultiDictionary, NumberDictionary,
};

struct Offline;

impl Dictionary for Offline {
    fn lookup(&self, _word: &str) -> Result<Vec<Entry>, LookupError> {
        Err(LookupError::failure("offline"))
    }
}

fn words() -> MapDictionary {
    MapDictionary::from_entries([
        ("kaltxì", "kal.*txì: : hello"),
        ("kameie", "k·a.m·e: <ei>: see"),
        ("kameie", "k··ä: <am,ei>: go"),
    ])
    .unwrap()
}

// =============================================================================
// Map Dictionary
// =============================================================================

#[test]
fn map_lookup_is_case_insensitive() {
    let words = words();
    assert_eq!(words.lookup("KALTXÌ").unwrap()[0].word, "kaltxì");
    assert_eq!(words.lookup("kameie").unwrap().len(), 2);
    assert!(words.lookup("skxawng").unwrap_err().is_not_found());
}

#[test]
fn map_extend_appends_senses() {
    let mut words = words();
    words.extend(&MapDictionary::from_entries([("kameie", "ka.me.i.e")]).unwrap());

    assert_eq!(words.len(), 2);
    assert_eq!(words.sense_count(), 4);
    assert_eq!(words.lookup("kameie").unwrap()[2].to_string(), "ka.me.i.e");
}

// =============================================================================
// Chained Dictionaries
// =============================================================================

#[test]
fn chain_merges_every_source() {
    let chain = MultiDictionary::new()
        .with(words())
        .with(CustomWords::new(&["kal-*txì"]))
        .with(NumberDictionary::new());

    let entries = chain.lookup("kaltxì").unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].translation.as_deref(), Some("Custom Name"));

    let numbers = chain.lookup("mrrvomrr").unwrap();
    assert_eq!(numbers[0].to_string(), "mrr.vo.*mrr: : Number °55 (45)");
    assert!(chain.lookup("skxawng").unwrap_err().is_not_found());
}

#[test]
fn chain_stops_on_failure() {
    let chain = MultiDictionary::new().with(words()).with(Offline);
    assert!(matches!(chain.lookup("kaltxì"), Err(LookupError::Failure(_))));
}
