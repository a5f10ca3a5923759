//! Integration tests for syllable splitting

use litxap_phonology::{split, split_strings};

// =============================================================================
// Splitting
// =============================================================================

#[test]
fn splits_regular_words() {
    assert_eq!(split_strings("fmetok").unwrap(), ["fme", "tok"]);
    assert_eq!(split_strings("tswayon").unwrap(), ["tswa", "yon"]);
    assert_eq!(
        split_strings("prrkxentrrkrr").unwrap(),
        ["prr", "kxen", "trr", "krr"]
    );
}

#[test]
fn split_rejoins_to_the_word() {
    for word in ["nga'prrnen", "meoauniaea", "tskxeti", "tlalim"] {
        let syllables = split_strings(word).unwrap();
        assert_eq!(syllables.concat(), word);
    }
}

#[test]
fn irregular_clusters_are_reported() {
    let tlalim = split("tlalim").unwrap();
    assert_eq!(tlalim.len(), 2);
    assert_eq!(tlalim.irregulars(), ["tl"]);
}

#[test]
fn impossible_words_do_not_split() {
    for word in ["ehanis", "keln", "ftspa", "svane"] {
        assert!(split(word).is_none(), "{word}");
    }
}

#[test]
fn empty_word_has_no_syllables() {
    assert!(split_strings("").unwrap().is_empty());
}
