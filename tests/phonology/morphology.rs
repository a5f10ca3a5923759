//! Integration tests for lenition and affixes

use litxap_phonology::{apply_infixes, apply_prefixes, apply_suffixes, has_infix_slots, lenite};

fn syllables(s: &str) -> Vec<String> {
    s.split('.').map(String::from).collect()
}

// =============================================================================
// Lenition
// =============================================================================

#[test]
fn lenition_softens_the_onset() {
    assert_eq!(lenite("tskxe"), "skxe");
    assert_eq!(lenite("kem"), "hem");
    assert_eq!(lenite("'eylan"), "eylan");
    assert_eq!(lenite("fmetok"), "fmetok");
}

// =============================================================================
// Prefixes
// =============================================================================

#[test]
fn lenited_plural() {
    let (result, offset) = apply_prefixes(syllables("tskxe"), &["ay"]);
    assert_eq!(result.join("."), "ay.skxe");
    assert_eq!(offset, 1);
}

#[test]
fn stacked_prefixes() {
    let (result, offset) = apply_prefixes(syllables("tì.fme.tok"), &["pe", "pxe", "fne"]);
    assert_eq!(result.join("."), "pe.pe.fne.tì.fme.tok");
    assert_eq!(offset, 3);
}

// =============================================================================
// Suffixes
// =============================================================================

#[test]
fn case_endings() {
    assert_eq!(apply_suffixes(syllables("fko"), &["l"], false).join("."), "fkol");
    assert_eq!(apply_suffixes(syllables("u.van"), &["ä"], false).join("."), "u.va.nä");
    assert_eq!(apply_suffixes(syllables("o.e"), &["ti"], false).join("."), "oe.ti");
}

#[test]
fn suffixes_around_si() {
    assert_eq!(
        apply_suffixes(syllables("u.van.si"), &["teri", "yu"], true).join("."),
        "u.van.te.ri.si.yu"
    );
    assert_eq!(
        apply_suffixes(syllables("u.van.si"), &["tswo"], true).join("."),
        "u.van.tswo"
    );
}

// =============================================================================
// Infixes
// =============================================================================

#[test]
fn infixes_move_stress() {
    assert!(has_infix_slots(&["t·a", "r·on"]));

    let (result, stress) = apply_infixes(&["t·a", "r·on"], &["us"], 1);
    assert_eq!(result.join("."), "tu.sa.ron");
    assert_eq!(stress, 2);
}

#[test]
fn infixes_then_suffixes() {
    let (root, _) = apply_infixes(&["k·a", "m·e"], &["ei"], 0);
    assert_eq!(root.join("."), "ka.me.i.e");
    assert_eq!(apply_suffixes(root, &["tswo"], false).join("."), "ka.me.i.e.tswo");
}
