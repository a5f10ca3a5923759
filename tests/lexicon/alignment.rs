//! Integration tests for aligning written words with entries

use litxap_lexicon::{Entry, run_word};

fn align(raw: &str, notation: &str) -> Option<(String, Option<usize>)> {
    let entry = Entry::parse(notation)?;
    run_word(raw, &entry).map(|(syllables, stress)| (syllables.join("."), stress))
}

#[test]
fn keeps_the_written_case() {
    assert_eq!(align("Fmetok", "fme.tok"), Some(("Fme.tok".into(), Some(0))));
    assert_eq!(
        align("BAZANGTSYÌP", "*pxa.zang: -tsyìp"),
        Some(("BA.ZANG.TSYÌP".into(), Some(0)))
    );
}

#[test]
fn follows_inflection() {
    assert_eq!(
        align("Tìtusìranìri", "t·ì.*r·an: tì- <us> -ìri"),
        Some(("Tì.tu.sì.ra.nì.ri".into(), Some(3)))
    );
    assert_eq!(align("ayskxe", "tskxe: ay-"), Some(("ay.skxe".into(), Some(1))));
}

#[test]
fn tolerates_dialect_spellings() {
    assert_eq!(align("sebor", "sä.*pxor"), Some(("se.bor".into(), Some(1))));
    assert_eq!(
        align("shulangchìp", "syu.lang: -tsyìp"),
        Some(("shu.lang.chìp".into(), Some(0)))
    );
}

#[test]
fn tolerates_elided_vowels() {
    assert_eq!(align("skeynven", "sä.keyn.*ven"), Some(("skeyn.ven".into(), Some(1))));
}

#[test]
fn joins_repeated_vowels() {
    assert_eq!(align("pxeylan", "'ey.lan: pxe-"), Some(("pxey.lan".into(), Some(0))));
    assert_eq!(align("pxeeylan", "'ey.lan: pxe-"), Some(("pxe.ey.lan".into(), Some(1))));
}

#[test]
fn splits_ng_before_a_spoken_vowel() {
    assert_eq!(
        align("pxoeNGAru", "pxo.*eng: -ru"),
        Some(("pxo.e.NGA.ru".into(), Some(2)))
    );
}

#[test]
fn initial_slot_keeps_the_stress() {
    assert_eq!(align("Erinan", "·i.*n·an: <er>"), Some(("E.ri.nan".into(), Some(1))));
    assert_eq!(align("TSUKinan", "·i.*n·an: tsuk-"), Some(("TSU.Ki.nan".into(), Some(1))));
}

#[test]
fn unstressed_entries_have_no_stress() {
    assert_eq!(align("Tsaheyl", "tsa.heyl: no_stress"), Some(("Tsa.heyl".into(), None)));
}

#[test]
fn split_verbs_keep_the_gap() {
    assert_eq!(
        align("nari seyki", "*na.ri.s··i: <eyk>"),
        Some(("na.ri. .sey.ki".into(), Some(0)))
    );
}

#[test]
fn rejects_other_words() {
    assert_eq!(align("fmetk", "fme.tok"), None);
    assert_eq!(align("fm etok", "fme.tok"), None);
    assert_eq!(align("", "fme.tok"), None);
}
