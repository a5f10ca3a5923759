//! Integration tests for numerals

use litxap_phonology::number::{self, MAX_NUMBER};
use litxap_phonology::{Attributive, ParseNumberResult};

#[test]
fn generates_cardinals_and_ordinals() {
    let join = |n, ordinal| number::generate(n, ordinal).map(|(s, stress)| (s.join("."), stress));

    assert_eq!(join(0o10, false), Some(("vol".to_string(), 0)));
    assert_eq!(join(0o11, true), Some(("vo.law.ve".to_string(), 1)));
    assert_eq!(join(0o100, true), Some(("za.ve".to_string(), 0)));
    assert_eq!(join(0, false), None);
    assert_eq!(join(MAX_NUMBER + 1, false), None);
}

#[test]
fn parses_attributive_forms() {
    assert_eq!(
        number::parse("'awa"),
        Some(ParseNumberResult {
            value: 1,
            ordinal: false,
            attributive: Attributive::Suffix,
        })
    );
    assert_eq!(number::parse("fmetok"), None);
}

#[test]
fn generated_numerals_parse_back() {
    for value in [1, 0o7, 0o10, 0o55, 0o100, 0o777, 0o3000, MAX_NUMBER] {
        for ordinal in [false, true] {
            let (syllables, _) = number::generate(value, ordinal).unwrap();
            let parsed = number::parse(&syllables.concat()).unwrap();
            assert_eq!(parsed.value, value, "{}", syllables.concat());
            assert_eq!(parsed.ordinal, ordinal, "{}", syllables.concat());
        }
    }
}
