//! Integration tests for dictionary files

use std::fs;
use std::path::PathBuf;

use litxap_lexicon::MapDictionary;
use litxap_runtime::{
    Annotator, AnnotatorConfig, ErrorKind, OutputFormat, load_dictionary, parse_dictionary_strict,
};

const WORDS: &str = "\
# Greetings
kaltxì = kal.*txì: : hello
ma = ma: : O (vocative)
fmetokyu = fme.tok: -yu: tester

# Verbs
kameie = k·a.m·e: <ei>: see
kameie = k··ä: <am,ei>: go
this line is not an entry
";

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("litxap_it_{name}"))
}

#[test]
fn several_files_merge_in_order() {
    let first = temp_path("words.txt");
    let second = temp_path("more.txt");
    fs::write(&first, WORDS).unwrap();
    fs::write(&second, "kameie = k·a.m·e: <ei>: understand\n").unwrap();

    let mut dictionary = MapDictionary::new();
    for path in [&first, &second] {
        dictionary.extend(&load_dictionary(path).unwrap());
    }
    assert_eq!(dictionary.len(), 4);
    assert_eq!(dictionary.sense_count(), 6);

    let _ = fs::remove_file(&first);
    let _ = fs::remove_file(&second);
}

#[test]
fn strict_parsing_names_the_bad_line() {
    let err = parse_dictionary_strict(WORDS).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DictionaryFormat { line: 9, .. }));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_dictionary(temp_path("missing.txt")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
}

#[test]
fn annotates_with_a_loaded_dictionary() {
    let path = temp_path("annotate.txt");
    fs::write(&path, WORDS).unwrap();
    let dictionary = load_dictionary(&path).unwrap();
    let _ = fs::remove_file(&path);

    let config = AnnotatorConfig::new()
        .with_format(OutputFormat::Html)
        .with_custom_words(["ney-*ti-ri"]);
    let annotator = Annotator::new(config, [dictionary]);

    assert_eq!(
        annotator.annotate("Kaltxì, Neytiri!").unwrap(),
        "<span>Kal<u>txì</u></span>, <span>Ney<u>ti</u>ri</span>!"
    );
}
