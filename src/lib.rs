//! litxap - Stress and syllable annotation for Na'vi text
//!
//! This crate re-exports all layers of litxap for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: litxap_runtime   - Annotator config, dictionary files, REPL, CLI
//! Layer 2: litxap_annotate  - Line tokenizing, stress selection, light verbs, formatters
//! Layer 1: litxap_lexicon   - Entries, word alignment, dictionaries
//! Layer 0: litxap_phonology - Syllables, lenition, affixes, numerals
//! ```

pub use litxap_annotate as annotate;
pub use litxap_lexicon as lexicon;
pub use litxap_phonology as phonology;
pub use litxap_runtime as runtime;
