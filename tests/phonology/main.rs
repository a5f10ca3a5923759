//! Integration tests for Layer 0: Phonology
//!
//! Tests syllable splitting, affix application and numerals through the
//! public API.

mod morphology;
mod numbers;
mod syllables;
