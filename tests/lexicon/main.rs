//! Integration tests for Layer 1: Lexicon
//!
//! Tests entry notation, word alignment and the dictionaries.

mod alignment;
mod dictionaries;
mod entries;
