//! Integration tests for Layer 2: Annotate
//!
//! Tests tokenizing, lookup, light verbs and formatting of whole lines.

mod formatting;
mod lines;
