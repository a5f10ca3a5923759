//! Integration tests for Layer 3: Runtime
//!
//! Tests dictionary files, the annotator and the REPL together.

mod files;
mod repl;
