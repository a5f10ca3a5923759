//! REPL, CLI and dictionary files for litxap.
//!
//! This crate provides:
//! - [`Annotator`] - A configured dictionary chain that annotates and renders lines
//! - [`Repl`] - Interactive annotation loop
//! - Dictionary text files ([`loader`])
//!
//! # Modules
//!
//! - [`config`] - Output format and annotator options
//! - [`error`] - Runtime error type
//! - [`editor`] - Line editor abstraction over rustyline

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod annotator;
pub mod config;
pub mod editor;
pub mod error;
pub mod loader;
pub mod repl;

pub use annotator::Annotator;
pub use config::{AnnotatorConfig, OutputFormat};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use error::{Error, ErrorKind, Result};
pub use loader::{load_dictionary, parse_dictionary, parse_dictionary_strict};
pub use repl::{Reply, Repl};
