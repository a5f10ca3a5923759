//! Stress annotation for lines of Na'vi text.
//!
//! # Architecture
//!
//! ```text
//! "Po uvan soli ikranhu."
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ parse_line      │  → Po · uvan · soli · ikranhu · .
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Line::run       │  → dictionary lookup + run_word per word
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────────────────┐
//! │ Line::unstress_light_verbs  │  → soli unstressed
//! └─────────────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Line::format    │  → "Po u[u]van[/u] soli [u]ik[/u]ranhu."
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`error`] - Lookup failures while annotating
//! - [`line`] - Line model, tokenizer and lookup
//! - [`stress`] - Picking a stress for words with several matches
//! - [`light_verb`] - Destressing *si* in light-verb constructions
//! - [`format`] - The formatter contract and line rendering
//! - [`formats`] - BBCode, HTML and Discord formatters

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod format;
pub mod formats;
pub mod light_verb;
pub mod line;
pub mod stress;

#[cfg(test)]
mod testdata;

pub use error::{Error, Result};
pub use format::LineFormatter;
pub use formats::{BbCode, CompactHtml, DiscordMarkdown};
pub use line::{Line, LinePart, LinePartMatch, parse_line, run_line};
pub use stress::PartStress;
