//! Syllables, affixes and numerals for Na'vi words.
//!
//! Everything in this crate works on plain lowercase syllable strings and
//! knows nothing about dictionaries.
//!
//! # Architecture
//!
//! ```text
//! root template "t·ì.*r·an"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ INFIXES         │  → ["tì", "ran"] + <us> → ["tu", "sì", "ran"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SUFFIXES        │  → -ti → ["tu", "sì", "ran", "ti"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PREFIXES        │  → ay- (lenition, lost y) → ["ay", "tu", ...]
//! └─────────────────┘
//! ```
//!
//! The splitter backs the infix step, which needs to syllabify a root
//! after something has been inserted into it.
//!
//! # Modules
//!
//! - [`syllables`] - Back-to-front syllable splitting
//! - [`lenition`] - Initial consonant lenition
//! - [`prefix`] - Prefix application with lenition and lost tails
//! - [`suffix`] - Suffix application, including *si* verbs
//! - [`infix`] - Infix slots in verb roots
//! - [`number`] - Octal numeral generation and parsing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod infix;
pub mod lenition;
pub mod number;
pub mod prefix;
pub mod suffix;
pub mod syllables;


pub use infix::{INFIX_MARKER, InfixPosition, apply_infixes, has_infix_slots};
pub use lenition::lenite;
pub use number::{Attributive, NumberPart, ParseNumberResult, parse_number_part};
pub use prefix::{Prefix, apply_prefix, apply_prefixes};
pub use suffix::{SiPlacement, Suffix, apply_suffixes, apply_suffixes_with_stress};
pub use syllables::{Syllable, Syllables, coda_of, split, split_strings};
