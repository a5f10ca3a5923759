//! Dictionary entries and how they match words in text.
//!
//! # Architecture
//!
//! ```text
//!   "fneUvanur"                 "u.*van: fne- -ur"
//!        │                              │
//!        │                              ▼
//!        │                   ┌─────────────────────┐
//!        │                   │ Entry               │ → fne.u.va.nur, stress 2
//!        │                   └─────────────────────┘
//!        │                              │
//!        ▼                              ▼
//! ┌──────────────────────────────────────────────────┐
//! │ run_word                                         │ → fne.U.va.nur, stress 2
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! Entries come from a [`Dictionary`]. [`MultiDictionary`] chains several,
//! [`MapDictionary`] holds a loaded word list, [`NumberDictionary`] answers
//! numerals and [`CustomWords`] answers names.
//!
//! # Modules
//!
//! - [`error`] - Lookup and notation errors
//! - [`entry`] - Entry model, notation and citation forms
//! - [`word`] - Aligning spellings with citation forms
//! - [`dictionary`] - The dictionary trait, chaining and in-memory tables
//! - [`number_dictionary`] - Numerals as a dictionary
//! - [`custom_words`] - Proper names as a dictionary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod custom_words;
pub mod dictionary;
pub mod entry;
pub mod error;
pub mod number_dictionary;
pub mod word;


pub use custom_words::CustomWords;
pub use dictionary::{Dictionary, MapDictionary, MultiDictionary};
pub use entry::{Entry, RootSyllable};
pub use error::{BoxedError, LookupError, NotationError};
pub use number_dictionary::NumberDictionary;
pub use word::run_word;
