//! Core domain types for the three-word puzzle
//!
//! Words, the blank marker, and the dictionary the engine checks every
//! reconstruction against. Nothing here knows about rounds or guesses.

mod dictionary;
mod word;

pub use dictionary::{Dictionary, WordSource};
pub use word::{BLANK, Word, WordError};
