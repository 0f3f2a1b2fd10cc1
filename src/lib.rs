//! Three Words
//!
//! A single-round word puzzle: three dictionary words each lose two letters,
//! the removed letters are pooled and shuffled, and the player rebuilds the
//! words one guess at a time.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use three_words::core::WordSource;
//! use three_words::puzzle::{GuessOutcome, PuzzleShape, Session};
//! use three_words::wordlists::{WORDS, loader::dictionary_from_slice};
//!
//! let dictionary = dictionary_from_slice(WORDS);
//! let pool = dictionary.words_of_length(5);
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! let mut session = Session::start(&dictionary, &pool, PuzzleShape::STANDARD, &mut rng).unwrap();
//! println!("{:?}", session.view());
//!
//! let first = session.obfuscation().puzzle_words()[0].clone();
//! assert!(matches!(session.submit_guess(first.text()), GuessOutcome::Accepted { .. }));
//! assert!(dictionary.contains(first.text()));
//! ```

// Core domain types
pub mod core;

// Puzzle engine
pub mod puzzle;

// Word lists
pub mod wordlists;

// Definition lookup
pub mod definitions;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
