//! The puzzle engine
//!
//! Obfuscates three words, enumerates every way the pooled letters can go
//! back into the blanks, keeps the reconstructions that are all real words,
//! and validates guesses against that solution space.
//!
//! The engine performs no I/O: callers pull display state from a [`Session`]
//! and push guesses into it.

mod error;
pub mod obfuscator;
pub mod permutation;
pub mod resolver;
pub mod session;
mod shape;

pub use error::SetupError;
pub use obfuscator::{Obfuscation, RemovedChar, obfuscate};
pub use permutation::{Permutations, permutations};
pub use resolver::{Candidate, SolutionSpace, resolve};
pub use session::{Completion, GuessOutcome, RoundStatus, RoundView, Session, WordState};
pub use shape::{CHARS_TO_REMOVE, MAX_POOLED, NO_OF_WORDS, PuzzleShape};
