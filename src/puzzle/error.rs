//! Round setup errors

use std::fmt;

/// Reasons a round cannot be constructed
///
/// All of these abort round construction before any guess is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    EmptyDictionary,
    EmptyPool,
    /// Every pool word is too short to lose the requested number of letters
    NoEligibleWords { min_len: usize },
    InvalidShape { word_count: usize, chars_per_word: usize },
    WordCount { expected: usize, actual: usize },
    PositionCount { expected: usize, actual: usize },
    PositionOutOfRange { slot: usize, position: usize, len: usize },
    DuplicatePosition { slot: usize, position: usize },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDictionary => write!(f, "Dictionary is empty"),
            Self::EmptyPool => write!(f, "No words to choose from"),
            Self::NoEligibleWords { min_len } => {
                write!(f, "No candidate word has at least {min_len} letters")
            }
            Self::InvalidShape {
                word_count,
                chars_per_word,
            } => write!(
                f,
                "Cannot build a puzzle of {word_count} words with {chars_per_word} letters removed from each"
            ),
            Self::WordCount { expected, actual } => {
                write!(f, "Expected {expected} puzzle words, got {actual}")
            }
            Self::PositionCount { expected, actual } => {
                write!(f, "Expected {expected} removed positions, got {actual}")
            }
            Self::PositionOutOfRange {
                slot,
                position,
                len,
            } => write!(
                f,
                "Position {position} is outside word {slot} ({len} letters)"
            ),
            Self::DuplicatePosition { slot, position } => {
                write!(f, "Position {position} removed twice from word {slot}")
            }
        }
    }
}

impl std::error::Error for SetupError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            SetupError::NoEligibleWords { min_len: 3 }.to_string(),
            "No candidate word has at least 3 letters"
        );
        assert_eq!(
            SetupError::DuplicatePosition {
                slot: 1,
                position: 2
            }
            .to_string(),
            "Position 2 removed twice from word 1"
        );
    }
}
