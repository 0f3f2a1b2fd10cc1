//! Puzzle word representation
//!
//! A Word is an immutable, uppercase sequence of letters. Positions are
//! character indices, so non-ASCII alphabets work the same way as English.

use std::fmt;

/// Sentinel written into an obfuscated word where a letter was removed
///
/// Never alphabetic, so it can never appear inside a valid [`Word`].
pub const BLANK: char = '•';

/// A dictionary word, normalized to uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::InvalidCharacter(c) => write!(f, "Word contains invalid character '{c}'"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Nothing is left after trimming
    /// - Any character is not alphabetic (this includes [`BLANK`])
    ///
    /// # Examples
    /// ```
    /// use three_words::core::Word;
    ///
    /// let word = Word::new("apple").unwrap();
    /// assert_eq!(word.text(), "APPLE");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("ap-le").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let chars = text.chars().collect();
        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's characters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_normalizes_case() {
        let word = Word::new("Apple").unwrap();
        assert_eq!(word.text(), "APPLE");
        assert_eq!(word.chars(), &['A', 'P', 'P', 'L', 'E']);
    }

    #[test]
    fn word_creation_trims() {
        let word = Word::new("  grape\n").unwrap();
        assert_eq!(word.text(), "GRAPE");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("ap3le"), Err(WordError::InvalidCharacter('3')));
        assert_eq!(Word::new("ap le"), Err(WordError::InvalidCharacter(' ')));
        assert_eq!(
            Word::new(format!("AP{BLANK}LE")),
            Err(WordError::InvalidCharacter(BLANK))
        );
    }

    #[test]
    fn word_non_ascii_letters() {
        let word = Word::new("mâine").unwrap();
        assert_eq!(word.text(), "MÂINE");
        assert_eq!(word.len(), 5);
        assert_eq!(word.char_at(1), 'Â');
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("mango").unwrap();
        assert_eq!(word.char_at(0), 'M');
        assert_eq!(word.char_at(4), 'O');
    }

    #[test]
    fn word_display() {
        let word = Word::new("mango").unwrap();
        assert_eq!(format!("{word}"), "MANGO");
    }

    #[test]
    fn word_equality() {
        assert_eq!(Word::new("apple").unwrap(), Word::new("APPLE").unwrap());
        assert_ne!(Word::new("apple").unwrap(), Word::new("grape").unwrap());
    }
}
