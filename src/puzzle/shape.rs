//! Puzzle dimensions

use super::SetupError;

/// Number of words drawn for a round
pub const NO_OF_WORDS: usize = 3;

/// Letters removed from each drawn word
pub const CHARS_TO_REMOVE: usize = 2;

/// Largest pooled letter count the brute-force resolver accepts (8! = 40320)
pub const MAX_POOLED: usize = 8;

/// How many words a round has and how many letters each one loses
///
/// Pooled letters are addressed word-major, slot-minor:
/// `index = word * chars_per_word + slot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleShape {
    pub word_count: usize,
    pub chars_per_word: usize,
}

impl PuzzleShape {
    /// Three words, two letters removed from each
    pub const STANDARD: Self = Self {
        word_count: NO_OF_WORDS,
        chars_per_word: CHARS_TO_REMOVE,
    };

    /// Total number of removed letters
    #[inline]
    #[must_use]
    pub const fn pooled_len(&self) -> usize {
        self.word_count * self.chars_per_word
    }

    /// Shortest word that still keeps one visible letter after removal
    #[inline]
    #[must_use]
    pub const fn min_word_len(&self) -> usize {
        self.chars_per_word + 1
    }

    /// Index into the pooled letters for `slot` of word `word`
    #[inline]
    #[must_use]
    pub const fn pool_index(&self, word: usize, slot: usize) -> usize {
        word * self.chars_per_word + slot
    }

    /// Reject shapes the engine cannot play
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidShape`] for empty shapes or pools larger
    /// than [`MAX_POOLED`].
    pub const fn validate(&self) -> Result<(), SetupError> {
        if self.word_count == 0 || self.chars_per_word == 0 || self.pooled_len() > MAX_POOLED {
            return Err(SetupError::InvalidShape {
                word_count: self.word_count,
                chars_per_word: self.chars_per_word,
            });
        }
        Ok(())
    }
}

impl Default for PuzzleShape {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_shape() {
        let shape = PuzzleShape::default();
        assert_eq!(shape, PuzzleShape::STANDARD);
        assert_eq!(shape.pooled_len(), 6);
        assert_eq!(shape.min_word_len(), 3);
        assert!(shape.validate().is_ok());
    }

    #[test]
    fn pool_index_is_word_major() {
        let shape = PuzzleShape::STANDARD;
        assert_eq!(shape.pool_index(0, 0), 0);
        assert_eq!(shape.pool_index(0, 1), 1);
        assert_eq!(shape.pool_index(1, 0), 2);
        assert_eq!(shape.pool_index(2, 1), 5);
    }

    #[test]
    fn oversized_shape_rejected() {
        let shape = PuzzleShape {
            word_count: 3,
            chars_per_word: 3,
        };
        assert!(matches!(
            shape.validate(),
            Err(SetupError::InvalidShape { .. })
        ));
    }

    #[test]
    fn empty_shape_rejected() {
        let shape = PuzzleShape {
            word_count: 0,
            chars_per_word: 2,
        };
        assert!(shape.validate().is_err());
    }
}
