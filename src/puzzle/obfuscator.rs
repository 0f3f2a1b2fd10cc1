//! Word selection and letter removal
//!
//! Draws the round's words and blanks out letters at random positions,
//! recording what was removed in pooled (word-major) order.

use super::{PuzzleShape, SetupError};
use crate::core::{BLANK, Word, WordSource};
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

/// One removed letter and where it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovedChar {
    pub position: usize,
    pub letter: char,
}

/// The drawn words, their blanked forms, and the removal record
#[derive(Debug, Clone)]
pub struct Obfuscation {
    shape: PuzzleShape,
    puzzle_words: Vec<Word>,
    obfuscated: Vec<Vec<char>>,
    removed: Vec<RemovedChar>,
}

impl Obfuscation {
    /// Blank out explicit positions of explicit words
    ///
    /// `positions` is flat and word-major: `shape.chars_per_word` entries per
    /// word, in the order the letters are removed.
    ///
    /// # Errors
    ///
    /// Returns a [`SetupError`] if the shape is invalid, the word or position
    /// counts do not match it, or a position is out of range or repeated
    /// within its word.
    pub fn with_positions(
        shape: PuzzleShape,
        puzzle_words: Vec<Word>,
        positions: &[usize],
    ) -> Result<Self, SetupError> {
        shape.validate()?;
        if puzzle_words.len() != shape.word_count {
            return Err(SetupError::WordCount {
                expected: shape.word_count,
                actual: puzzle_words.len(),
            });
        }
        if positions.len() != shape.pooled_len() {
            return Err(SetupError::PositionCount {
                expected: shape.pooled_len(),
                actual: positions.len(),
            });
        }

        let mut obfuscated = Vec::with_capacity(shape.word_count);
        let mut removed = Vec::with_capacity(shape.pooled_len());

        for (slot, (word, word_positions)) in puzzle_words
            .iter()
            .zip(positions.chunks(shape.chars_per_word))
            .enumerate()
        {
            let mut chars = word.chars().to_vec();
            for &position in word_positions {
                let Some(&letter) = chars.get(position) else {
                    return Err(SetupError::PositionOutOfRange {
                        slot,
                        position,
                        len: word.len(),
                    });
                };
                if letter == BLANK {
                    return Err(SetupError::DuplicatePosition { slot, position });
                }
                removed.push(RemovedChar { position, letter });
                chars[position] = BLANK;
            }
            obfuscated.push(chars);
        }

        Ok(Self {
            shape,
            puzzle_words,
            obfuscated,
            removed,
        })
    }

    #[inline]
    #[must_use]
    pub const fn shape(&self) -> PuzzleShape {
        self.shape
    }

    /// The words as drawn, before any letter was removed
    #[inline]
    #[must_use]
    pub fn puzzle_words(&self) -> &[Word] {
        &self.puzzle_words
    }

    /// Blanked characters of the word in `slot`
    ///
    /// # Panics
    /// Panics if `slot >= shape().word_count`
    #[inline]
    #[must_use]
    pub fn obfuscated_chars(&self, slot: usize) -> &[char] {
        &self.obfuscated[slot]
    }

    /// Blanked forms of all words, for display
    #[must_use]
    pub fn obfuscated_words(&self) -> Vec<String> {
        self.obfuscated
            .iter()
            .map(|chars| chars.iter().collect())
            .collect()
    }

    /// The full removal record, word-major
    #[inline]
    #[must_use]
    pub fn removed(&self) -> &[RemovedChar] {
        &self.removed
    }

    /// Removal record of the word in `slot`
    ///
    /// # Panics
    /// Panics if `slot >= shape().word_count`
    #[inline]
    #[must_use]
    pub fn removed_for(&self, slot: usize) -> &[RemovedChar] {
        let start = self.shape.pool_index(slot, 0);
        &self.removed[start..start + self.shape.chars_per_word]
    }

    /// Removed letters in pooled order
    #[must_use]
    pub fn pooled(&self) -> Vec<char> {
        self.removed.iter().map(|r| r.letter).collect()
    }
}

/// Draw `shape.word_count` words from `pool` and blank out letters in each
///
/// Words are drawn uniformly with replacement, so the same word may appear
/// more than once. Words too short to keep a visible letter are never drawn.
/// Each removal picks uniformly among the positions not yet blanked.
///
/// # Errors
///
/// Returns a [`SetupError`] if the dictionary or pool is empty, no pool word
/// is long enough, or the shape is invalid.
pub fn obfuscate<S, R>(
    shape: PuzzleShape,
    pool: &[Word],
    dictionary: &S,
    rng: &mut R,
) -> Result<Obfuscation, SetupError>
where
    S: WordSource + ?Sized,
    R: Rng + ?Sized,
{
    shape.validate()?;
    if dictionary.words().is_empty() {
        return Err(SetupError::EmptyDictionary);
    }
    if pool.is_empty() {
        return Err(SetupError::EmptyPool);
    }

    let min_len = shape.min_word_len();
    let eligible: Vec<&Word> = pool.iter().filter(|w| w.len() >= min_len).collect();

    let mut puzzle_words = Vec::with_capacity(shape.word_count);
    let mut positions = Vec::with_capacity(shape.pooled_len());

    for _ in 0..shape.word_count {
        let Some(&word) = eligible.choose(rng) else {
            return Err(SetupError::NoEligibleWords { min_len });
        };

        let mut open: Vec<usize> = (0..word.len()).collect();
        for _ in 0..shape.chars_per_word {
            let pick = rng.random_range(0..open.len());
            positions.push(open.swap_remove(pick));
        }
        puzzle_words.push(word.clone());
    }

    debug!("drew {puzzle_words:?}, removing positions {positions:?}");
    Obfuscation::with_positions(shape, puzzle_words, &positions)
}
