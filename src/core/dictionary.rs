//! Dictionary of valid words
//!
//! Holds the ordered word list the puzzle draws from and a hash set for the
//! membership checks the resolver and validator make on every reconstruction.

use super::word::Word;
use rustc_hash::FxHashSet;

/// What the puzzle engine needs from a word source
///
/// Implementations must be case-normalized (uppercase) and must not change
/// while a round is being played.
pub trait WordSource {
    /// Check whether `word` is a known dictionary word
    fn contains(&self, word: &str) -> bool;

    /// The stable, ordered list of words
    fn words(&self) -> &[Word];
}

/// An immutable dictionary built from a list of words
///
/// Duplicate entries are collapsed; first occurrence wins the ordering.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from already-validated words
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut index = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|w| index.insert(w.text().to_string()))
            .collect();
        Self { words, index }
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary has no words at all
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words with exactly `length` characters, in dictionary order
    ///
    /// This is the selectable pool a round samples from.
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> Vec<Word> {
        self.words
            .iter()
            .filter(|w| w.len() == length)
            .cloned()
            .collect()
    }
}

impl WordSource for Dictionary {
    #[inline]
    fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    #[inline]
    fn words(&self) -> &[Word] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::new(words.iter().map(|w| Word::new(w).unwrap()))
    }

    #[test]
    fn contains_uses_uppercase_form() {
        let dict = dictionary(&["apple", "grape"]);
        assert!(dict.contains("APPLE"));
        assert!(dict.contains("GRAPE"));
        assert!(!dict.contains("apple"));
        assert!(!dict.contains("MANGO"));
    }

    #[test]
    fn duplicates_are_collapsed() {
        let dict = dictionary(&["apple", "APPLE", "grape"]);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.words()[0].text(), "APPLE");
        assert_eq!(dict.words()[1].text(), "GRAPE");
    }

    #[test]
    fn words_of_length_filters() {
        let dict = dictionary(&["cat", "apple", "dog", "mango", "banana"]);
        let fives: Vec<_> = dict
            .words_of_length(5)
            .iter()
            .map(|w| w.text().to_string())
            .collect();
        assert_eq!(fives, vec!["APPLE", "MANGO"]);
        assert!(dict.words_of_length(9).is_empty());
    }

    #[test]
    fn empty_dictionary() {
        let dict = Dictionary::default();
        assert!(dict.is_empty());
        assert!(!dict.contains("APPLE"));
    }
}
