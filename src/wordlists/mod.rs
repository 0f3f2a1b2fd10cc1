//! Word lists for the puzzle
//!
//! Provides the embedded default dictionary and loaders for custom ones.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_uppercase_letters() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn default_pool_has_five_letter_words() {
        let fives = WORDS.iter().filter(|w| w.len() == 5).count();
        assert!(fives > 100, "only {fives} five-letter words embedded");
        assert!(WORDS.contains(&"APPLE"));
        assert!(WORDS.contains(&"GRAPE"));
        assert!(WORDS.contains(&"MANGO"));
    }
}
