//! Dictionary loading utilities
//!
//! Provides functions to build a dictionary from a file or the embedded list.

use crate::core::{Dictionary, Word};
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file
///
/// One word per line. Blank lines and entries that are not valid words
/// (digits, punctuation, `#` comments) are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use three_words::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(&path)?;
    let dictionary = dictionary_from_lines(content.lines());
    debug!(
        "loaded {} words from {}",
        dictionary.len(),
        path.as_ref().display()
    );
    Ok(dictionary)
}

/// Convert an embedded string slice to a dictionary
///
/// # Examples
/// ```
/// use three_words::wordlists::loader::dictionary_from_slice;
/// use three_words::wordlists::WORDS;
///
/// let dictionary = dictionary_from_slice(WORDS);
/// assert_eq!(dictionary.len(), WORDS.len());
/// ```
#[must_use]
pub fn dictionary_from_slice(slice: &[&str]) -> Dictionary {
    dictionary_from_lines(slice.iter().copied())
}

fn dictionary_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Dictionary {
    Dictionary::new(lines.filter_map(|line| Word::new(line).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordSource;

    #[test]
    fn dictionary_from_slice_converts_valid_words() {
        let dict = dictionary_from_slice(&["apple", "Grape", "MANGO"]);

        assert_eq!(dict.len(), 3);
        assert_eq!(dict.words()[0].text(), "APPLE");
        assert_eq!(dict.words()[1].text(), "GRAPE");
        assert_eq!(dict.words()[2].text(), "MANGO");
    }

    #[test]
    fn dictionary_from_slice_skips_invalid() {
        let dict = dictionary_from_slice(&["apple", "", "# comment", "gr4pe", "mango"]);

        assert_eq!(dict.len(), 2);
        assert!(dict.contains("APPLE"));
        assert!(dict.contains("MANGO"));
    }

    #[test]
    fn dictionary_from_slice_empty() {
        let dict = dictionary_from_slice(&[]);
        assert!(dict.is_empty());
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("no/such/dictionary.txt").is_err());
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let dict = dictionary_from_slice(WORDS);
        assert_eq!(dict.len(), WORDS.len());
    }
}
