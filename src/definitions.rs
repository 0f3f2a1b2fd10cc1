//! Word definitions shown when a round is finished
//!
//! The engine only hands over the resolved words; where definitions come
//! from is up to the [`Definitions`] implementation.

use log::debug;
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::Path;

/// A source of word definitions
pub trait Definitions {
    /// Definition of `word` (uppercase) in `language`, if known
    fn lookup(&self, word: &str, language: &str) -> Option<&str>;
}

/// Used when no definitions file is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDefinitions;

impl Definitions for NoDefinitions {
    fn lookup(&self, _word: &str, _language: &str) -> Option<&str> {
        None
    }
}

/// Definitions read from a tab-separated file
///
/// Each line is `WORD<TAB>LANGUAGE<TAB>DEFINITION`. Words are matched
/// case-insensitively and languages exactly. Malformed lines are skipped.
#[derive(Debug, Clone, Default)]
pub struct DefinitionFile {
    entries: FxHashMap<(String, String), String>,
}

impl DefinitionFile {
    /// Parse definitions from text
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let entries = content
            .lines()
            .filter_map(|line| {
                let mut fields = line.splitn(3, '\t');
                let word = fields.next()?.trim();
                let language = fields.next()?.trim();
                let definition = fields.next()?.trim();
                if word.is_empty() || definition.is_empty() {
                    return None;
                }
                Some((
                    (word.to_uppercase(), language.to_string()),
                    definition.to_string(),
                ))
            })
            .collect();
        Self { entries }
    }

    /// Load definitions from a file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(&path)?;
        let definitions = Self::parse(&content);
        debug!(
            "loaded {} definitions from {}",
            definitions.len(),
            path.as_ref().display()
        );
        Ok(definitions)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Definitions for DefinitionFile {
    fn lookup(&self, word: &str, language: &str) -> Option<&str> {
        self.entries
            .get(&(word.to_uppercase(), language.to_string()))
            .map(String::as_str)
    }
}
