//! Solution space construction
//!
//! Tries every ordering of the pooled letters in the blanks and keeps the
//! reconstructions where every word is in the dictionary. Because each
//! ordering uses the pooled letters exactly once, no further letter-count
//! filter is needed.

use super::{Obfuscation, Permutations};
use crate::core::{Word, WordSource};
use log::debug;

/// One reconstruction of every puzzle word, in slot order
pub type Candidate = Vec<Word>;

/// Every dictionary-valid reconstruction of a round
///
/// Repeated letters make several orderings produce the same candidate; those
/// duplicates are kept.
#[derive(Debug, Clone, Default)]
pub struct SolutionSpace {
    candidates: Vec<Candidate>,
}

impl SolutionSpace {
    #[must_use]
    pub const fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// An empty space means no guess can ever be accepted this round
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    /// Number of different candidates once duplicates are ignored
    #[must_use]
    pub fn distinct_len(&self) -> usize {
        let mut distinct: Vec<&Candidate> = self.candidates.iter().collect();
        distinct.sort();
        distinct.dedup();
        distinct.len()
    }
}

impl<'a> IntoIterator for &'a SolutionSpace {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

/// Build the solution space for an obfuscated round
pub fn resolve<S: WordSource + ?Sized>(obfuscation: &Obfuscation, dictionary: &S) -> SolutionSpace {
    let candidates: Vec<Candidate> = Permutations::new(obfuscation.pooled())
        .filter_map(|ordering| reconstruct(obfuscation, &ordering, dictionary))
        .collect();

    debug!(
        "resolved {} candidates for {:?}",
        candidates.len(),
        obfuscation.obfuscated_words()
    );
    SolutionSpace::new(candidates)
}

/// Fill every word's blanks from `ordering`; `None` if any result is not a word
fn reconstruct<S: WordSource + ?Sized>(
    obfuscation: &Obfuscation,
    ordering: &[char],
    dictionary: &S,
) -> Option<Candidate> {
    let shape = obfuscation.shape();
    (0..shape.word_count)
        .map(|slot| {
            let mut chars = obfuscation.obfuscated_chars(slot).to_vec();
            for (k, removed) in obfuscation.removed_for(slot).iter().enumerate() {
                chars[removed.position] = ordering[shape.pool_index(slot, k)];
            }
            let text: String = chars.into_iter().collect();
            if dictionary.contains(&text) {
                Word::new(text).ok()
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;
    use crate::puzzle::PuzzleShape;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn texts(candidate: &Candidate) -> Vec<&str> {
        candidate.iter().map(Word::text).collect()
    }

    /// •E•, •I•, •A• with pooled letters T N P N R T
    fn three_letter_round() -> (Obfuscation, Dictionary) {
        let dict = Dictionary::new(words(&[
            "ten", "pin", "rat", "pen", "tin", "tan", "pat", "ran", "net", "nit", "tar", "pan",
            "tip", "nip", "rip", "pit",
        ]));
        let obf = Obfuscation::with_positions(
            PuzzleShape::STANDARD,
            words(&["ten", "pin", "rat"]),
            &[0, 2, 0, 2, 0, 2],
        )
        .unwrap();
        (obf, dict)
    }

    #[test]
    fn duplicate_letters_keep_duplicate_candidates() {
        let dict = Dictionary::new(words(&["apple", "ample", "grape", "mango"]));
        let obf = Obfuscation::with_positions(
            PuzzleShape::STANDARD,
            words(&["apple", "grape", "mango"]),
            &[1, 2, 2, 3, 0, 3],
        )
        .unwrap();

        let space = resolve(&obf, &dict);

        // Three P's can be arranged 3! ways without changing the words
        assert_eq!(space.len(), 6);
        assert_eq!(space.distinct_len(), 1);
        for candidate in &space {
            assert_eq!(texts(candidate), vec!["APPLE", "GRAPE", "MANGO"]);
        }
    }

    #[test]
    fn finds_every_valid_reconstruction() {
        let (obf, dict) = three_letter_round();
        let space = resolve(&obf, &dict);

        assert_eq!(space.len(), 72);
        assert_eq!(space.distinct_len(), 18);
        assert!(space.iter().any(|c| texts(c) == ["TEN", "PIN", "RAT"]));
        assert!(space.iter().any(|c| texts(c) == ["PEN", "NIT", "TAR"]));
        assert!(space.iter().any(|c| texts(c) == ["NET", "RIP", "TAN"]));
        assert!(!space.iter().any(|c| texts(c) == ["PEN", "PIN", "RAT"]));
    }

    #[test]
    fn every_word_is_in_the_dictionary() {
        let (obf, dict) = three_letter_round();
        let space = resolve(&obf, &dict);
        assert!(
            space
                .iter()
                .flatten()
                .all(|word| dict.contains(word.text()))
        );
    }

    #[test]
    fn blanks_use_exactly_the_pooled_letters() {
        let (obf, dict) = three_letter_round();
        let mut pooled = obf.pooled();
        pooled.sort_unstable();

        for candidate in &resolve(&obf, &dict) {
            let mut used: Vec<char> = candidate
                .iter()
                .enumerate()
                .flat_map(|(slot, word)| {
                    obf.removed_for(slot)
                        .iter()
                        .map(move |r| word.char_at(r.position))
                })
                .collect();
            used.sort_unstable();
            assert_eq!(used, pooled);
        }
    }

    #[test]
    fn original_words_always_resolve() {
        let (obf, dict) = three_letter_round();
        let space = resolve(&obf, &dict);
        assert!(
            space
                .iter()
                .any(|c| c.as_slice() == obf.puzzle_words())
        );
    }

    #[test]
    fn unknown_words_give_empty_space() {
        let (obf, _) = three_letter_round();
        let dict = Dictionary::new(words(&["ten", "pin"]));
        let space = resolve(&obf, &dict);
        assert!(space.is_empty());
        assert_eq!(space.distinct_len(), 0);
    }
}
