//! Round progress and guess validation
//!
//! A [`Session`] owns one round from setup to completion. It never blocks:
//! the caller reads input however it likes and calls [`Session::submit_guess`].

use super::{Candidate, Obfuscation, PuzzleShape, SetupError, SolutionSpace, obfuscate, resolve};
use crate::core::{BLANK, Word, WordSource};
use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;
use std::time::{Duration, Instant};

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress { confirmed: usize },
    Complete,
}

/// Result of one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess solved `slot`; `revealed` are the letters it put in the blanks
    Accepted { slot: usize, revealed: Vec<char> },
    /// Not consistent with the solution space; nothing changed
    Rejected,
}

/// Display form of one word slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordState {
    pub text: String,
    pub solved: bool,
}

/// Everything a renderer needs to draw the round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    pub words: Vec<WordState>,
    pub remaining: Vec<char>,
}

/// Summary handed out once every word is confirmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub elapsed: Duration,
    pub words: Vec<Word>,
}

/// Mutable state of a single round
#[derive(Debug, Clone)]
pub struct Session {
    obfuscation: Obfuscation,
    solutions: SolutionSpace,
    /// Removed letters in the order shown to the player, fixed for the round
    display_pool: Vec<char>,
    /// Confirmed word per slot
    confirmed: Vec<Option<Word>>,
    /// Confirmed words in the order they were guessed
    guessed: Vec<Word>,
    revealed: Vec<char>,
    narrowed: Option<usize>,
    started: Instant,
    finished: Option<Duration>,
}

impl Session {
    /// Set up a fresh round: draw words, blank them, and resolve the solutions
    ///
    /// # Errors
    ///
    /// Returns a [`SetupError`] if no round can be drawn from `pool`.
    pub fn start<S, R>(
        dictionary: &S,
        pool: &[Word],
        shape: PuzzleShape,
        rng: &mut R,
    ) -> Result<Self, SetupError>
    where
        S: WordSource + ?Sized,
        R: Rng + ?Sized,
    {
        let obfuscation = obfuscate(shape, pool, dictionary, rng)?;
        let solutions = resolve(&obfuscation, dictionary);
        Ok(Self::new(obfuscation, solutions, rng))
    }

    /// Wrap an already-resolved round; `rng` fixes the letter display order
    pub fn new<R: Rng + ?Sized>(
        obfuscation: Obfuscation,
        solutions: SolutionSpace,
        rng: &mut R,
    ) -> Self {
        let mut display_pool = obfuscation.pooled();
        display_pool.shuffle(rng);
        let word_count = obfuscation.shape().word_count;

        Self {
            obfuscation,
            solutions,
            display_pool,
            confirmed: vec![None; word_count],
            guessed: Vec::with_capacity(word_count),
            revealed: Vec::new(),
            narrowed: None,
            started: Instant::now(),
            finished: None,
        }
    }

    /// Check one guess and record it if it fits
    ///
    /// The guess is trimmed and uppercased first. It is accepted when some
    /// candidate agrees with every confirmed slot and holds the guess in a
    /// slot that is still unsolved. Once the round is complete every guess
    /// is rejected.
    pub fn submit_guess(&mut self, input: &str) -> GuessOutcome {
        if self.is_complete() {
            return GuessOutcome::Rejected;
        }

        let guess = input.trim().to_uppercase();
        let Some((index, slot)) = self.find_match(&guess) else {
            trace!("rejected {guess:?}");
            return GuessOutcome::Rejected;
        };

        let word = self.solutions.candidates()[index][slot].clone();
        let revealed: Vec<char> = self
            .obfuscation
            .removed_for(slot)
            .iter()
            .map(|r| word.char_at(r.position))
            .collect();

        trace!("accepted {word} in slot {slot}, revealing {revealed:?}");
        self.revealed.extend_from_slice(&revealed);
        self.confirmed[slot] = Some(word.clone());
        self.guessed.push(word);
        self.narrowed = Some(index);

        if self.confirmed.iter().all(Option::is_some) {
            let elapsed = self.started.elapsed();
            debug!("round complete in {elapsed:?}");
            self.finished = Some(elapsed);
        }

        GuessOutcome::Accepted { slot, revealed }
    }

    /// First (candidate index, slot) that accepts `guess`
    fn find_match(&self, guess: &str) -> Option<(usize, usize)> {
        self.consistent().find_map(|(index, candidate)| {
            candidate
                .iter()
                .zip(&self.confirmed)
                .position(|(word, confirmed)| confirmed.is_none() && word.text() == guess)
                .map(|slot| (index, slot))
        })
    }

    /// Candidates that agree with every confirmed slot
    fn consistent(&self) -> impl Iterator<Item = (usize, &Candidate)> + '_ {
        self.solutions
            .iter()
            .enumerate()
            .filter(move |(_, candidate)| {
                candidate
                    .iter()
                    .zip(&self.confirmed)
                    .all(|(word, confirmed)| confirmed.as_ref().is_none_or(|c| c == word))
            })
    }

    /// Number of candidates still consistent with the confirmed words
    #[must_use]
    pub fn consistent_count(&self) -> usize {
        self.consistent().count()
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.is_complete() {
            RoundStatus::Complete
        } else {
            RoundStatus::InProgress {
                confirmed: self.guessed.len(),
            }
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.finished.is_some()
    }

    /// Current display state: blanked or solved words, then remaining letters
    #[must_use]
    pub fn view(&self) -> RoundView {
        let words = self
            .confirmed
            .iter()
            .enumerate()
            .map(|(slot, confirmed)| match confirmed {
                Some(word) => WordState {
                    text: word.text().to_string(),
                    solved: true,
                },
                None => WordState {
                    text: self.obfuscation.obfuscated_chars(slot).iter().collect(),
                    solved: false,
                },
            })
            .collect();

        RoundView {
            words,
            remaining: self.remaining_letters(),
        }
    }

    /// Pooled letters not yet revealed, in the round's display order
    #[must_use]
    pub fn remaining_letters(&self) -> Vec<char> {
        let mut remaining = self.display_pool.clone();
        for letter in &self.revealed {
            if let Some(i) = remaining.iter().position(|c| c == letter) {
                remaining.remove(i);
            }
        }
        remaining
    }

    /// Elapsed time and resolved words, once the round is complete
    #[must_use]
    pub fn completion(&self) -> Option<Completion> {
        let elapsed = self.finished?;
        let words = self.confirmed.iter().flatten().cloned().collect();
        Some(Completion { elapsed, words })
    }

    /// Time since the round started, frozen at completion
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.finished.unwrap_or_else(|| self.started.elapsed())
    }

    /// Confirmed words in guessing order
    #[inline]
    #[must_use]
    pub fn guessed_words(&self) -> &[Word] {
        &self.guessed
    }

    /// The candidate the latest accepted guess matched
    #[must_use]
    pub fn narrowed(&self) -> Option<&Candidate> {
        self.narrowed.map(|i| &self.solutions.candidates()[i])
    }

    #[inline]
    #[must_use]
    pub const fn obfuscation(&self) -> &Obfuscation {
        &self.obfuscation
    }

    #[inline]
    #[must_use]
    pub const fn solutions(&self) -> &SolutionSpace {
        &self.solutions
    }

    /// Number of blanks left across all unsolved words
    #[must_use]
    pub fn blanks_left(&self) -> usize {
        self.view()
            .words
            .iter()
            .map(|w| w.text.chars().filter(|&c| c == BLANK).count())
            .sum()
    }
}
