//! Survey command
//!
//! Generates many rounds and reports how large their solution spaces are,
//! including how often a round would be unwinnable.

use crate::core::{Word, WordSource};
use crate::puzzle::{PuzzleShape, SetupError, obfuscate, resolve};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Aggregated solution-space statistics
#[derive(Debug, Clone)]
pub struct SurveyResult {
    pub rounds: usize,
    pub average_candidates: f64,
    pub average_distinct: f64,
    pub min_candidates: usize,
    pub max_candidates: usize,
    /// Rounds whose only distinct reconstruction is the drawn triple
    pub unique_rounds: usize,
    /// Rounds no guess could ever win
    pub empty_rounds: usize,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Generate `rounds` independent rounds and measure their solution spaces
///
/// Rounds are independent, so they are generated in parallel, each worker
/// using its own thread-local random source.
///
/// # Errors
///
/// Returns the [`SetupError`] of the first round that cannot be drawn.
pub fn run_survey<S>(
    dictionary: &S,
    pool: &[Word],
    rounds: usize,
    show_progress: bool,
) -> Result<SurveyResult, SetupError>
where
    S: WordSource + Sync + ?Sized,
{
    let pb = if show_progress {
        ProgressBar::new(rounds as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {per_sec}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let sizes: Vec<(usize, usize)> = (0..rounds)
        .into_par_iter()
        .map(|_| -> Result<(usize, usize), SetupError> {
            let obfuscation = obfuscate(PuzzleShape::STANDARD, pool, dictionary, &mut rand::rng())?;
            let space = resolve(&obfuscation, dictionary);
            pb.inc(1);
            Ok((space.len(), space.distinct_len()))
        })
        .collect::<Result<_, SetupError>>()?;
    pb.finish_and_clear();

    let duration = start.elapsed();
    debug!("surveyed {rounds} rounds in {duration:?}");

    let total: usize = sizes.iter().map(|(len, _)| len).sum();
    let total_distinct: usize = sizes.iter().map(|(_, distinct)| distinct).sum();
    let divisor = rounds.max(1) as f64;

    Ok(SurveyResult {
        rounds,
        average_candidates: total as f64 / divisor,
        average_distinct: total_distinct as f64 / divisor,
        min_candidates: sizes.iter().map(|(len, _)| *len).min().unwrap_or(0),
        max_candidates: sizes.iter().map(|(len, _)| *len).max().unwrap_or(0),
        unique_rounds: sizes.iter().filter(|(_, distinct)| *distinct == 1).count(),
        empty_rounds: sizes.iter().filter(|(len, _)| *len == 0).count(),
        duration,
        rounds_per_second: rounds as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;

    fn dictionary(list: &[&str]) -> Dictionary {
        Dictionary::new(list.iter().map(|w| Word::new(w).unwrap()))
    }

    #[test]
    fn survey_counts_rounds() {
        let dict = dictionary(&["apple", "grape", "mango", "lemon", "peach"]);
        let result = run_survey(&dict, dict.words(), 20, false).unwrap();

        assert_eq!(result.rounds, 20);
        // The drawn words always reconstruct themselves
        assert_eq!(result.empty_rounds, 0);
        assert!(result.min_candidates >= 1);
        assert!(result.max_candidates >= result.min_candidates);
        assert!(result.average_distinct >= 1.0);
        assert!(result.average_candidates >= result.average_distinct);
    }

    #[test]
    fn single_word_pool_is_always_unique() {
        let dict = dictionary(&["mango"]);
        let result = run_survey(&dict, dict.words(), 5, false).unwrap();
        assert_eq!(result.unique_rounds, 5);
    }

    #[test]
    fn survey_reports_setup_errors() {
        let dict = dictionary(&["at", "go"]);
        let result = run_survey(&dict, dict.words(), 3, false);
        assert_eq!(
            result.unwrap_err(),
            SetupError::NoEligibleWords { min_len: 3 }
        );
    }

    #[test]
    fn zero_rounds() {
        let dict = dictionary(&["mango"]);
        let result = run_survey(&dict, dict.words(), 0, false).unwrap();
        assert_eq!(result.rounds, 0);
        assert_eq!(result.min_candidates, 0);
        assert!(result.average_candidates.abs() < f64::EPSILON);
    }
}
