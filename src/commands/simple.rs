//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. This is the only place that blocks
//! waiting for the player; the session itself just answers guesses.

use crate::core::{Dictionary, Word};
use crate::definitions::Definitions;
use crate::output::formatters::format_letters;
use crate::output::{print_completion, print_definitions, print_round_view};
use crate::puzzle::{GuessOutcome, PuzzleShape, Session};
use anyhow::Result;
use colored::Colorize;
use log::info;
use std::io::{self, BufRead, Write};

/// Run the line-based game until the player quits or input ends
///
/// # Errors
///
/// Returns an error if a round cannot be set up from `pool` or if reading
/// input or writing output fails.
pub fn run_simple(
    dictionary: &Dictionary,
    pool: &[Word],
    language: &str,
    definitions: &dyn Definitions,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Three Words - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Each word below lost two letters. Put the missing letters back so");
    println!("that all three are real words, one word per guess.");
    println!("Commands: ':quit' to exit, ':new' to skip to a new puzzle\n");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let mut session = Session::start(dictionary, pool, PuzzleShape::STANDARD, &mut rand::rng())?;
        info!(
            "new round with {} candidate reconstructions",
            session.solutions().len()
        );

        print_round_view(&session.view());
        println!(
            "Available letters: {}\n",
            format_letters(&session.remaining_letters())
        );

        let mut skipped = false;
        while !session.is_complete() {
            let Some(line) = get_user_input(&mut input, "Enter your guess")? else {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            };

            match line.to_lowercase().as_str() {
                ":quit" | ":q" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                ":new" | ":n" => {
                    let solution: Vec<&str> = session
                        .obfuscation()
                        .puzzle_words()
                        .iter()
                        .map(Word::text)
                        .collect();
                    println!("The words were: {}\n", solution.join(", ").bright_white());
                    skipped = true;
                    break;
                }
                _ => {}
            }

            if session.submit_guess(&line) == GuessOutcome::Rejected {
                println!("{}", "Not a valid combination!".red());
            }
            print_round_view(&session.view());
            println!();
        }

        if !skipped && let Some(completion) = session.completion() {
            print_completion(&completion);
            print_definitions(&completion.words, language, definitions);
            println!();
        }

        match get_user_input(&mut input, "Play again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                println!("\n🔄 New puzzle!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn get_user_input(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn user_input_is_trimmed() {
        let mut input = Cursor::new("  apple \n");
        let line = get_user_input(&mut input, "Guess").unwrap();
        assert_eq!(line.as_deref(), Some("apple"));
    }

    #[test]
    fn end_of_input_is_none() {
        let mut input = Cursor::new("");
        assert_eq!(get_user_input(&mut input, "Guess").unwrap(), None);
    }
}
