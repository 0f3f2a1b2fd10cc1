//! Display functions for the line-based game and command results

use super::formatters::{create_progress_bar, format_letters, format_seconds};
use crate::commands::SurveyResult;
use crate::core::Word;
use crate::definitions::Definitions;
use crate::puzzle::{Completion, RoundView};
use colored::Colorize;

/// Print each word (white while blanked, green once solved) and the letters left
pub fn print_round_view(view: &RoundView) {
    for word in &view.words {
        if word.solved {
            println!("  {}", word.text.green().bold());
        } else {
            println!("  {}", word.text.white());
        }
    }
    println!();
    println!("Remaining letters: {}", format_letters(&view.remaining));
}

/// Print the finish banner
pub fn print_completion(completion: &Completion) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        format!(
            "Congrats! You finished in: {}",
            format_seconds(completion.elapsed)
        )
        .green()
        .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print a definition for every resolved word, in slot order
pub fn print_definitions(words: &[Word], language: &str, definitions: &dyn Definitions) {
    for word in words {
        match definitions.lookup(word.text(), language) {
            Some(definition) => println!("  {} - {definition}", word.text().bright_white().bold()),
            None => println!(
                "  {} - {}",
                word.text().bright_white().bold(),
                "no definition available".bright_black()
            ),
        }
    }
}

/// Print the result of a survey
pub fn print_survey_result(result: &SurveyResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SURVEY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Solution spaces:".bright_cyan().bold());
    println!("   Rounds:             {}", result.rounds);
    println!(
        "   Average size:       {}",
        format!("{:.1}", result.average_candidates)
            .bright_yellow()
            .bold()
    );
    println!("   Average distinct:   {:.2}", result.average_distinct);
    println!(
        "   Smallest:           {}",
        result.min_candidates.to_string().green()
    );
    println!(
        "   Largest:            {}",
        result.max_candidates.to_string().yellow()
    );
    println!("   Time taken:         {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:      {:.1}", result.rounds_per_second);

    if result.rounds == 0 {
        return;
    }

    println!("\n📈 {}", "Outcomes:".bright_cyan().bold());
    for (label, count) in [
        ("unique", result.unique_rounds),
        ("unwinnable", result.empty_rounds),
    ] {
        let pct = count as f64 / result.rounds as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {label:<10} {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
