//! Three Words - CLI
//!
//! Rebuild three words from their pooled missing letters, in a TUI or on
//! plain standard input.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::debug;
use three_words::{
    commands::{run_simple, run_survey},
    core::{Dictionary, Word, WordSource},
    definitions::{DefinitionFile, Definitions, NoDefinitions},
    output::print_survey_result,
    wordlists::{WORDS, loader},
};

#[derive(Parser)]
#[command(
    name = "three_words",
    about = "Rebuild three words from the letters removed from them",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a one-word-per-line file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Length of the words to draw; 0 draws from every word
    #[arg(short = 'l', long, global = true, default_value_t = 5)]
    length: usize,

    /// Language tag used for definition lookups
    #[arg(long, global = true, default_value = "en")]
    language: String,

    /// Tab-separated definitions file: WORD, LANGUAGE, DEFINITION
    #[arg(short = 'd', long, global = true)]
    definitions: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Generate many puzzles and report how many solutions they admit
    Survey {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "1000")]
        rounds: usize,
    },
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "embedded" => Ok(loader::dictionary_from_slice(WORDS)),
        path => loader::load_from_file(path)
            .with_context(|| format!("Failed to load word list from '{path}'")),
    }
}

/// Words the puzzle may draw from
fn select_pool(dictionary: &Dictionary, length: usize) -> Result<Vec<Word>> {
    let pool = if length == 0 {
        dictionary.words().to_vec()
    } else {
        dictionary.words_of_length(length)
    };
    if pool.is_empty() {
        bail!("The dictionary has no words of length {length}");
    }
    Ok(pool)
}

fn load_definitions(path: Option<&str>) -> Result<Box<dyn Definitions>> {
    match path {
        Some(path) => Ok(Box::new(DefinitionFile::load(path).with_context(|| {
            format!("Failed to load definitions from '{path}'")
        })?)),
        None => Ok(Box::new(NoDefinitions)),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;
    let pool = select_pool(&dictionary, cli.length)?;
    debug!(
        "dictionary has {} words, {} in the pool",
        dictionary.len(),
        pool.len()
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let definitions = load_definitions(cli.definitions.as_deref())?;
            run_play_command(&dictionary, &pool, &cli.language, definitions.as_ref())
        }
        Commands::Simple => {
            let definitions = load_definitions(cli.definitions.as_deref())?;
            run_simple(&dictionary, &pool, &cli.language, definitions.as_ref())
        }
        Commands::Survey { rounds } => {
            println!("Generating {rounds} puzzles...");
            let result = run_survey(&dictionary, &pool, rounds, true)?;
            print_survey_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(
    dictionary: &Dictionary,
    pool: &[Word],
    language: &str,
    definitions: &dyn Definitions,
) -> Result<()> {
    use three_words::interactive::{App, run_tui};

    let app = App::new(dictionary, pool, language, definitions)?;
    run_tui(app)
}
