//! TUI application state and logic

use crate::core::{Dictionary, Word};
use crate::definitions::Definitions;
use crate::output::formatters::format_seconds;
use crate::puzzle::{GuessOutcome, PuzzleShape, Session};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// How often the screen refreshes while waiting for a key, for the timer
const TICK: Duration = Duration::from_millis(250);

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub pool: &'a [Word],
    pub language: String,
    pub definitions: &'a dyn Definitions,
    pub session: Session,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub accepted_guesses: usize,
    pub rejected_guesses: usize,
    pub best_time: Option<Duration>,
}

impl<'a> App<'a> {
    /// Create the app with its first round already set up
    ///
    /// # Errors
    ///
    /// Returns an error if no round can be drawn from `pool`.
    pub fn new(
        dictionary: &'a Dictionary,
        pool: &'a [Word],
        language: impl Into<String>,
        definitions: &'a dyn Definitions,
    ) -> Result<Self> {
        let session = Session::start(dictionary, pool, PuzzleShape::STANDARD, &mut rand::rng())?;

        Ok(Self {
            dictionary,
            pool,
            language: language.into(),
            definitions,
            session,
            input_mode: InputMode::Guessing,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Each word lost two letters. Rebuild all three!".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a word and press Enter".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics {
                rounds_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
        })
    }

    pub fn handle_guess(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);
        if guess.trim().is_empty() {
            return;
        }

        match self.session.submit_guess(&guess) {
            GuessOutcome::Accepted { slot, revealed } => {
                self.stats.accepted_guesses += 1;
                let letters: String = revealed.iter().collect();
                self.add_message(
                    &format!(
                        "{} fits word {} (uses {letters})",
                        guess.trim().to_uppercase(),
                        slot + 1
                    ),
                    MessageStyle::Success,
                );
                if let Some(completion) = self.session.completion() {
                    self.finish_round(completion.elapsed, &completion.words);
                }
            }
            GuessOutcome::Rejected => {
                self.stats.rejected_guesses += 1;
                self.add_message(
                    &format!(
                        "{}: not a valid combination!",
                        guess.trim().to_uppercase()
                    ),
                    MessageStyle::Error,
                );
            }
        }
    }

    fn finish_round(&mut self, elapsed: Duration, words: &[Word]) {
        self.stats.rounds_won += 1;
        self.stats.best_time = Some(self.stats.best_time.map_or(elapsed, |best| best.min(elapsed)));
        self.input_mode = InputMode::Finished;
        info!("round won in {elapsed:?}");

        self.add_message(
            &format!("🎉 Congrats! You finished in: {}", format_seconds(elapsed)),
            MessageStyle::Success,
        );
        for word in words {
            let text = match self.definitions.lookup(word.text(), &self.language) {
                Some(definition) => format!("{word}: {definition}"),
                None => format!("{word}: no definition available"),
            };
            self.add_message(&text, MessageStyle::Info);
        }
        self.add_message("Press 'n' for a new puzzle or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_round(&mut self) {
        match Session::start(
            self.dictionary,
            self.pool,
            PuzzleShape::STANDARD,
            &mut rand::rng(),
        ) {
            Ok(session) => {
                self.session = session;
                self.stats.rounds_played += 1;
                self.input_mode = InputMode::Guessing;
                self.input_buffer.clear();
                self.messages.clear();
                self.add_message("New puzzle started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&format!("Cannot start a puzzle: {e}"), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Finished => match code {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n' | 'N') => self.new_round(),
                _ => {}
            },
            InputMode::Guessing => match code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if c.is_alphabetic() => {
                    self.input_buffer.extend(c.to_uppercase());
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.handle_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if !event::poll(TICK)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
