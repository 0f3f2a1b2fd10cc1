//! TUI rendering with ratatui
//!
//! Draws the blanked words, the letter pool, progress, and messages.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::format_letters;
use crate::puzzle::RoundStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Puzzle
            Constraint::Percentage(50), // Progress and messages
        ])
        .split(chunks[1]);

    render_puzzle_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 THREE WORDS")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_puzzle_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    let view = app.session.view();

    let mut lines = vec![Line::from("")];
    for word in &view.words {
        // Spread the letters so blanks are easy to count
        let spaced = word
            .text
            .chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ");
        let style = if word.solved {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(spaced, style)));
        lines.push(Line::from(""));
    }

    let words = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Words ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(words, chunks[0]);

    let letters = Paragraph::new(Line::from(Span::styled(
        format_letters(&view.remaining),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Remaining Letters ")
            .borders(Borders::ALL),
    );
    f.render_widget(letters, chunks[1]);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.obfuscation().shape().word_count;
    let solved = app.session.guessed_words().len();
    let percent = (solved * 100 / total.max(1)) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent)
        .label(format!(
            "{solved}/{total} words | {} reconstructions fit",
            app.session.consistent_count()
        ));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Finished => (
            " 🎉 SOLVED! 🎉 | Press 'n' for a new puzzle or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Enter a word | Enter to submit, Esc to quit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let state = match app.session.status() {
        RoundStatus::InProgress { confirmed } => format!("Solved: {confirmed}"),
        RoundStatus::Complete => "Complete".to_string(),
    };
    f.render_widget(Paragraph::new(state).alignment(Alignment::Center), chunks[0]);

    let time = format!("Time: {}s", app.session.elapsed().as_secs());
    f.render_widget(Paragraph::new(time).alignment(Alignment::Center), chunks[1]);

    let stats_text = format!(
        "Won: {}/{} | Best: {}",
        app.stats.rounds_won,
        app.stats.rounds_played,
        app.stats
            .best_time
            .map_or_else(|| "-".to_string(), |t| format!("{}s", t.as_secs()))
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[2],
    );

    let guesses = format!(
        "Guesses: {} ok / {} missed",
        app.stats.accepted_guesses, app.stats.rejected_guesses
    );
    let help = Paragraph::new(guesses)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
