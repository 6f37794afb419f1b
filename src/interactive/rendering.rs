//! TUI rendering with ratatui
//!
//! Board, keyboard hints and messages for the game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::core::LetterVerdict;
use crate::output::formatters::{GAME_TITLE, share_text};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};
use std::time::Instant;

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and side panel
            Constraint::Length(5), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.puzzle {
        Some(puzzle) => format!("🌍 {GAME_TITLE} #{} · {}", puzzle.number, puzzle.date),
        None => format!("🌍 {GAME_TITLE} · practice"),
    };
    let header = Paragraph::new(title)
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

const fn verdict_style(verdict: LetterVerdict) -> Style {
    let bg = match verdict {
        LetterVerdict::Correct => Color::Green,
        LetterVerdict::Present => Color::Yellow,
        LetterVerdict::Absent => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn tile(letter: Option<u8>, style: Style) -> Span<'static> {
    let letter = letter.map_or(' ', |b| char::from(b).to_ascii_uppercase());
    Span::styled(format!(" {letter} "), style)
}

/// Build one board row following the target's word layout
fn board_row(app: &App, row: usize, now: Instant) -> Line<'static> {
    let pending = Style::new().fg(Color::White).bg(Color::Gray);
    let typed = Style::new()
        .fg(Color::White)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD);
    let empty = Style::new().bg(Color::Gray);
    let inactive = Style::new().bg(Color::Black);

    let turn = app.session.turns().get(row);
    let is_current = turn.is_none() && row == app.session.attempts() && !app.session.is_over();
    let buffer = app.session.buffer().as_bytes();

    let mut spans = Vec::new();
    for slot in app.session.target().layout() {
        let span = match (slot, turn) {
            (None, _) => tile(None, inactive),
            (Some(i), Some(turn)) => {
                let letter = turn.guess.text().as_bytes().get(i).copied();
                let verdict = turn.feedback.verdicts().get(i).copied();
                match verdict {
                    Some(verdict) if app.tile_revealed(row, i, now) => {
                        tile(letter, verdict_style(verdict))
                    }
                    _ => tile(letter, pending),
                }
            }
            (Some(i), None) if is_current => match buffer.get(i) {
                Some(&letter) => tile(Some(letter), typed),
                None => tile(None, empty),
            },
            (Some(_), None) => tile(None, empty),
        };
        spans.push(span);
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let now = Instant::now();
    let mut lines = Vec::new();
    for row in 0..app.session.guesses_max() {
        lines.push(board_row(app, row, now));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(
                " Board · {} letters ",
                app.session.required_length()
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),      // Keyboard
            Constraint::Percentage(40), // Theme
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_theme(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.letter_hints();
    let unused = Style::new().fg(Color::White);

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|letter| {
                    let style = hints.get(&letter).map_or(unused, |&v| verdict_style(v));
                    tile(Some(letter), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_theme(f: &mut Frame, app: &App, area: Rect) {
    let content = app.clue.as_deref().map_or_else(
        || Line::from("No theme today"),
        |clue| {
            Line::from(vec![Span::styled(
                clue.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )])
        },
    );

    let theme = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" Today's theme ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(theme, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
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
        InputMode::Guessing => (
            " Type your guess | Enter to submit | Esc to quit ".to_string(),
            app.session.buffer().to_uppercase(),
            Color::Yellow,
        ),
        InputMode::PlayerName => (
            " Your name | Enter to submit score | Esc to skip ".to_string(),
            app.player_name.clone(),
            Color::Cyan,
        ),
        InputMode::Finished => (
            " Share | Press q to quit ".to_string(),
            share_text(app.puzzle.map(|p| p.number), &app.session)
                .lines()
                .filter(|l| !l.is_empty())
                .collect::<Vec<_>>()
                .join("  "),
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: false })
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
    let status = format!(
        "Attempt {}/{} · {} remaining",
        (app.session.attempts() + 1).min(app.session.guesses_max()),
        app.session.guesses_max(),
        app.session.attempts_remaining()
    );
    let paragraph = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;
    use crate::game::GameSession;
    use ratatui::{Terminal, backend::TestBackend};

    fn row_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn board_row_leaves_gap_for_spaces() {
        let mut app = App::new(
            GameSession::new(WordEntry::new("sea level").unwrap()),
            None,
            None,
            None,
        );
        for c in "seal".chars() {
            app.session.push_letter(c).unwrap();
        }

        let line = board_row(&app, 0, Instant::now());
        assert_eq!(row_text(&line), " S   E   A       L                   ");
        assert_eq!(line.spans[6].style.bg, Some(Color::Black));
    }

    #[test]
    fn ui_draws_without_panicking() {
        let app = App::new(
            GameSession::new(WordEntry::new("heat dome").unwrap()),
            None,
            Some("Put a lid on it!".to_string()),
            None,
        );
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
    }
}
