//! TUI application state and logic

use crate::commands::PuzzleInfo;
use crate::core::LetterVerdict;
use crate::error::GameError;
use crate::game::{GameSession, GameState, ScoreLog, ScoreRecord, ScoreSink};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;
use std::time::{Duration, Instant};
use tracing::warn;

/// Duration of a single tile flip
pub const FLIP_DURATION: Duration = Duration::from_millis(500);

/// Delay between consecutive tiles starting to flip
pub const FLIP_STAGGER: Duration = Duration::from_millis(250);

const PLAYER_NAME_MAX: usize = 24;
const MESSAGES_KEPT: usize = 5;

/// Application state
pub struct App {
    pub session: GameSession,
    pub puzzle: Option<PuzzleInfo>,
    pub clue: Option<String>,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub player_name: String,
    pub reveal: Option<Reveal>,
    pub should_quit: bool,
    scores: Option<ScoreLog>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    PlayerName,
    Finished,
}

/// A row whose tiles are still flipping
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    pub row: usize,
    pub started: Instant,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// `scores` receives the result of a won daily game; pass `None` to
    /// disable submission
    #[must_use]
    pub fn new(
        session: GameSession,
        puzzle: Option<PuzzleInfo>,
        clue: Option<String>,
        scores: Option<ScoreLog>,
    ) -> Self {
        let mut app = Self {
            session,
            puzzle,
            clue,
            messages: Vec::new(),
            input_mode: InputMode::Guessing,
            player_name: String::new(),
            reveal: None,
            should_quit: false,
            scores,
        };

        let length = app.session.required_length();
        app.add_message(
            &format!("Guess the {length}-letter climate word. Enter to submit, Esc to quit."),
            MessageStyle::Info,
        );
        if let Some(clue) = app.clue.clone() {
            app.add_message(&format!("Today's theme: {clue}"), MessageStyle::Info);
        }
        app
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if self.is_revealing() {
            return;
        }

        match self.input_mode {
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.type_letter(c),
                KeyCode::Backspace => {
                    self.session.delete_letter();
                }
                KeyCode::Enter => self.submit_guess(now),
                _ => {}
            },
            InputMode::PlayerName => match key.code {
                KeyCode::Esc => {
                    self.player_name.clear();
                    self.add_message("Score not submitted.", MessageStyle::Info);
                    self.input_mode = InputMode::Finished;
                }
                KeyCode::Char(c) => {
                    if self.player_name.chars().count() < PLAYER_NAME_MAX
                        && (c.is_alphanumeric() || c == ' ' || c == '_' || c == '-')
                    {
                        self.player_name.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.player_name.pop();
                }
                KeyCode::Enter => self.submit_score(),
                _ => {}
            },
            InputMode::Finished => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                    self.should_quit = true;
                }
            }
        }
    }

    fn type_letter(&mut self, c: char) {
        match self.session.push_letter(c) {
            // Keys past a full row and non-letters never reach the board
            Ok(_) | Err(GameError::InvalidCharacter(_)) => {}
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn submit_guess(&mut self, now: Instant) {
        match self.session.submit() {
            Ok(_) => {
                self.reveal = Some(Reveal {
                    row: self.session.attempts() - 1,
                    started: now,
                });
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Advance the flip animation; announces the result once the last row
    /// has fully turned
    pub fn tick(&mut self, now: Instant) {
        let Some(reveal) = self.reveal else {
            return;
        };
        if now.saturating_duration_since(reveal.started) < self.reveal_duration() {
            return;
        }
        self.reveal = None;

        match self.session.state() {
            GameState::Won => {
                self.add_message("Congratulations! You guessed the word!", MessageStyle::Success);
                if let Some(score) = self.session.score() {
                    self.add_message(&format!("Score: {score}"), MessageStyle::Success);
                }
                if self.puzzle.is_some() && self.scores.is_some() {
                    self.add_message(
                        "Enter your name to submit your score (Esc to skip).",
                        MessageStyle::Info,
                    );
                    self.input_mode = InputMode::PlayerName;
                } else {
                    self.input_mode = InputMode::Finished;
                }
            }
            GameState::Lost => {
                let text = format!("Game over! The word was \"{}\".", self.session.target());
                self.add_message(&text, MessageStyle::Error);
                self.input_mode = InputMode::Finished;
            }
            GameState::AwaitingInput | GameState::Evaluating => {}
        }
    }

    fn reveal_duration(&self) -> Duration {
        let tiles = u32::try_from(self.session.required_length()).unwrap_or(u32::MAX);
        FLIP_STAGGER * tiles.saturating_sub(1) + FLIP_DURATION
    }

    #[must_use]
    pub const fn is_revealing(&self) -> bool {
        self.reveal.is_some()
    }

    /// Whether the verdict colour of a tile is showing yet
    ///
    /// A tile changes colour halfway through its flip.
    #[must_use]
    pub fn tile_revealed(&self, row: usize, index: usize, now: Instant) -> bool {
        match self.reveal {
            Some(reveal) if reveal.row == row => {
                let index = u32::try_from(index).unwrap_or(u32::MAX);
                now.saturating_duration_since(reveal.started)
                    >= FLIP_STAGGER * index + FLIP_DURATION / 2
            }
            _ => true,
        }
    }

    /// Best verdict seen so far for each letter, over fully revealed rows
    #[must_use]
    pub fn letter_hints(&self) -> FxHashMap<u8, LetterVerdict> {
        let hidden = self.reveal.map(|r| r.row);
        let mut hints: FxHashMap<u8, LetterVerdict> = FxHashMap::default();

        for (row, turn) in self.session.turns().iter().enumerate() {
            if Some(row) == hidden {
                continue;
            }
            for (&letter, &verdict) in turn
                .guess
                .text()
                .as_bytes()
                .iter()
                .zip(turn.feedback.verdicts())
            {
                hints
                    .entry(letter)
                    .and_modify(|best| {
                        if verdict.strength() > best.strength() {
                            *best = verdict;
                        }
                    })
                    .or_insert(verdict);
            }
        }
        hints
    }

    fn submit_score(&mut self) {
        let player = self.player_name.trim().to_string();
        if player.is_empty() {
            self.add_message("Name cannot be empty (Esc to skip).", MessageStyle::Error);
            return;
        }
        let (Some(puzzle), Some(score), Some(log)) =
            (self.puzzle, self.session.score(), self.scores.as_mut())
        else {
            self.input_mode = InputMode::Finished;
            return;
        };

        let record = ScoreRecord {
            puzzle: puzzle.number,
            date: puzzle.date,
            player,
            attempts: self.session.attempts(),
            score,
        };
        match log.submit(&record) {
            Ok(()) => {
                let text = format!("Score submitted to {}.", log.path().display());
                self.add_message(&text, MessageStyle::Success);
            }
            Err(err) => {
                warn!(%err, "score submission failed");
                self.add_message(&format!("Could not submit score: {err}"), MessageStyle::Error);
            }
        }
        self.input_mode = InputMode::Finished;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGES_KEPT {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<App> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<App> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll so the flip animation keeps drawing without input
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}
