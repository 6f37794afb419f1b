//! Simple line-based play mode
//!
//! Text-based game loop without the TUI

use crate::error::GameError;
use crate::game::{GameSession, GameState, ScoreRecord, ScoreSink};
use crate::output::display::colored_row;
use crate::output::formatters::{GAME_TITLE, share_text, word_layout};
use anyhow::Result;
use chrono::NaiveDate;
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::warn;

/// The daily puzzle a game belongs to; practice games have none
#[derive(Debug, Clone, Copy)]
pub struct PuzzleInfo {
    pub number: u64,
    pub date: NaiveDate,
}

/// Everything the line-based game needs
pub struct SimpleGame<'a> {
    pub session: GameSession,
    pub puzzle: Option<PuzzleInfo>,
    pub clue: Option<String>,
    /// Receives the score of a won daily game
    pub sink: Option<&'a mut dyn ScoreSink>,
}

/// Run the line-based game until it ends, the player quits or input ends
///
/// Returns the session in its final state.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(
    mut game: SimpleGame<'_>,
    mut input: R,
    mut out: W,
) -> Result<GameSession> {
    let target = game.session.target().clone();

    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    match game.puzzle {
        Some(puzzle) => writeln!(
            out,
            " {} #{} ({})",
            GAME_TITLE.bright_green().bold(),
            puzzle.number,
            puzzle.date
        )?,
        None => writeln!(out, " {} (practice)", GAME_TITLE.bright_green().bold())?,
    }
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    if let Some(clue) = &game.clue {
        writeln!(out, "\nToday's theme: {}", clue.bright_yellow())?;
    }
    writeln!(
        out,
        "\n{}  ({} letters, {} guesses)",
        word_layout(game.session.target()),
        game.session.required_length(),
        game.session.guesses_max()
    )?;
    writeln!(out, "Type a guess and press Enter. 'quit' to exit.\n")?;

    while !game.session.is_over() {
        let prompt = format!(
            "Guess {}/{}",
            game.session.attempts() + 1,
            game.session.guesses_max()
        );
        let Some(line) = read_line(&mut input, &mut out, &prompt)? else {
            return Ok(game.session);
        };

        if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(game.session);
        }

        match game.session.submit_guess(&line) {
            Ok(turn) => {
                writeln!(out, "  {}", colored_row(turn, &target))?;
            }
            Err(err @ (GameError::LengthMismatch { .. } | GameError::InvalidCharacter(_))) => {
                writeln!(out, "  {}", err.to_string().red())?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    writeln!(out)?;
    if game.session.state() == GameState::Won {
        writeln!(out, "{}", "🎉 Congratulations! You guessed the word!".green().bold())?;
    } else {
        writeln!(
            out,
            "{}",
            format!("Game over! The word was \"{target}\".")
                .red()
                .bold()
        )?;
    }

    let number = game.puzzle.map(|p| p.number);
    writeln!(out, "\n{}\n", share_text(number, &game.session))?;

    if let (Some(score), Some(puzzle), Some(sink)) =
        (game.session.score(), game.puzzle, game.sink.as_deref_mut())
    {
        writeln!(out, "Score: {}", score.to_string().bright_yellow().bold())?;
        let Some(player) =
            read_line(&mut input, &mut out, "Enter your name to submit (blank to skip)")?
        else {
            return Ok(game.session);
        };
        if player.is_empty() {
            return Ok(game.session);
        }

        let record = ScoreRecord {
            puzzle: puzzle.number,
            date: puzzle.date,
            player,
            attempts: game.session.attempts(),
            score,
        };
        match sink.submit(&record) {
            Ok(()) => writeln!(out, "{}", "✓ Score submitted".green())?,
            Err(err) => {
                warn!(%err, "score submission failed");
                writeln!(out, "{}", format!("Could not submit score: {err:#}").red())?;
            }
        }
    }

    Ok(game.session)
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
