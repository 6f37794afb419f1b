//! Error types for the game core.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors raised by word selection, guess evaluation and the game session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Guess letter count differs from the target's letter count.
    #[error("The word needs to be {expected} letters long (got {actual}).")]
    LengthMismatch { expected: usize, actual: usize },

    /// No entries to pick a target from.
    #[error("word list is empty")]
    EmptyWordList,

    /// The epoch lies after the current time.
    #[error("epoch {epoch} is after the current time {now}")]
    InvalidEpoch {
        epoch: NaiveDateTime,
        now: NaiveDateTime,
    },

    /// A date computed from user input falls outside the calendar range.
    #[error("date {from} plus {days} days is out of range")]
    DateOutOfRange { from: NaiveDateTime, days: usize },

    /// A guess contained something other than an ASCII letter.
    #[error("invalid character {0:?} in guess")]
    InvalidCharacter(char),

    /// A word list entry failed validation.
    #[error("invalid word entry {entry:?}: {reason}")]
    InvalidEntry { entry: String, reason: &'static str },

    /// Input arrived after the game reached a terminal state.
    #[error("the game is over")]
    GameOver,

    /// An outcome cannot be scored.
    #[error("cannot score {attempts} attempts on a {word_length}-letter word (max {max})")]
    InvalidOutcome {
        attempts: usize,
        word_length: usize,
        max: usize,
    },
}
