//! Core domain types for the game
//!
//! Word entries, guesses, the duplicate-aware evaluator and the daily
//! rotation. Everything here is pure and free of I/O.

mod guess;
mod schedule;
mod verdict;
mod word;

pub use guess::Guess;
pub use schedule::{DailyPuzzle, MS_PER_DAY, Schedule, day_offset, select_target};
pub use verdict::{Feedback, LetterVerdict, evaluate};
pub use word::{WORD_LENGTH_MAX, WordEntry};
