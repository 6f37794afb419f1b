//! One-off guess evaluation
//!
//! Scores a guess against an arbitrary target without starting a game.

use crate::core::{Feedback, Guess, WordEntry, evaluate};
use crate::error::GameResult;

/// Result of checking one guess
pub struct CheckResult {
    pub target: WordEntry,
    pub guess: Guess,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if the target is not a valid entry, the guess contains
/// non-letters, or the letter counts differ.
pub fn check_guess(target: &str, guess: &str) -> GameResult<CheckResult> {
    let target = WordEntry::new(target)?;
    let guess = Guess::new(guess)?;
    let feedback = evaluate(&target, &guess)?;

    Ok(CheckResult {
        target,
        guess,
        feedback,
    })
}
