//! Guess evaluation
//!
//! Each guessed letter receives one of three verdicts:
//! - Correct (right letter, right position)
//! - Present (letter in the target, wrong position)
//! - Absent (letter not in the target, accounting for multiplicity)
//!
//! Spaces in the target never take part: the guess is aligned against the
//! target's letters with spaces removed.

use super::{Guess, WordEntry};
use crate::error::{GameError, GameResult};

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterVerdict {
    Correct,
    Present,
    Absent,
}

impl LetterVerdict {
    /// Emoji square used in share text
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }

    /// Rank used when merging hints for the same letter (higher wins)
    #[must_use]
    pub const fn strength(self) -> u8 {
        match self {
            Self::Correct => 2,
            Self::Present => 1,
            Self::Absent => 0,
        }
    }
}

/// Verdict sequence for a whole guess, one entry per guessed letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterVerdict>);

impl Feedback {
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[LetterVerdict] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&v| v == LetterVerdict::Correct)
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterVerdict::Correct)
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterVerdict::Present)
    }

    fn count(&self, verdict: LetterVerdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.to_emoji()).collect()
    }
}

/// Evaluate `guess` against `target`
///
/// Implements the duplicate-aware rules: a letter is never marked Correct or
/// Present more often than it occurs in the target.
///
/// # Algorithm
/// 1. First pass: Mark exact matches (Correct) and remove them from the pool
/// 2. Second pass: Mark Present from what remains in the pool, else Absent
///
/// # Errors
/// Returns `GameError::LengthMismatch` if the guess does not have exactly as
/// many letters as the target (spaces excluded). No partial result is produced.
///
/// # Examples
/// ```
/// use climate_wordle::core::{Guess, LetterVerdict::*, WordEntry, evaluate};
///
/// let target = WordEntry::new("levee").unwrap();
/// let guess = Guess::new("eevee").unwrap();
/// let feedback = evaluate(&target, &guess).unwrap();
///
/// // Only three e's exist, all claimed by exact matches
/// assert_eq!(feedback.verdicts(), &[Absent, Correct, Correct, Correct, Correct]);
/// ```
pub fn evaluate(target: &WordEntry, guess: &Guess) -> GameResult<Feedback> {
    let answer = target.letters().as_bytes();
    let guessed = guess.text().as_bytes();

    if guessed.len() != answer.len() {
        return Err(GameError::LengthMismatch {
            expected: answer.len(),
            actual: guessed.len(),
        });
    }

    let mut result = vec![LetterVerdict::Absent; guessed.len()];
    let mut answer_available = target.letter_counts();

    // First pass: exact position matches
    for (i, (&letter, &expected)) in guessed.iter().zip(answer).enumerate() {
        if letter == expected {
            result[i] = LetterVerdict::Correct;

            if let Some(count) = answer_available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong position, but letter still available
    for (i, &letter) in guessed.iter().enumerate() {
        if result[i] == LetterVerdict::Correct {
            continue;
        }
        if let Some(count) = answer_available.get_mut(&letter)
            && *count > 0
        {
            result[i] = LetterVerdict::Present;
            *count -= 1;
        }
    }

    Ok(Feedback(result))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn target_strategy() -> impl Strategy<Value = WordEntry> {
        "[a-e]{1,5}( [a-e]{1,5})?".prop_filter_map("entry must fit", |s| WordEntry::new(s).ok())
    }

    proptest! {
        #[test]
        fn never_marks_more_than_target_holds(
            target in target_strategy(),
            seed in proptest::collection::vec(0u8..5, 10),
        ) {
            let guess_text: String = seed
                .iter()
                .take(target.letter_count())
                .map(|&b| char::from(b'a' + b))
                .collect();
            prop_assume!(guess_text.len() == target.letter_count());

            let guess = Guess::new(&guess_text).unwrap();
            let feedback = evaluate(&target, &guess).unwrap();
            prop_assert_eq!(feedback.len(), guess.len());

            let counts = target.letter_counts();
            for letter in b'a'..=b'e' {
                let marked = guess
                    .text()
                    .bytes()
                    .zip(feedback.verdicts())
                    .filter(|&(g, &v)| g == letter && v != LetterVerdict::Absent)
                    .count();
                let available = usize::from(counts.get(&letter).copied().unwrap_or(0));
                prop_assert!(marked <= available);
            }
        }

        #[test]
        fn own_letters_are_all_correct(target in target_strategy()) {
            let guess = Guess::new(target.letters().to_uppercase()).unwrap();
            prop_assert!(evaluate(&target, &guess).unwrap().is_solved());
        }

        #[test]
        fn mismatched_length_always_fails(target in target_strategy(), extra in 1usize..4) {
            let guess = Guess::new(format!("{}{}", target.letters(), "z".repeat(extra))).unwrap();
            let is_mismatch = matches!(
                evaluate(&target, &guess),
                Err(GameError::LengthMismatch { .. })
            );
            prop_assert!(is_mismatch);
        }
    }
}
