//! Game session state machine
//!
//! `AwaitingInput → Evaluating → (AwaitingInput | Won | Lost)`
//!
//! The session owns the guess buffer and the turn history. `Evaluating` is
//! the input lock: it is entered when a guess of the right length is
//! submitted and always left before `submit` returns.

use super::score::Score;
use crate::core::{Feedback, Guess, WordEntry, evaluate};
use crate::error::{GameError, GameResult};
use tracing::{debug, info};

/// Default number of attempts per game
pub const GUESSES_MAX: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingInput,
    Evaluating,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { attempts: usize },
    Lost { attempts: usize },
}

/// One evaluated guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Guess,
    pub feedback: Feedback,
}

/// A single game against a fixed target
#[derive(Debug, Clone)]
pub struct GameSession {
    target: WordEntry,
    guesses_max: usize,
    buffer: String,
    turns: Vec<Turn>,
    state: GameState,
}

impl GameSession {
    #[must_use]
    pub fn new(target: WordEntry) -> Self {
        Self::with_guesses_max(target, GUESSES_MAX)
    }

    /// Create a session allowing `guesses_max` attempts (at least one)
    #[must_use]
    pub fn with_guesses_max(target: WordEntry, guesses_max: usize) -> Self {
        Self {
            target,
            guesses_max: guesses_max.max(1),
            buffer: String::new(),
            turns: Vec::new(),
            state: GameState::AwaitingInput,
        }
    }

    #[must_use]
    pub const fn target(&self) -> &WordEntry {
        &self.target
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub const fn guesses_max(&self) -> usize {
        self.guesses_max
    }

    /// Attempts used so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.guesses_max - self.turns.len()
    }

    /// Letters a guess must have
    #[must_use]
    pub fn required_length(&self) -> usize {
        self.target.letter_count()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        let attempts = self.attempts();
        match self.state {
            GameState::Won => Some(Outcome::Won { attempts }),
            GameState::Lost => Some(Outcome::Lost { attempts }),
            GameState::AwaitingInput | GameState::Evaluating => None,
        }
    }

    /// Score of a won game; lost or unfinished games have none
    #[must_use]
    pub fn score(&self) -> Option<Score> {
        match self.outcome()? {
            Outcome::Won { attempts } => {
                Score::calculate(attempts, self.required_length(), self.guesses_max).ok()
            }
            Outcome::Lost { .. } => None,
        }
    }

    /// Append a letter to the guess buffer
    ///
    /// Returns `false` when the buffer already holds a full guess.
    ///
    /// # Errors
    /// - `GameError::GameOver` once the game has ended
    /// - `GameError::InvalidCharacter` if `letter` is not an ASCII letter
    pub fn push_letter(&mut self, letter: char) -> GameResult<bool> {
        self.ensure_accepting()?;
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::InvalidCharacter(letter));
        }
        if self.buffer.len() >= self.required_length() {
            return Ok(false);
        }
        self.buffer.push(letter.to_ascii_lowercase());
        Ok(true)
    }

    /// Remove the last buffered letter; does nothing once the game has ended
    pub fn delete_letter(&mut self) -> Option<char> {
        if self.is_over() {
            return None;
        }
        self.buffer.pop()
    }

    /// Submit the guess buffer
    ///
    /// # Errors
    /// See [`GameSession::submit_guess`]. On error the buffer is kept.
    pub fn submit(&mut self) -> GameResult<&Turn> {
        let input = self.buffer.clone();
        self.submit_guess(&input)
    }

    /// Evaluate `input` as the next guess and advance the state machine
    ///
    /// # Errors
    /// - `GameError::GameOver` once the game has ended
    /// - `GameError::InvalidCharacter` for non-letter input
    /// - `GameError::LengthMismatch` if the letter count is wrong; the session
    ///   stays in `AwaitingInput` and no attempt is used
    pub fn submit_guess(&mut self, input: &str) -> GameResult<&Turn> {
        self.ensure_accepting()?;
        let guess = Guess::new(input)?;

        let required = self.required_length();
        if guess.len() != required {
            debug!(expected = required, actual = guess.len(), "rejected guess");
            return Err(GameError::LengthMismatch {
                expected: required,
                actual: guess.len(),
            });
        }

        self.state = GameState::Evaluating;
        let feedback = match evaluate(&self.target, &guess) {
            Ok(feedback) => feedback,
            Err(err) => {
                self.state = GameState::AwaitingInput;
                return Err(err);
            }
        };

        let solved = guess.text() == self.target.letters();
        self.turns.push(Turn { guess, feedback });
        self.buffer.clear();

        self.state = if solved {
            GameState::Won
        } else if self.turns.len() >= self.guesses_max {
            GameState::Lost
        } else {
            GameState::AwaitingInput
        };

        match self.state {
            GameState::Won => info!(attempts = self.turns.len(), "game won"),
            GameState::Lost => info!(word = %self.target, "game lost"),
            GameState::AwaitingInput | GameState::Evaluating => {
                debug!(attempt = self.turns.len(), "guess evaluated");
            }
        }

        self.turns.last().ok_or(GameError::GameOver)
    }

    fn ensure_accepting(&self) -> GameResult<()> {
        if self.is_over() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterVerdict::{Absent, Correct, Present};

    fn session(target: &str) -> GameSession {
        GameSession::new(WordEntry::new(target).unwrap())
    }

    #[test]
    fn new_session_awaits_input() {
        let game = session("heat wave");
        assert_eq!(game.state(), GameState::AwaitingInput);
        assert_eq!(game.required_length(), 8);
        assert_eq!(game.attempts_remaining(), GUESSES_MAX);
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn buffer_stops_at_required_length() {
        let mut game = session("data");
        for c in "DATAX".chars().take(4) {
            assert!(game.push_letter(c).unwrap());
        }
        assert!(!game.push_letter('x').unwrap());
        assert_eq!(game.buffer(), "data");

        assert_eq!(game.delete_letter(), Some('a'));
        assert_eq!(game.buffer(), "dat");
    }

    #[test]
    fn buffer_rejects_non_letters() {
        let mut game = session("data");
        assert_eq!(game.push_letter(' '), Err(GameError::InvalidCharacter(' ')));
        assert_eq!(game.push_letter('7'), Err(GameError::InvalidCharacter('7')));
        assert!(game.buffer().is_empty());
    }

    #[test]
    fn short_submission_keeps_buffer_and_attempts() {
        let mut game = session("earth");
        game.push_letter('e').unwrap();
        game.push_letter('a').unwrap();

        assert_eq!(
            game.submit().unwrap_err(),
            GameError::LengthMismatch {
                expected: 5,
                actual: 2
            }
        );
        assert_eq!(game.state(), GameState::AwaitingInput);
        assert_eq!(game.buffer(), "ea");
        assert_eq!(game.attempts(), 0);
    }

    #[test]
    fn wrong_guess_returns_to_input() {
        let mut game = session("data");
        let turn = game.submit_guess("aadt").unwrap();
        assert_eq!(turn.feedback.verdicts(), &[Present, Correct, Present, Present]);

        assert_eq!(game.state(), GameState::AwaitingInput);
        assert_eq!(game.attempts(), 1);
        assert_eq!(game.attempts_remaining(), 5);
    }

    #[test]
    fn correct_guess_wins() {
        let mut game = session("Sea Level");
        game.submit_guess("floodmap").unwrap();
        let turn = game.submit_guess("SEALEVEL").unwrap();
        assert!(turn.feedback.is_solved());

        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.outcome(), Some(Outcome::Won { attempts: 2 }));
        assert!(game.score().is_some());
    }

    #[test]
    fn submit_from_buffer() {
        let mut game = session("data");
        for c in "data".chars() {
            game.push_letter(c).unwrap();
        }
        game.submit().unwrap();
        assert_eq!(game.state(), GameState::Won);
        assert!(game.buffer().is_empty());
    }

    #[test]
    fn exhausting_attempts_loses() {
        let mut game = session("data");
        for _ in 0..GUESSES_MAX {
            let turn = game.submit_guess("blob").unwrap();
            assert_eq!(turn.feedback.verdicts(), &[Absent; 4]);
        }

        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(
            game.outcome(),
            Some(Outcome::Lost {
                attempts: GUESSES_MAX
            })
        );
        assert_eq!(game.score(), None);
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let mut game = GameSession::with_guesses_max(WordEntry::new("data").unwrap(), 2);
        game.submit_guess("blob").unwrap();
        game.submit_guess("data").unwrap();
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn terminal_states_reject_input() {
        let mut game = session("data");
        game.submit_guess("data").unwrap();

        assert_eq!(game.push_letter('a'), Err(GameError::GameOver));
        assert_eq!(game.delete_letter(), None);
        assert_eq!(game.submit_guess("data").unwrap_err(), GameError::GameOver);
        assert_eq!(game.attempts(), 1);
    }

    #[test]
    fn guesses_max_at_least_one() {
        let game = GameSession::with_guesses_max(WordEntry::new("data").unwrap(), 0);
        assert_eq!(game.guesses_max(), 1);
    }
}
