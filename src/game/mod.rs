//! Game flow: session state machine and scoring

mod score;
mod session;

pub use score::{Score, ScoreLog, ScoreRecord, ScoreSink, report_outcome};
pub use session::{GUESSES_MAX, GameSession, GameState, Outcome, Turn};
