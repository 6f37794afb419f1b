//! Scoring and score persistence
//!
//! A won game is scored from the tiles it left unused:
//! `score = guesses_max - unused_tiles / word_length`.
//! Lower is better; a first-try win scores 1.

use super::session::GUESSES_MAX;
use crate::error::{GameError, GameResult};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Efficiency score in `(0, guesses_max]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// Score a game that used `attempts` full rows of `word_length` tiles
    ///
    /// # Errors
    /// Returns `GameError::InvalidOutcome` unless
    /// `1 <= attempts <= guesses_max` and `word_length >= 1`.
    pub fn calculate(attempts: usize, word_length: usize, guesses_max: usize) -> GameResult<Self> {
        if attempts == 0 || attempts > guesses_max || word_length == 0 {
            return Err(GameError::InvalidOutcome {
                attempts,
                word_length,
                max: guesses_max,
            });
        }

        let total_tiles = guesses_max * word_length;
        let used_tiles = attempts * word_length;
        let unused_tiles = total_tiles - used_tiles;

        Ok(Self(
            guesses_max as f64 - unused_tiles as f64 / word_length as f64,
        ))
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Score an outcome with the default attempt limit
///
/// # Errors
/// Returns `GameError::InvalidOutcome` for impossible outcomes.
///
/// # Examples
/// ```
/// use climate_wordle::game::report_outcome;
///
/// let score = report_outcome(3, 8).unwrap();
/// assert!((score.value() - 3.0).abs() < f64::EPSILON);
/// ```
pub fn report_outcome(attempts_used: usize, word_length: usize) -> GameResult<Score> {
    Score::calculate(attempts_used, word_length, GUESSES_MAX)
}

/// One submitted result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub puzzle: u64,
    pub date: NaiveDate,
    pub player: String,
    pub attempts: usize,
    pub score: Score,
}

/// Destination for finished-game results
pub trait ScoreSink {
    /// Persist or transmit a result
    ///
    /// # Errors
    /// Returns an error if the result could not be stored.
    fn submit(&mut self, record: &ScoreRecord) -> Result<()>;
}

/// Score sink appending JSON lines to a local file
#[derive(Debug, Clone)]
pub struct ScoreLog {
    path: PathBuf,
}

impl ScoreLog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record in the log
    ///
    /// A missing file yields no records. Unparseable lines are skipped.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read.
    pub fn load(&self) -> Result<Vec<ScoreRecord>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no score log yet");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;

        let records = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(i, line)| match serde_json::from_str(line) {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!(line = i + 1, %err, "skipping malformed score record");
                    None
                }
            })
            .collect();

        Ok(records)
    }
}

impl ScoreSink for ScoreLog {
    fn submit(&mut self, record: &ScoreRecord) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }

        let mut line = serde_json::to_string(record).context("serialize score record")?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("open {}", self.path.display()))?;
        file.write_all(line.as_bytes())
            .with_context(|| format!("append to {}", self.path.display()))?;

        info!(player = %record.player, score = record.score.value(), "score recorded");
        Ok(())
    }
}
