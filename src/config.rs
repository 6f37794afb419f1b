//! Game configuration stored in `climate_wordle.toml`.

use crate::game::GUESSES_MAX;
use anyhow::{Context, Result, anyhow};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default config file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "climate_wordle.toml";

/// First day of the rotation
pub const DEFAULT_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2024, 11, 25) {
    Some(date) => date,
    None => panic!("invalid default epoch"),
};

/// Game configuration (TOML).
///
/// Missing fields take their defaults, so an empty file is valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// Day 0 of the rotation, written as `"YYYY-MM-DD"`.
    pub epoch: NaiveDate,

    /// Attempts per game.
    pub guesses_max: usize,

    /// Custom `word|clue` list; the embedded list is used when unset.
    pub word_list: Option<PathBuf>,

    /// JSON-lines file receiving won-game scores.
    pub scores_path: PathBuf,

    /// Show the day's clue when a game starts.
    pub show_clue: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            guesses_max: GUESSES_MAX,
            word_list: None,
            scores_path: PathBuf::from("climate_wordle_scores.jsonl"),
            show_clue: true,
        }
    }
}

impl GameConfig {
    /// Check values that parse but cannot be played with
    ///
    /// # Errors
    /// Returns an error if `guesses_max` is zero or `scores_path` is empty.
    pub fn validate(&self) -> Result<()> {
        if self.guesses_max == 0 {
            return Err(anyhow!("guesses_max must be > 0"));
        }
        if self.scores_path.as_os_str().is_empty() {
            return Err(anyhow!("scores_path must not be empty"));
        }
        Ok(())
    }

    /// Local midnight of the epoch day
    #[must_use]
    pub fn epoch_start(&self) -> NaiveDateTime {
        self.epoch.and_time(NaiveTime::MIN)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `GameConfig::default()`.
///
/// # Errors
/// Returns an error if the file exists but cannot be read, is not valid
/// TOML, or fails [`GameConfig::validate`].
pub fn load_config(path: &Path) -> Result<GameConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config not found, using defaults");
        let cfg = GameConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GameConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
