//! Daily target rotation
//!
//! The target for a day is `words[day_offset % words.len()]`, where the day
//! offset counts whole days elapsed since a fixed epoch.

use super::WordEntry;
use crate::error::{GameError, GameResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// Milliseconds in one day
pub const MS_PER_DAY: i64 = 86_400_000;

/// Whole days elapsed between `epoch` and `now`
///
/// # Errors
/// Returns `GameError::InvalidEpoch` if `now` is before `epoch`.
pub fn day_offset(epoch: NaiveDateTime, now: NaiveDateTime) -> GameResult<u64> {
    let elapsed = now.signed_duration_since(epoch).num_milliseconds();
    if elapsed < 0 {
        return Err(GameError::InvalidEpoch { epoch, now });
    }
    Ok((elapsed / MS_PER_DAY) as u64)
}

/// Pick the target for `now` from an ordered word list
///
/// # Errors
/// - `GameError::EmptyWordList` if `words` is empty
/// - `GameError::InvalidEpoch` if `now` is before `epoch`
///
/// # Examples
/// ```
/// use chrono::{NaiveDate, TimeDelta};
/// use climate_wordle::core::{WordEntry, select_target};
///
/// let words = vec![WordEntry::new("data").unwrap(), WordEntry::new("earth").unwrap()];
/// let epoch = NaiveDate::from_ymd_opt(2024, 11, 25).unwrap().and_hms_opt(0, 0, 0).unwrap();
///
/// let target = select_target(&words, epoch, epoch + TimeDelta::days(3)).unwrap();
/// assert_eq!(target.text(), "earth");
/// ```
pub fn select_target(
    words: &[WordEntry],
    epoch: NaiveDateTime,
    now: NaiveDateTime,
) -> GameResult<&WordEntry> {
    if words.is_empty() {
        return Err(GameError::EmptyWordList);
    }
    let day = day_offset(epoch, now)?;
    let index = (day % words.len() as u64) as usize;
    Ok(&words[index])
}

/// A day's puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPuzzle<'a> {
    /// 1-based puzzle number (day offset + 1)
    pub number: u64,
    pub date: NaiveDate,
    pub target: &'a WordEntry,
}

/// Ordered word list paired with the epoch it rotates from
#[derive(Debug, Clone)]
pub struct Schedule {
    words: Vec<WordEntry>,
    epoch: NaiveDateTime,
}

impl Schedule {
    /// Create a schedule starting at local midnight of `epoch`
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if `words` is empty.
    pub fn new(words: Vec<WordEntry>, epoch: NaiveDate) -> GameResult<Self> {
        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }
        Ok(Self {
            words,
            epoch: epoch.and_time(NaiveTime::MIN),
        })
    }

    #[must_use]
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    #[must_use]
    pub const fn epoch(&self) -> NaiveDateTime {
        self.epoch
    }

    /// The puzzle in effect at `now`
    ///
    /// # Errors
    /// Returns `GameError::InvalidEpoch` if `now` is before the epoch.
    pub fn puzzle_for(&self, now: NaiveDateTime) -> GameResult<DailyPuzzle<'_>> {
        let day = day_offset(self.epoch, now)?;
        let target = select_target(&self.words, self.epoch, now)?;
        Ok(DailyPuzzle {
            number: day + 1,
            date: now.date(),
            target,
        })
    }

    /// Puzzles for `days` consecutive days starting with the day of `from`
    ///
    /// # Errors
    /// - `GameError::InvalidEpoch` if `from` is before the epoch
    /// - `GameError::DateOutOfRange` if a listed day is past the last
    ///   representable date
    pub fn upcoming(&self, from: NaiveDateTime, days: usize) -> GameResult<Vec<DailyPuzzle<'_>>> {
        (0..days)
            .map(|i| {
                let day = i64::try_from(i)
                    .ok()
                    .and_then(TimeDelta::try_days)
                    .and_then(|delta| from.checked_add_signed(delta))
                    .ok_or(GameError::DateOutOfRange { from, days: i })?;
                self.puzzle_for(day)
            })
            .collect()
    }
}
