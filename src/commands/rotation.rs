//! Upcoming rotation listing

use crate::core::Schedule;
use crate::error::GameResult;
use chrono::{NaiveDate, NaiveDateTime};

/// One day in the rotation
pub struct RotationEntry {
    pub number: u64,
    pub date: NaiveDate,
    pub word: String,
}

/// List the targets for `days` days starting at `from`
///
/// # Errors
///
/// Returns `GameError::InvalidEpoch` if `from` is before the schedule's epoch.
pub fn rotation(schedule: &Schedule, from: NaiveDateTime, days: usize) -> GameResult<Vec<RotationEntry>> {
    Ok(schedule
        .upcoming(from, days)?
        .into_iter()
        .map(|puzzle| RotationEntry {
            number: puzzle.number,
            date: puzzle.date,
            word: puzzle.target.text().to_string(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{CLIMATE_WORDS_COUNT, resolve_words};
    use chrono::TimeDelta;

    fn schedule() -> Schedule {
        Schedule::new(
            resolve_words(None).unwrap(),
            NaiveDate::from_ymd_opt(2024, 11, 25).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn rotation_starts_at_epoch() {
        let schedule = schedule();
        let entries = rotation(&schedule, schedule.epoch(), 3).unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].number, 1);
        assert_eq!(entries[0].word, "climate data");
        assert_eq!(entries[1].word, "clean energy");
        assert_eq!(entries[2].date, NaiveDate::from_ymd_opt(2024, 11, 27).unwrap());
    }

    #[test]
    fn rotation_wraps_around() {
        let schedule = schedule();
        let from = schedule.epoch() + TimeDelta::days(CLIMATE_WORDS_COUNT as i64 - 1);
        let entries = rotation(&schedule, from, 2).unwrap();

        assert_eq!(entries[0].word, "sea level");
        assert_eq!(entries[1].word, "climate data");
        assert_eq!(entries[1].number, CLIMATE_WORDS_COUNT as u64 + 1);
    }

    #[test]
    fn rotation_zero_days() {
        let schedule = schedule();
        assert!(rotation(&schedule, schedule.epoch(), 0).unwrap().is_empty());
    }
}
