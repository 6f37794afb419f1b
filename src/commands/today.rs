//! Today's puzzle summary

use crate::core::Schedule;
use crate::error::GameResult;
use crate::output::formatters::word_layout;
use chrono::{NaiveDate, NaiveDateTime};

/// What the player may know about a day's puzzle before playing
pub struct TodayReport {
    pub number: u64,
    pub date: NaiveDate,
    pub letter_count: usize,
    pub layout: String,
    pub clue: Option<String>,
    /// The answer, only when explicitly revealed
    pub answer: Option<String>,
}

/// Describe the puzzle in effect at `now`
///
/// # Errors
///
/// Returns `GameError::InvalidEpoch` if `now` is before the schedule's epoch.
pub fn today(schedule: &Schedule, now: NaiveDateTime, reveal: bool) -> GameResult<TodayReport> {
    let puzzle = schedule.puzzle_for(now)?;
    let target = puzzle.target;

    Ok(TodayReport {
        number: puzzle.number,
        date: puzzle.date,
        letter_count: target.letter_count(),
        layout: word_layout(target),
        clue: target.clue().map(str::to_string),
        answer: reveal.then(|| target.text().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;
    use crate::error::GameError;
    use chrono::{NaiveTime, TimeDelta};

    fn schedule() -> Schedule {
        let words = vec![
            WordEntry::new("data").unwrap(),
            WordEntry::new("heat dome")
                .unwrap()
                .with_clue("Put a lid on it!"),
        ];
        Schedule::new(words, NaiveDate::from_ymd_opt(2024, 11, 25).unwrap()).unwrap()
    }

    fn day(offset: i64) -> NaiveDateTime {
        schedule().epoch() + TimeDelta::days(offset) + TimeDelta::hours(10)
    }

    #[test]
    fn today_hides_answer_by_default() {
        let report = today(&schedule(), day(1), false).unwrap();
        assert_eq!(report.number, 2);
        assert_eq!(report.letter_count, 8);
        assert_eq!(report.layout, "_ _ _ _   _ _ _ _");
        assert_eq!(report.clue.as_deref(), Some("Put a lid on it!"));
        assert!(report.answer.is_none());
    }

    #[test]
    fn today_reveal() {
        let report = today(&schedule(), day(2), true).unwrap();
        assert_eq!(report.answer.as_deref(), Some("data"));
        assert_eq!(report.clue, None);
    }

    #[test]
    fn today_before_epoch() {
        let before = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_time(NaiveTime::MIN);
        assert!(matches!(
            today(&schedule(), before, false),
            Err(GameError::InvalidEpoch { .. })
        ));
    }
}
