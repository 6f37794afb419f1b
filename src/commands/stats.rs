//! Daily leaderboard from recorded scores

use crate::game::ScoreRecord;
use chrono::NaiveDate;

/// Default number of leaderboard rows
pub const LEADERBOARD_LIMIT: usize = 100;

/// Records for `date`, best (lowest) score first
///
/// Ties keep submission order. At most `limit` records are returned.
#[must_use]
pub fn daily_leaderboard(records: &[ScoreRecord], date: NaiveDate, limit: usize) -> Vec<ScoreRecord> {
    let mut day: Vec<ScoreRecord> = records.iter().filter(|r| r.date == date).cloned().collect();
    day.sort_by(|a, b| a.score.value().total_cmp(&b.score.value()));
    day.truncate(limit);
    day
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::report_outcome;

    fn record(player: &str, day: u32, attempts: usize) -> ScoreRecord {
        ScoreRecord {
            puzzle: u64::from(day),
            date: NaiveDate::from_ymd_opt(2024, 12, day).unwrap(),
            player: player.to_string(),
            attempts,
            score: report_outcome(attempts, 6).unwrap(),
        }
    }

    #[test]
    fn leaderboard_filters_and_sorts() {
        let records = vec![
            record("ada", 1, 4),
            record("grace", 2, 5),
            record("linus", 1, 2),
            record("barbara", 1, 4),
        ];
        let board = daily_leaderboard(&records, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(), 10);

        let players: Vec<_> = board.iter().map(|r| r.player.as_str()).collect();
        assert_eq!(players, ["linus", "ada", "barbara"]);
    }

    #[test]
    fn leaderboard_limit() {
        let records: Vec<_> = (0..5).map(|i| record(&format!("p{i}"), 3, 6)).collect();
        let board = daily_leaderboard(&records, NaiveDate::from_ymd_opt(2024, 12, 3).unwrap(), 2);
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].player, "p0");
    }

    #[test]
    fn leaderboard_empty_day() {
        let records = vec![record("ada", 1, 4)];
        let board = daily_leaderboard(&records, NaiveDate::from_ymd_opt(2024, 12, 9).unwrap(), 10);
        assert!(board.is_empty());
    }
}
