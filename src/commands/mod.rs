//! Command implementations

pub mod check;
pub mod rotation;
pub mod simple;
pub mod stats;
pub mod today;

pub use check::{CheckResult, check_guess};
pub use rotation::{RotationEntry, rotation};
pub use simple::{PuzzleInfo, SimpleGame, run_simple};
pub use stats::{LEADERBOARD_LIMIT, daily_leaderboard};
pub use today::{TodayReport, today};
