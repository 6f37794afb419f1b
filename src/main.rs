//! Climate Wordle - CLI
//!
//! Daily climate word game with TUI and line-based modes.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};
use climate_wordle::{
    commands::{
        LEADERBOARD_LIMIT, PuzzleInfo, SimpleGame, check_guess, daily_leaderboard, rotation,
        run_simple, today,
    },
    config::{DEFAULT_CONFIG_PATH, GameConfig, load_config},
    core::Schedule,
    game::{GameSession, ScoreLog, ScoreSink},
    logging,
    output::{
        formatters::share_text, print_check_result, print_leaderboard, print_rotation,
        print_today,
    },
    wordlists::resolve_words,
};
use rand::seq::IndexedRandom;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "climate_wordle",
    about = "A daily Wordle of climate and weather terms",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Custom `word|clue` list (overrides the config file)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Play a random word instead of today's; scores are not recorded
    #[arg(short, long, global = true)]
    practice: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple,

    /// Show today's puzzle
    Today {
        /// Also print the answer
        #[arg(long)]
        reveal: bool,

        /// Show the puzzle for another day (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// List the targets for upcoming days
    Rotation {
        /// First day to list (YYYY-MM-DD, default today)
        #[arg(short, long)]
        from: Option<NaiveDate>,

        /// Number of days to list
        #[arg(short = 'n', long, default_value = "7")]
        days: usize,
    },

    /// Evaluate a single guess against any target
    Check {
        /// The target word or phrase
        target: String,

        /// The guess, without spaces
        guess: String,
    },

    /// Show the daily leaderboard
    Stats {
        /// Day to show (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Maximum number of rows
        #[arg(short, long, default_value_t = LEADERBOARD_LIMIT)]
        limit: usize,
    },
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    let now = Local::now().naive_local();
    debug!(%now, epoch = %config.epoch, "starting");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.words.as_deref(), cli.practice, &config, now),
        Commands::Simple => run_simple_command(cli.words.as_deref(), cli.practice, &config, now),
        Commands::Today { reveal, date } => {
            let schedule = load_schedule(cli.words.as_deref(), &config)?;
            let report = today(&schedule, date.map_or(now, midnight), reveal)?;
            print_today(&report);
            Ok(())
        }
        Commands::Rotation { from, days } => {
            let schedule = load_schedule(cli.words.as_deref(), &config)?;
            let entries = rotation(&schedule, from.map_or(now, midnight), days)?;
            print_rotation(&entries);
            Ok(())
        }
        Commands::Check { target, guess } => {
            let result = check_guess(&target, &guess)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Stats { date, limit } => {
            let date = date.unwrap_or_else(|| now.date());
            let records = ScoreLog::new(&config.scores_path).load()?;
            print_leaderboard(date, &daily_leaderboard(&records, date, limit));
            Ok(())
        }
    }
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Word list from the CLI flag, then the config file, then the embedded list
fn load_schedule(words: Option<&Path>, config: &GameConfig) -> Result<Schedule> {
    let path = words.or(config.word_list.as_deref());
    let entries = resolve_words(path)?;
    Ok(Schedule::new(entries, config.epoch)?)
}

/// Session for today's puzzle, or for a random word in practice mode
fn new_game(
    words: Option<&Path>,
    practice: bool,
    config: &GameConfig,
    now: NaiveDateTime,
) -> Result<(GameSession, Option<PuzzleInfo>, Option<String>)> {
    let schedule = load_schedule(words, config)?;

    let (target, puzzle) = if practice {
        let target = schedule
            .words()
            .choose(&mut rand::rng())
            .context("word list is empty")?;
        (target.clone(), None)
    } else {
        let puzzle = schedule.puzzle_for(now)?;
        let info = PuzzleInfo {
            number: puzzle.number,
            date: puzzle.date,
        };
        (puzzle.target.clone(), Some(info))
    };

    let clue = if config.show_clue {
        target.clue().map(str::to_string)
    } else {
        None
    };
    let session = GameSession::with_guesses_max(target, config.guesses_max);
    Ok((session, puzzle, clue))
}

fn run_play_command(
    words: Option<&Path>,
    practice: bool,
    config: &GameConfig,
    now: NaiveDateTime,
) -> Result<()> {
    use climate_wordle::interactive::{App, run_tui};

    let (session, puzzle, clue) = new_game(words, practice, config, now)?;
    let scores = puzzle.map(|_| ScoreLog::new(&config.scores_path));

    let app = run_tui(App::new(session, puzzle, clue, scores))?;
    if app.session.is_over() {
        println!("{}", share_text(app.puzzle.map(|p| p.number), &app.session));
    }
    Ok(())
}

fn run_simple_command(
    words: Option<&Path>,
    practice: bool,
    config: &GameConfig,
    now: NaiveDateTime,
) -> Result<()> {
    let (session, puzzle, clue) = new_game(words, practice, config, now)?;
    let mut log = ScoreLog::new(&config.scores_path);
    let sink: Option<&mut dyn ScoreSink> = if puzzle.is_some() {
        Some(&mut log)
    } else {
        None
    };

    let game = SimpleGame {
        session,
        puzzle,
        clue,
        sink,
    };
    run_simple(game, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
