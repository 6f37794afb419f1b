//! Display functions for command results

use super::formatters::{GAME_TITLE, feedback_to_emoji};
use crate::commands::{CheckResult, RotationEntry, TodayReport};
use crate::core::{Feedback, LetterVerdict, WordEntry};
use crate::game::{ScoreRecord, Turn};
use colored::{ColoredString, Colorize};
use std::fmt::Write;

fn tile(letter: char, verdict: LetterVerdict) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match verdict {
        LetterVerdict::Correct => text.black().on_green().bold(),
        LetterVerdict::Present => text.black().on_yellow().bold(),
        LetterVerdict::Absent => text.white().on_bright_black(),
    }
}

/// Letters of a guess as colored tiles, keeping the target's word gaps
#[must_use]
pub fn colored_letters(letters: &str, feedback: &Feedback, target: &WordEntry) -> String {
    let letters = letters.as_bytes();
    let mut row = String::new();
    for slot in target.layout() {
        match slot.and_then(|i| Some((*letters.get(i)?, *feedback.verdicts().get(i)?))) {
            Some((letter, verdict)) => {
                let _ = write!(row, "{}", tile(char::from(letter), verdict));
            }
            None => row.push_str("   "),
        }
    }
    row
}

/// A turn as a row of colored tiles
#[must_use]
pub fn colored_row(turn: &Turn, target: &WordEntry) -> String {
    colored_letters(turn.guess.text(), &turn.feedback, target)
}

/// Print the summary of today's puzzle
pub fn print_today(report: &TodayReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} #{} · {}",
        GAME_TITLE.bright_green().bold(),
        report.number,
        report.date
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n  {}", report.layout.bright_white().bold());
    println!("  {} letters", report.letter_count);

    if let Some(clue) = &report.clue {
        println!("\n  Today's theme: {}", clue.bright_yellow());
    }
    if let Some(answer) = &report.answer {
        println!("\n  Answer: {}", answer.to_uppercase().green().bold());
    }
    println!();
}

/// Print the upcoming rotation
pub fn print_rotation(entries: &[RotationEntry]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROTATION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for entry in entries {
        println!(
            "  #{:<5} {}  {}",
            entry.number,
            entry.date,
            entry.word.to_uppercase().bright_white()
        );
    }
    println!();
}

/// Print the verdicts for a single checked guess
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n  {}",
        colored_letters(result.guess.text(), &result.feedback, &result.target)
    );
    println!(
        "  {}",
        feedback_to_emoji(&result.feedback, &result.target)
    );
    println!(
        "\n  Correct: {}  Present: {}  Absent: {}",
        result.feedback.count_correct().to_string().green(),
        result.feedback.count_present().to_string().yellow(),
        (result.feedback.len() - result.feedback.count_correct() - result.feedback.count_present())
            .to_string()
            .bright_black()
    );
    if result.feedback.is_solved() {
        println!("  {}", "✅ Solved!".green().bold());
    }
    println!();
}

/// Print the daily leaderboard
pub fn print_leaderboard(date: chrono::NaiveDate, records: &[ScoreRecord]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "DAILY STATS:".bright_cyan().bold(),
        date.to_string().bright_yellow()
    );
    println!("{}", "═".repeat(60).cyan());

    if records.is_empty() {
        println!("\n  No scores recorded yet.\n");
        return;
    }

    println!();
    for (i, record) in records.iter().enumerate() {
        println!(
            "  {:>3}. {}: {}",
            (i + 1).to_string().bright_black(),
            record.player.bright_white().bold(),
            record.score
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Guess, evaluate};

    #[test]
    fn colored_letters_keep_gaps() {
        colored::control::set_override(false);
        let target = WordEntry::new("sea level").unwrap();
        let guess = Guess::new("sealevel").unwrap();
        let feedback = evaluate(&target, &guess).unwrap();

        let row = colored_letters(guess.text(), &feedback, &target);
        assert_eq!(row, " S  E  A     L  E  V  E  L ");
    }
}
