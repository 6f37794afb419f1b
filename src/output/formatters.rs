//! Formatting utilities for terminal output

use crate::core::{Feedback, WordEntry};
use crate::game::{GameSession, GameState};

/// Title used in share text and headers
pub const GAME_TITLE: &str = "Climate Wordle";

/// Blank board row for an entry, e.g. `_ _ _ _   _ _ _ _` for "heat wave"
#[must_use]
pub fn word_layout(entry: &WordEntry) -> String {
    entry
        .layout()
        .map(|slot| if slot.is_some() { "_" } else { " " })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Feedback as emoji, with a gap wherever the target has a space
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback, target: &WordEntry) -> String {
    target
        .layout()
        .map(|slot| match slot.and_then(|i| feedback.verdicts().get(i)) {
            Some(verdict) => verdict.to_emoji(),
            None => ' ',
        })
        .collect()
}

/// Spoiler-free summary of a finished game
///
/// ```text
/// Climate Wordle #12 3/6
///
/// ⬛🟨⬛⬛ ⬛🟩🟨⬛
/// ...
/// ```
#[must_use]
pub fn share_text(puzzle: Option<u64>, session: &GameSession) -> String {
    let attempts = match session.state() {
        GameState::Won => session.attempts().to_string(),
        _ => "X".to_string(),
    };
    let title = match puzzle {
        Some(number) => format!("{GAME_TITLE} #{number}"),
        None => format!("{GAME_TITLE} (practice)"),
    };

    let mut text = format!("{title} {attempts}/{}\n", session.guesses_max());
    for turn in session.turns() {
        text.push('\n');
        text.push_str(&feedback_to_emoji(&turn.feedback, session.target()));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_single_word() {
        let entry = WordEntry::new("data").unwrap();
        assert_eq!(word_layout(&entry), "_ _ _ _");
    }

    #[test]
    fn layout_phrase() {
        let entry = WordEntry::new("heat dome").unwrap();
        assert_eq!(word_layout(&entry), "_ _ _ _   _ _ _ _");
    }

    #[test]
    fn emoji_keeps_word_gap() {
        let entry = WordEntry::new("sea level").unwrap();
        let mut session = GameSession::new(entry.clone());
        let turn = session.submit_guess("sealevel").unwrap();
        assert_eq!(feedback_to_emoji(&turn.feedback, &entry), "🟩🟩🟩 🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_text_for_win() {
        let mut session = GameSession::new(WordEntry::new("data").unwrap());
        session.submit_guess("adat").unwrap();
        session.submit_guess("data").unwrap();

        let text = share_text(Some(12), &session);
        assert_eq!(text, "Climate Wordle #12 2/6\n\n🟨🟨🟨🟨\n🟩🟩🟩🟩");
    }

    #[test]
    fn share_text_for_loss() {
        let mut session = GameSession::with_guesses_max(WordEntry::new("data").unwrap(), 1);
        session.submit_guess("blob").unwrap();

        let text = share_text(None, &session);
        assert!(text.starts_with("Climate Wordle (practice) X/1\n"));
        assert!(text.ends_with("⬛⬛⬛⬛"));
    }
}
