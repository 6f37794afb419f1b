//! Word list loading utilities
//!
//! Lists are plain text, one entry per line, optionally followed by `|` and
//! a clue. Blank lines and `#` comments are ignored. Line order is the
//! rotation order.

use crate::core::WordEntry;
use crate::error::{GameError, GameResult};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Parse one `word|clue` line
///
/// # Errors
/// Returns `GameError::InvalidEntry` if the word part is not a valid entry.
///
/// # Examples
/// ```
/// use climate_wordle::wordlists::loader::parse_entry;
///
/// let entry = parse_entry("wind power|This blows!").unwrap();
/// assert_eq!(entry.text(), "wind power");
/// assert_eq!(entry.clue(), Some("This blows!"));
/// ```
pub fn parse_entry(line: &str) -> GameResult<WordEntry> {
    match line.split_once('|') {
        Some((word, clue)) => Ok(WordEntry::new(word.trim())?.with_clue(clue)),
        None => WordEntry::new(line.trim()),
    }
}

/// Parse a whole list, skipping invalid lines
///
/// # Errors
/// Returns `GameError::EmptyWordList` if no valid entry remains.
pub fn parse_list(content: &str) -> GameResult<Vec<WordEntry>> {
    let words: Vec<WordEntry> = content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .filter_map(|(i, line)| match parse_entry(line) {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(line = i + 1, %err, "skipping word list entry");
                None
            }
        })
        .collect();

    if words.is_empty() {
        return Err(GameError::EmptyWordList);
    }
    Ok(words)
}

/// Load words from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds no valid entry.
///
/// # Examples
/// ```no_run
/// use climate_wordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/climate_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<WordEntry>> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).with_context(|| format!("read word list {}", path.display()))?;

    let words =
        parse_list(&content).with_context(|| format!("load word list {}", path.display()))?;
    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Convert embedded `(word, clue)` pairs to entries
///
/// # Examples
/// ```
/// use climate_wordle::wordlists::loader::entries_from_slice;
/// use climate_wordle::wordlists::CLIMATE_WORDS;
///
/// let words = entries_from_slice(CLIMATE_WORDS);
/// assert_eq!(words.len(), CLIMATE_WORDS.len());
/// ```
#[must_use]
pub fn entries_from_slice(slice: &[(&str, &str)]) -> Vec<WordEntry> {
    slice
        .iter()
        .filter_map(|&(word, clue)| WordEntry::new(word).ok().map(|e| e.with_clue(clue)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_entry_without_clue() {
        let entry = parse_entry("  drizzle ").unwrap();
        assert_eq!(entry.text(), "drizzle");
        assert_eq!(entry.clue(), None);
    }

    #[test]
    fn parse_entry_invalid() {
        assert!(parse_entry("net-zero|Balance").is_err());
        assert!(parse_entry("|no word").is_err());
    }

    #[test]
    fn parse_list_keeps_order_and_skips_noise() {
        let content = "# climate list\nheat dome|Put a lid on it!\n\nco2 levels\ncarbon tax\n";
        let words = parse_list(content).unwrap();

        let texts: Vec<_> = words.iter().map(WordEntry::text).collect();
        assert_eq!(texts, ["heat dome", "carbon tax"]);
        assert_eq!(words[0].clue(), Some("Put a lid on it!"));
    }

    #[test]
    fn parse_list_empty() {
        assert_eq!(parse_list("# nothing\n\n"), Err(GameError::EmptyWordList));
        assert_eq!(parse_list("way too long for the board"), Err(GameError::EmptyWordList));
    }

    #[test]
    fn load_from_file_reads_list() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("words.txt");
        fs::write(&path, "data\nearth|Home\n").unwrap();

        let words = load_from_file(&path).expect("load");
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].clue(), Some("Home"));
    }

    #[test]
    fn load_from_missing_file_fails() {
        let temp = tempfile::tempdir().expect("tempdir");
        assert!(load_from_file(temp.path().join("nope.txt")).is_err());
    }

    #[test]
    fn entries_from_slice_skips_invalid() {
        let input = &[("flood map", "Ya, ya, we know."), ("way too long entry", ""), ("dewpoint", "")];
        let words = entries_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "flood map");
        assert_eq!(words[1].clue(), None);
    }
}
