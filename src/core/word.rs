//! Word list entry representation
//!
//! A `WordEntry` stores a climate term (possibly several words separated by
//! spaces) together with its space-stripped letters and an optional clue.

use crate::error::{GameError, GameResult};
use rustc_hash::FxHashMap;
use std::fmt;

/// Longest entry allowed, spaces included
pub const WORD_LENGTH_MAX: usize = 12;

/// A word or phrase that can be the daily target
///
/// Text is normalized to lowercase. Spaces are structural: they separate
/// words on the board but are never guessed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    text: String,
    letters: String,
    clue: Option<String>,
}

impl WordEntry {
    /// Create a new entry from a word or phrase
    ///
    /// # Errors
    /// Returns `GameError::InvalidEntry` if:
    /// - Length (spaces included) is 0 or above `WORD_LENGTH_MAX`
    /// - Contains anything other than ASCII letters and spaces
    /// - Starts or ends with a space, or contains no letters
    ///
    /// # Examples
    /// ```
    /// use climate_wordle::core::WordEntry;
    ///
    /// let entry = WordEntry::new("Heat Wave").unwrap();
    /// assert_eq!(entry.text(), "heat wave");
    /// assert_eq!(entry.letters(), "heatwave");
    /// assert_eq!(entry.letter_count(), 8);
    ///
    /// assert!(WordEntry::new("far too long entry").is_err());
    /// assert!(WordEntry::new("co2").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> GameResult<Self> {
        let text: String = text.into().to_lowercase();
        let invalid = |reason| GameError::InvalidEntry {
            entry: text.clone(),
            reason,
        };

        if text.is_empty() || text.len() > WORD_LENGTH_MAX {
            return Err(invalid("must be 1 to 12 characters long"));
        }

        if !text.chars().all(|c| c.is_ascii_lowercase() || c == ' ') {
            return Err(invalid("may only contain letters and spaces"));
        }

        if text.starts_with(' ') || text.ends_with(' ') {
            return Err(invalid("may not start or end with a space"));
        }

        let letters: String = text.chars().filter(|&c| c != ' ').collect();

        Ok(Self {
            text,
            letters,
            clue: None,
        })
    }

    /// Attach a clue; empty clues are dropped
    #[must_use]
    pub fn with_clue(mut self, clue: impl Into<String>) -> Self {
        let clue = clue.into();
        let clue = clue.trim();
        self.clue = (!clue.is_empty()).then(|| clue.to_string());
        self
    }

    /// The entry as written, spaces included
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The entry with spaces removed
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Number of guessable letters (spaces excluded)
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    /// Board layout of the entry
    ///
    /// Yields `Some(i)` for the i-th guessable letter and `None` for each space.
    ///
    /// # Examples
    /// ```
    /// use climate_wordle::core::WordEntry;
    ///
    /// let entry = WordEntry::new("sea level").unwrap();
    /// let layout: Vec<_> = entry.layout().collect();
    /// assert_eq!(layout[2], Some(2));
    /// assert_eq!(layout[3], None);
    /// assert_eq!(layout[4], Some(3));
    /// ```
    pub fn layout(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        let mut next = 0;
        self.text.chars().map(move |c| {
            if c == ' ' {
                None
            } else {
                next += 1;
                Some(next - 1)
            }
        })
    }

    /// Get the count of each letter in the entry, spaces excluded
    ///
    /// Used for verdict calculation with duplicate letters.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.letters.as_bytes() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_creation_valid() {
        let entry = WordEntry::new("drizzle").unwrap();
        assert_eq!(entry.text(), "drizzle");
        assert_eq!(entry.letters(), "drizzle");
        assert_eq!(entry.letter_count(), 7);
        assert_eq!(entry.clue(), None);
    }

    #[test]
    fn entry_uppercase_normalized() {
        let entry = WordEntry::new("Coral REEF").unwrap();
        assert_eq!(entry.text(), "coral reef");
        assert_eq!(entry.letters(), "coralreef");
    }

    #[test]
    fn entry_phrase_strips_spaces() {
        let entry = WordEntry::new("the climate").unwrap();
        assert_eq!(entry.letter_count(), 10);
        assert_eq!(entry.letters(), "theclimate");
    }

    #[test]
    fn entry_length_bounds() {
        assert!(WordEntry::new("a").is_ok());
        assert!(WordEntry::new("climate data").is_ok()); // exactly 12
        assert!(matches!(
            WordEntry::new("climate datas"),
            Err(GameError::InvalidEntry { .. })
        ));
        assert!(WordEntry::new("").is_err());
    }

    #[test]
    fn entry_invalid_characters() {
        assert!(WordEntry::new("co2").is_err());
        assert!(WordEntry::new("net-zero").is_err());
        assert!(WordEntry::new("café").is_err());
        assert!(WordEntry::new(" heat").is_err());
        assert!(WordEntry::new("heat ").is_err());
    }

    #[test]
    fn entry_clue() {
        let entry = WordEntry::new("heat dome").unwrap().with_clue("Put a lid on it!");
        assert_eq!(entry.clue(), Some("Put a lid on it!"));

        let blank = WordEntry::new("heat dome").unwrap().with_clue("   ");
        assert_eq!(blank.clue(), None);
    }

    #[test]
    fn entry_layout_marks_gaps() {
        let entry = WordEntry::new("air quality").unwrap();
        let layout: Vec<_> = entry.layout().collect();
        assert_eq!(layout.len(), 11);
        assert_eq!(layout[..4], [Some(0), Some(1), Some(2), None]);
        assert_eq!(layout[10], Some(9));
        assert_eq!(layout.iter().flatten().count(), entry.letter_count());
    }

    #[test]
    fn entry_letter_counts() {
        let entry = WordEntry::new("flash flood").unwrap();
        let counts = entry.letter_counts();
        assert_eq!(counts.get(&b'f'), Some(&2));
        assert_eq!(counts.get(&b'l'), Some(&2));
        assert_eq!(counts.get(&b'o'), Some(&2));
        assert_eq!(counts.get(&b'a'), Some(&1));
        assert_eq!(counts.get(&b' '), None);
    }

    #[test]
    fn entry_display() {
        let entry = WordEntry::new("Sea Level").unwrap();
        assert_eq!(format!("{entry}"), "sea level");
    }
}
