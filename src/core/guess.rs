//! Player guess representation

use crate::error::{GameError, GameResult};
use std::fmt;

/// A submitted guess: ASCII letters only, lowercase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    text: String,
}

impl Guess {
    /// Create a guess from raw player input
    ///
    /// Surrounding whitespace is trimmed and letters are lowercased. Length
    /// is not checked here; that depends on the target.
    ///
    /// # Errors
    /// Returns `GameError::InvalidCharacter` for the first character that is
    /// not an ASCII letter (interior spaces included).
    ///
    /// # Examples
    /// ```
    /// use climate_wordle::core::Guess;
    ///
    /// let guess = Guess::new("EARTH").unwrap();
    /// assert_eq!(guess.text(), "earth");
    ///
    /// assert!(Guess::new("heat wave").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> GameResult<Self> {
        let text = text.as_ref().trim();

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(GameError::InvalidCharacter(bad));
        }

        Ok(Self {
            text: text.to_ascii_lowercase(),
        })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the guess
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_normalized() {
        let guess = Guess::new("  DewPoint \n").unwrap();
        assert_eq!(guess.text(), "dewpoint");
        assert_eq!(guess.len(), 8);
    }

    #[test]
    fn guess_rejects_non_letters() {
        assert_eq!(Guess::new("heat wave"), Err(GameError::InvalidCharacter(' ')));
        assert_eq!(Guess::new("co2"), Err(GameError::InvalidCharacter('2')));
        assert_eq!(Guess::new("glacé"), Err(GameError::InvalidCharacter('é')));
    }

    #[test]
    fn guess_empty_is_allowed() {
        let guess = Guess::new("").unwrap();
        assert!(guess.is_empty());
    }
}
