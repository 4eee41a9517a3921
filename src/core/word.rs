//! Five-unit word representation
//!
//! A Word stores cleaned Gurmukhi text that segments into exactly five
//! character units, along with the units themselves for evaluation.

use super::classify::clean;
use super::segment::{base_key, units};
use std::fmt;
use thiserror::Error;

/// Number of character units in a playable word
pub const WORD_UNITS: usize = 5;

/// A five-unit word with cached unit boundaries
///
/// Units are stored as owned strings so that evaluation can compare them
/// without re-segmenting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    units: [String; WORD_UNITS],
}

/// Error type for text that is not a playable word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    /// Nothing left after cleaning
    #[error("word is empty")]
    Empty,

    /// Cleaned text does not segment into five units
    #[error("word must be exactly 5 letters, got {units}")]
    WrongLength { units: usize },
}

impl Word {
    /// Create a new Word from raw text
    ///
    /// The text is [`clean`]ed first, so whitespace and punctuation are
    /// ignored and precomposed nukta letters are decomposed.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Nothing remains after cleaning
    /// - The cleaned text is not exactly five character units
    ///
    /// # Examples
    /// ```
    /// use punjabi_wordle::core::Word;
    ///
    /// let word = Word::new("ਗੁਰਦੁਆਰਾ").unwrap();
    /// assert_eq!(word.unit(0), "ਗੁ");
    ///
    /// assert!(Word::new("ਸੱਚਾ").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let text = clean(text);
        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let parts: Vec<String> = units(&text).map(str::to_owned).collect();
        let count = parts.len();
        let units: [String; WORD_UNITS] = parts
            .try_into()
            .map_err(|_| WordError::WrongLength { units: count })?;

        Ok(Self { text, units })
    }

    /// Get the cleaned word text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get all five units
    #[inline]
    #[must_use]
    pub const fn units(&self) -> &[String; WORD_UNITS] {
        &self.units
    }

    /// Get the unit at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub fn unit(&self, position: usize) -> &str {
        &self.units[position]
    }

    /// Check whether a code point occurs anywhere in the word
    #[inline]
    #[must_use]
    pub fn contains_char(&self, ch: char) -> bool {
        self.text.contains(ch)
    }

    /// Base keys (units without matras) for every position
    #[must_use]
    pub fn base_keys(&self) -> [String; WORD_UNITS] {
        self.units.each_ref().map(|unit| base_key(unit))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("ਹਸਪਤਾਲ").unwrap();
        assert_eq!(word.text(), "ਹਸਪਤਾਲ");
        assert_eq!(word.units(), &["ਹ", "ਸ", "ਪ", "ਤਾ", "ਲ"].map(String::from));
    }

    #[test]
    fn word_creation_cleans_input() {
        let word = Word::new(" ਹਸ ਪਤਾਲ\n").unwrap();
        assert_eq!(word.text(), "ਹਸਪਤਾਲ");

        let precomposed = Word::new("ਦਸਤ\u{0A59}ਤ").unwrap();
        let decomposed = Word::new("ਦਸਤ\u{0A16}\u{0A3C}ਤ").unwrap();
        assert_eq!(precomposed, decomposed);
    }

    #[test]
    fn word_creation_wrong_length() {
        assert_eq!(
            Word::new("ਸੱਚਾ"),
            Err(WordError::WrongLength { units: 2 })
        );
        assert_eq!(
            Word::new("ਸੁਣਹਿਰੀ"),
            Err(WordError::WrongLength { units: 4 })
        );
        assert_eq!(
            Word::new("ਪਰਿਵਰਤਨ"),
            Err(WordError::WrongLength { units: 6 })
        );
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("hello"), Err(WordError::Empty));
    }

    #[test]
    fn word_with_conjunct() {
        let word = Word::new("ਅੰਮ੍ਰਿਤਸਰ").unwrap();
        assert_eq!(word.unit(1), "ਮ੍ਰਿ");
        assert_eq!(word.base_keys()[1], "ਮ੍ਰ");
    }

    #[test]
    fn word_contains_char() {
        let word = Word::new("ਪ੍ਰਦਰਸ਼ਨ").unwrap();
        assert!(word.contains_char('ਪ'));
        assert!(word.contains_char('\u{0A3C}'));
        assert!(!word.contains_char('ਾ'));
    }

    #[test]
    fn word_display() {
        let word = Word::new("ਨਮਸਕਾਰ").unwrap();
        assert_eq!(format!("{word}"), "ਨਮਸਕਾਰ");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            WordError::WrongLength { units: 4 }.to_string(),
            "word must be exactly 5 letters, got 4"
        );
    }
}
