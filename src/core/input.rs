//! Guess input buffer
//!
//! Collects key presses for the row being typed. Vowel signs and viramas
//! attach to the last unit, so they are accepted even when the row already
//! holds five units; a new base letter is refused once the row is full
//! unless it completes a conjunct.

use super::classify::{CharClass, VIRAMA, classify, clean};
use super::segment::{count_units, units};
use super::word::WORD_UNITS;
use thiserror::Error;

/// Error type for rejected key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// A vowel sign or virama with no letter to attach to
    #[error("a vowel sign needs a letter before it")]
    MatraFirst,

    /// The row already holds five units
    #[error("guess already has 5 letters")]
    BufferFull,

    /// Not a Gurmukhi letter or sign
    #[error("unsupported character {0:?}")]
    UnsupportedChar(char),
}

impl InputError {
    /// Message shown to the player
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MatraFirst => "ਮਾਤਰਾ ਤੋਂ ਪਹਿਲਾਂ ਵਿਅੰਜਨ ਟਾਈਪ ਕਰੋ",
            Self::BufferFull => "5 ਅੱਖਰ ਪੂਰੇ ਹਨ",
            Self::UnsupportedChar(_) => "ਇਹ ਅੱਖਰ ਵਰਤਿਆ ਨਹੀਂ ਜਾ ਸਕਦਾ",
        }
    }
}

/// Text of the guess currently being typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessBuffer {
    text: String,
}

impl GuessBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one key press
    ///
    /// Precomposed nukta letters are stored decomposed, as [`clean`] does.
    ///
    /// # Errors
    /// Returns `InputError` if the key is not Gurmukhi, is a mark with
    /// nothing to attach to, or would start a sixth unit.
    ///
    /// # Examples
    /// ```
    /// use punjabi_wordle::core::{GuessBuffer, InputError};
    ///
    /// let mut buffer = GuessBuffer::new();
    /// assert_eq!(buffer.push('ਾ'), Err(InputError::MatraFirst));
    ///
    /// for key in ['ਪ', '੍', 'ਰ', 'ਾ'] {
    ///     buffer.push(key).unwrap();
    /// }
    /// assert_eq!(buffer.units(), ["ਪ੍ਰਾ"]);
    /// ```
    pub fn push(&mut self, key: char) -> Result<(), InputError> {
        match classify(key) {
            CharClass::Other => return Err(InputError::UnsupportedChar(key)),
            CharClass::Matra | CharClass::Virama => {
                if self.unit_count() == 0 {
                    return Err(InputError::MatraFirst);
                }
            }
            CharClass::BaseLetter => {
                if self.unit_count() >= WORD_UNITS && !self.awaits_conjunct() {
                    return Err(InputError::BufferFull);
                }
            }
        }

        let mut encoded = [0u8; 4];
        self.text.push_str(&clean(key.encode_utf8(&mut encoded)));
        Ok(())
    }

    /// Whether the next base letter would join the last unit as a conjunct
    fn awaits_conjunct(&self) -> bool {
        let mut tail = self.text.chars().rev();
        tail.next() == Some(VIRAMA)
            && tail.next().is_some_and(|ch| classify(ch) == CharClass::BaseLetter)
    }

    /// Remove the last code point
    pub fn backspace(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Take the typed text, leaving the buffer empty
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Units as they would be displayed in the row's tiles
    #[must_use]
    pub fn units(&self) -> Vec<&str> {
        units(&self.text).collect()
    }

    #[must_use]
    pub fn unit_count(&self) -> usize {
        count_units(&self.text)
    }

    /// Whether the row holds exactly five units
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unit_count() == WORD_UNITS
    }
}
