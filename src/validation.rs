//! Guess validation report
//!
//! Reports both list membership and the unit count, so a caller can tell a
//! wrong-length entry from a well-formed word that is not in the list.

use crate::core::{WORD_UNITS, clean, count_units};
use crate::wordlists::WordList;
use serde::Serialize;

/// Validation result for a candidate word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    /// The cleaned word
    pub word: String,
    pub is_valid: bool,
    pub unit_length: usize,
}

impl Validation {
    /// Whether the word failed only on membership
    #[must_use]
    pub const fn is_unknown_word(&self) -> bool {
        !self.is_valid && self.unit_length == WORD_UNITS
    }
}

/// Validate a candidate word against the list
///
/// # Examples
/// ```
/// use punjabi_wordle::validation::validate;
/// use punjabi_wordle::wordlists::WordList;
///
/// let words = WordList::embedded();
///
/// let report = validate("ਹਸਪਤਾਲ", &words);
/// assert!(report.is_valid);
/// assert_eq!(report.unit_length, 5);
///
/// let report = validate("ਸੱਚਾ", &words);
/// assert!(!report.is_valid);
/// assert_eq!(report.unit_length, 2);
/// ```
#[must_use]
pub fn validate(word: &str, words: &WordList) -> Validation {
    let cleaned = clean(word);
    let unit_length = count_units(&cleaned);
    let is_valid = unit_length == WORD_UNITS && words.contains(&cleaned);

    Validation {
        word: cleaned,
        is_valid,
        unit_length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_word_is_valid() {
        let words = WordList::embedded();
        let report = validate(" ਅੰਮ੍ਰਿਤਸਰ ", &words);
        assert!(report.is_valid);
        assert_eq!(report.word, "ਅੰਮ੍ਰਿਤਸਰ");
        assert!(!report.is_unknown_word());
    }

    #[test]
    fn wrong_length_reports_unit_count() {
        let words = WordList::embedded();
        let report = validate("ਸੁਣਹਿਰੀ", &words);
        assert!(!report.is_valid);
        assert_eq!(report.unit_length, 4);
        assert!(!report.is_unknown_word());
    }

    #[test]
    fn unknown_five_unit_word() {
        let words = WordList::embedded();
        let report = validate("ਕਕਕਕਕ", &words);
        assert!(!report.is_valid);
        assert_eq!(report.unit_length, 5);
        assert!(report.is_unknown_word());
    }

    #[test]
    fn empty_input() {
        let report = validate("  ", &WordList::embedded());
        assert_eq!(report.unit_length, 0);
        assert!(!report.is_valid);
    }

    #[test]
    fn serializes_camel_case() {
        let report = validate("ਹਸਪਤਾਲ", &WordList::embedded());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["isValid"], true);
        assert_eq!(json["unitLength"], 5);
        assert_eq!(json["word"], "ਹਸਪਤਾਲ");
    }
}
