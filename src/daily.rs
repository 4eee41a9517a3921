//! Word-of-the-day resolution
//!
//! The word for a date comes from the store when an admin has set one, and
//! from the deterministic date-seeded pick otherwise. Store problems never
//! reach the player: they are logged and the deterministic word is used.

use crate::core::{Word, clean, count_units};
use crate::store::WordStore;
use crate::wordlists::WordList;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// Format of every date key
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Zero-padded `YYYY-MM-DD` key for a date
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use punjabi_wordle::daily::date_key;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
/// assert_eq!(date_key(date), "2026-03-07");
/// ```
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` key
#[must_use]
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key.trim(), DATE_FORMAT).ok()
}

/// Today's date from the local calendar
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Where a resolved word came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Set by an admin for this date
    Stored,
    /// Picked from the list by date
    Deterministic,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stored => f.write_str("stored"),
            Self::Deterministic => f.write_str("deterministic"),
        }
    }
}

/// The word chosen for a date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub word: Word,
    pub date: NaiveDate,
    pub source: Source,
}

/// Resolves the word for a date against a store and a word list
pub struct DailyWord<'a> {
    store: &'a dyn WordStore,
    words: &'a WordList,
}

impl<'a> DailyWord<'a> {
    #[must_use]
    pub fn new(store: &'a dyn WordStore, words: &'a WordList) -> Self {
        Self { store, words }
    }

    /// Word for `date`
    ///
    /// Returns `None` only when the word list is empty and nothing usable is
    /// stored.
    #[must_use]
    pub fn resolve(&self, date: NaiveDate) -> Option<Resolved> {
        let key = date_key(date);

        if let Some(word) = self.stored_word(date, &key) {
            debug!(date = %key, word = %word, "using stored word");
            return Some(Resolved {
                word,
                date,
                source: Source::Stored,
            });
        }

        let word = self.words.word_for_date(&key)?.clone();
        debug!(date = %key, word = %word, "using deterministic word");
        Some(Resolved {
            word,
            date,
            source: Source::Deterministic,
        })
    }

    /// Resolve a `YYYY-MM-DD` key; `None` if the key does not parse
    #[must_use]
    pub fn resolve_key(&self, date_key: &str) -> Option<Resolved> {
        self.resolve(parse_date_key(date_key)?)
    }

    fn stored_word(&self, date: NaiveDate, key: &str) -> Option<Word> {
        let raw = match self.store.get(date) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(date = %key, store = %self.store.describe(), %err, "word store failed, falling back");
                return None;
            }
        };

        match Word::new(&raw) {
            Ok(word) => Some(word),
            Err(err) => {
                warn!(
                    date = %key,
                    stored = %raw,
                    units = count_units(&clean(&raw)),
                    %err,
                    "stored word is not playable, falling back"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::store::testing::BrokenStore;

    fn date(key: &str) -> NaiveDate {
        parse_date_key(key).unwrap()
    }

    #[test]
    fn date_keys_are_zero_padded() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(date_key(d), "2025-01-01");
        assert_eq!(parse_date_key("2025-01-01"), Some(d));
        assert_eq!(parse_date_key(" 2025-01-01\n"), Some(d));
    }

    #[test]
    fn invalid_date_keys_are_rejected() {
        assert_eq!(parse_date_key("2025-02-30"), None);
        assert_eq!(parse_date_key("01/01/2025"), None);
        assert_eq!(parse_date_key(""), None);
    }

    #[test]
    fn missing_entry_uses_deterministic_word() {
        let store = MemoryStore::new();
        let words = WordList::embedded();
        let resolved = DailyWord::new(&store, &words)
            .resolve(date("2026-10-19"))
            .unwrap();

        assert_eq!(resolved.source, Source::Deterministic);
        assert_eq!(resolved.word.text(), "ਨਿਆਂਪਾਲਿਕਾ");
        assert_eq!(resolved.date, date("2026-10-19"));
    }

    #[test]
    fn stored_word_wins() {
        let store = MemoryStore::new();
        store.set(date("2026-10-19"), "ਹਸਪਤਾਲ").unwrap();

        let words = WordList::embedded();
        let daily = DailyWord::new(&store, &words);
        let resolved = daily.resolve_key("2026-10-19").unwrap();
        assert_eq!(resolved.source, Source::Stored);
        assert_eq!(resolved.word.text(), "ਹਸਪਤਾਲ");

        // Other dates are unaffected
        let next = daily.resolve_key("2025-01-01").unwrap();
        assert_eq!(next.source, Source::Deterministic);
        assert_eq!(next.word.text(), "ਇਨਕਲਾਬ");
    }

    #[test]
    fn unplayable_stored_word_falls_back() {
        let store = MemoryStore::new();
        store.set(date("2026-10-19"), "ਸੱਚਾ").unwrap();

        let words = WordList::embedded();
        let resolved = DailyWord::new(&store, &words)
            .resolve(date("2026-10-19"))
            .unwrap();
        assert_eq!(resolved.source, Source::Deterministic);
        assert_eq!(resolved.word.text(), "ਨਿਆਂਪਾਲਿਕਾ");
    }

    #[test]
    fn store_failure_falls_back() {
        let words = WordList::embedded();
        let resolved = DailyWord::new(&BrokenStore, &words)
            .resolve(date("2024-02-29"))
            .unwrap();
        assert_eq!(resolved.source, Source::Deterministic);
        assert_eq!(resolved.word.text(), "ਚਮਤਕਾਰ");
    }

    #[test]
    fn empty_list_without_stored_word() {
        let store = MemoryStore::new();
        let words = WordList::default();
        assert!(DailyWord::new(&store, &words).resolve(today()).is_none());
        assert!(DailyWord::new(&store, &words).resolve_key("nope").is_none());
    }
}
