//! Target selection for a round
//!
//! A round plays either the word for a date (today by default) or, in
//! practice mode, a random list word.

use crate::core::Word;
use crate::daily::{DailyWord, Resolved, Source, date_key, parse_date_key, today};
use crate::store::WordStore;
use crate::wordlists::WordList;
use anyhow::{Context, Result, anyhow};
use serde::Serialize;

/// Which word a round should play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetChoice<'a> {
    /// Today's word
    #[default]
    Today,
    /// The word for a `YYYY-MM-DD` date
    Date(&'a str),
    /// A random list word
    Random,
}

impl<'a> TargetChoice<'a> {
    /// Build a choice from the `--date` / `--random` flags
    #[must_use]
    pub const fn from_flags(date: Option<&'a str>, random: bool) -> Self {
        match (date, random) {
            (_, true) => Self::Random,
            (Some(date), false) => Self::Date(date),
            (None, false) => Self::Today,
        }
    }
}

/// A chosen target and how to describe it to the player
#[derive(Debug, Clone)]
pub struct Target {
    pub word: Word,
    pub label: String,
}

/// Pick the target for a round
///
/// # Errors
/// Returns an error if the date does not parse or the word list is empty.
pub fn pick_target(
    choice: TargetChoice<'_>,
    store: &dyn WordStore,
    words: &WordList,
) -> Result<Target> {
    match choice {
        TargetChoice::Random => {
            let word = words
                .random(&mut rand::rng())
                .cloned()
                .ok_or_else(|| anyhow!("word list is empty"))?;
            Ok(Target {
                word,
                label: "ਅਭਿਆਸ (practice)".to_string(),
            })
        }
        TargetChoice::Today | TargetChoice::Date(_) => {
            let resolved = resolve_day(choice_date(choice), store, words)?;
            Ok(Target {
                label: date_key(resolved.date),
                word: resolved.word,
            })
        }
    }
}

fn choice_date(choice: TargetChoice<'_>) -> Option<&str> {
    match choice {
        TargetChoice::Date(date) => Some(date),
        TargetChoice::Today | TargetChoice::Random => None,
    }
}

/// Resolve the word for `date`, or today when `None`
///
/// # Errors
/// Returns an error if the date does not parse or the word list is empty.
pub fn resolve_day(
    date: Option<&str>,
    store: &dyn WordStore,
    words: &WordList,
) -> Result<Resolved> {
    let date = match date {
        Some(raw) => {
            parse_date_key(raw).with_context(|| format!("invalid date '{raw}', expected YYYY-MM-DD"))?
        }
        None => today(),
    };

    DailyWord::new(store, words)
        .resolve(date)
        .ok_or_else(|| anyhow!("word list is empty, no word for {}", date_key(date)))
}

/// The day's word as reported by `today`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodayReport {
    pub date: String,
    pub word: String,
    pub units: Vec<String>,
    pub source: Source,
}

impl From<&Resolved> for TodayReport {
    fn from(resolved: &Resolved) -> Self {
        Self {
            date: date_key(resolved.date),
            word: resolved.word.text().to_owned(),
            units: resolved.word.units().to_vec(),
            source: resolved.source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn flags_to_choice() {
        assert_eq!(TargetChoice::from_flags(None, false), TargetChoice::Today);
        assert_eq!(
            TargetChoice::from_flags(Some("2026-10-19"), false),
            TargetChoice::Date("2026-10-19")
        );
        assert_eq!(TargetChoice::from_flags(Some("2026-10-19"), true), TargetChoice::Random);
    }

    #[test]
    fn dated_target_is_deterministic() {
        let store = MemoryStore::new();
        let words = WordList::embedded();

        let first = pick_target(TargetChoice::Date("2026-10-19"), &store, &words).unwrap();
        let second = pick_target(TargetChoice::Date("2026-10-19"), &store, &words).unwrap();
        assert_eq!(first.word, second.word);
        assert_eq!(first.label, "2026-10-19");
        assert_eq!(first.word.text(), "ਨਿਆਂਪਾਲਿਕਾ");
    }

    #[test]
    fn stored_word_wins() {
        let store = MemoryStore::new();
        let words = WordList::embedded();
        let date = parse_date_key("2026-10-19").unwrap();
        store.set(date, "ਹਸਪਤਾਲ").unwrap();

        let resolved = resolve_day(Some("2026-10-19"), &store, &words).unwrap();
        let report = TodayReport::from(&resolved);
        assert_eq!(report.word, "ਹਸਪਤਾਲ");
        assert_eq!(report.source, Source::Stored);
        assert_eq!(report.units, ["ਹ", "ਸ", "ਪ", "ਤਾ", "ਲ"]);
    }

    #[test]
    fn random_target_is_a_list_word() {
        let store = MemoryStore::new();
        let words = WordList::embedded();
        let target = pick_target(TargetChoice::Random, &store, &words).unwrap();
        assert!(words.contains(target.word.text()));
    }

    #[test]
    fn bad_date_and_empty_list_are_errors() {
        let store = MemoryStore::new();
        assert!(resolve_day(Some("19/10/2026"), &store, &WordList::embedded()).is_err());
        assert!(pick_target(TargetChoice::Random, &store, &WordList::default()).is_err());
        assert!(pick_target(TargetChoice::Today, &store, &WordList::default()).is_err());
    }
}
