//! Word lists for the game
//!
//! Provides the embedded candidate list compiled into the binary and the
//! filtered [`WordList`] used both as the guess space and the daily pool.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::{Word, clean};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;

/// The valid-word list
///
/// Built once from candidate entries: every entry is cleaned, anything that
/// is not exactly five units is dropped, and duplicates keep their first
/// position. Order matters because [`word_for_date`](Self::word_for_date)
/// indexes into it; reordering the source file changes every date's word.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
}

impl WordList {
    /// The list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_entries(WORDS.iter().copied())
    }

    /// Build a list from raw entries, dropping anything that is not five units
    ///
    /// # Examples
    /// ```
    /// use punjabi_wordle::wordlists::WordList;
    ///
    /// let list = WordList::from_entries(["ਨਮਸਕਾਰ", "ਸੱਚਾ", "ਨਮਸਕਾਰ "]);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::from_words(entries.into_iter().filter_map(|entry| Word::new(entry).ok()))
    }

    /// Build a list from words, keeping the first occurrence of each
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        let mut list = Self::default();
        for word in words {
            if list.index.contains_key(word.text()) {
                continue;
            }
            list.index.insert(word.text().to_owned(), list.words.len());
            list.words.push(word);
        }
        list
    }

    /// Exact membership test on the cleaned text
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.get(text).is_some()
    }

    /// Look up the list entry for `text`
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        let position = *self.index.get(&clean(text))?;
        self.words.get(position)
    }

    /// Deterministic word for a date key
    ///
    /// The digits of `date_key` are read as one integer and taken modulo the
    /// list length. Non-digit characters are ignored, so `2026-10-19` reads
    /// as `20261019`. Returns `None` only for an empty list.
    ///
    /// # Examples
    /// ```
    /// use punjabi_wordle::wordlists::WordList;
    ///
    /// let list = WordList::embedded();
    /// let word = list.word_for_date("2026-10-19").unwrap();
    /// assert_eq!(list.word_for_date("2026-10-19"), Some(word));
    /// ```
    #[must_use]
    pub fn word_for_date(&self, date_key: &str) -> Option<&Word> {
        if self.words.is_empty() {
            return None;
        }

        // Reduce digit by digit so long keys cannot overflow
        let len = self.words.len() as u64;
        let position = date_key
            .chars()
            .filter_map(|ch| ch.to_digit(10))
            .fold(0u64, |acc, digit| (acc * 10 + u64::from(digit)) % len);

        self.words.get(usize::try_from(position).ok()?)
    }

    /// Uniformly random word for practice rounds
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    #[must_use]
    pub fn first(&self) -> Option<&Word> {
        self.words.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::count_units;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn expected_counts() {
        assert_eq!(WORDS_COUNT, 242, "Expected 242 candidate entries");
        assert_eq!(WordList::embedded().len(), 36, "Expected 36 playable words");
    }

    #[test]
    fn every_list_word_has_five_units() {
        for word in &WordList::embedded() {
            assert_eq!(count_units(word.text()), 5, "{word}");
            let rebuilt: String = word.units().concat();
            assert_eq!(rebuilt, word.text());
        }
    }

    #[test]
    fn short_entries_are_filtered_out() {
        let list = WordList::embedded();
        // First entry of the file has two units
        assert_eq!(WORDS[0], "ਸੱਚਾ");
        assert!(!list.contains("ਸੱਚਾ"));
        assert_eq!(list.first().map(Word::text), Some("ਅਧਿਆਪਕ"));
    }

    #[test]
    fn contains_cleans_input() {
        let list = WordList::embedded();
        assert!(list.contains("ਨਮਸਕਾਰ"));
        assert!(list.contains(" ਨਮ ਸਕਾਰ\n"));
        assert!(list.contains("ਦਸਤ\u{0A59}ਤ"));
        assert!(!list.contains("ਕਕਕਕਕ"));
        assert!(!list.contains(""));
    }

    #[test]
    fn duplicates_keep_first_position() {
        let list = WordList::from_entries(["ਹਸਪਤਾਲ", "ਨਮਸਕਾਰ", "ਹਸਪਤਾਲ"]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice()[0].text(), "ਹਸਪਤਾਲ");
    }

    #[test]
    fn word_for_date_known_values() {
        let list = WordList::embedded();
        let word = |key: &str| list.word_for_date(key).map(Word::text);

        // 20261019 % 36 == 3
        assert_eq!(word("2026-10-19"), Some("ਨਿਆਂਪਾਲਿਕਾ"));
        // 20250101 % 36 == 29
        assert_eq!(word("2025-01-01"), Some("ਇਨਕਲਾਬ"));
        // 20240229 % 36 == 21
        assert_eq!(word("2024-02-29"), Some("ਚਮਤਕਾਰ"));
        assert_eq!(word("20261019"), word("2026-10-19"));
    }

    #[test]
    fn word_for_date_is_stable() {
        let list = WordList::embedded();
        for day in 1..=28 {
            let key = format!("2026-02-{day:02}");
            assert_eq!(list.word_for_date(&key), list.word_for_date(&key));
        }
    }

    #[test]
    fn word_for_date_empty_list() {
        assert!(WordList::default().word_for_date("2026-10-19").is_none());
    }

    #[test]
    fn random_picks_a_member() {
        let list = WordList::embedded();
        let mut rng = rand::rng();
        let word = list.random(&mut rng).unwrap();
        assert!(list.contains(word.text()));
    }
}
