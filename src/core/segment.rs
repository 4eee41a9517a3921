//! Character unit segmentation
//!
//! A character unit is one base letter, any conjunct letters joined to it by
//! a virama, and the matras that follow. Segmentation scans left to right:
//!
//! - a matra or virama never starts a unit and is absorbed into the open one;
//! - a base letter starts a new unit unless it directly follows a virama that
//!   itself directly follows a base letter (the second half of a conjunct);
//! - matras or viramas seen before any unit exists are dropped.
//!
//! Segmentation works on byte ranges of the input, so units are borrowed
//! slices and concatenating them reproduces well-formed input exactly.

use super::classify::{CharClass, classify};
use std::ops::Range;

/// Iterator over the character units of a string
///
/// Yields borrowed `&str` slices in order. Input should already be
/// [`clean`](super::clean)ed; `Other` code points are skipped like orphans.
#[derive(Debug, Clone)]
pub struct Units<'a> {
    text: &'a str,
    pos: usize,
    prev: Option<CharClass>,
    prev_prev: Option<CharClass>,
}

impl<'a> Units<'a> {
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            prev: None,
            prev_prev: None,
        }
    }

    /// Advance past orphans and return the byte range of the next unit
    fn next_range(&mut self) -> Option<Range<usize>> {
        let mut start = None;

        for (offset, ch) in self.text[self.pos..].char_indices() {
            let at = self.pos + offset;
            let class = classify(ch);

            match (class, start) {
                (CharClass::BaseLetter, None) => start = Some(at),
                (CharClass::BaseLetter, Some(unit_start)) => {
                    let joins_conjunct = self.prev == Some(CharClass::Virama)
                        && self.prev_prev == Some(CharClass::BaseLetter);
                    if !joins_conjunct {
                        // Leave this letter for the next unit
                        self.pos = at;
                        return Some(unit_start..at);
                    }
                }
                (CharClass::Matra | CharClass::Virama, Some(_)) => {}
                // A stray character closes the open unit; the next call drops it
                (CharClass::Other, Some(unit_start)) => {
                    self.pos = at;
                    return Some(unit_start..at);
                }
                // Orphan mark or stray character: dropped, and it breaks any
                // virama chain so the next letter starts fresh
                (_, None) => {
                    self.prev_prev = None;
                    self.prev = None;
                    continue;
                }
            }

            self.prev_prev = self.prev;
            self.prev = Some(class);
        }

        self.pos = self.text.len();
        start.map(|unit_start| unit_start..self.text.len())
    }
}

impl<'a> Iterator for Units<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let range = self.next_range()?;
        Some(&self.text[range])
    }
}

/// Iterate over the character units of `text`
///
/// # Examples
/// ```
/// use punjabi_wordle::core::units;
///
/// let parts: Vec<&str> = units("ਅੰਮ੍ਰਿਤਸਰ").collect();
/// assert_eq!(parts, ["ਅੰ", "ਮ੍ਰਿ", "ਤ", "ਸ", "ਰ"]);
/// ```
#[must_use]
pub const fn units(text: &str) -> Units<'_> {
    Units::new(text)
}

/// Count the character units in `text`
///
/// # Examples
/// ```
/// use punjabi_wordle::core::count_units;
///
/// assert_eq!(count_units("ਗੁਰਦੁਆਰਾ"), 5);
/// assert_eq!(count_units("ਪ੍ਰਾਣ"), 2);
/// assert_eq!(count_units(""), 0);
/// ```
#[must_use]
pub fn count_units(text: &str) -> usize {
    units(text).count()
}

/// Get the character unit at `index` (0-based)
///
/// Returns an empty string when `index` is out of range.
///
/// # Examples
/// ```
/// use punjabi_wordle::core::unit_at;
///
/// assert_eq!(unit_at("ਗੁਰਦੁਆਰਾ", 0), "ਗੁ");
/// assert_eq!(unit_at("ਗੁਰਦੁਆਰਾ", 4), "ਰਾ");
/// assert_eq!(unit_at("ਗੁਰਦੁਆਰਾ", 5), "");
/// ```
#[must_use]
pub fn unit_at(text: &str, index: usize) -> &str {
    units(text).nth(index).unwrap_or("")
}

/// The unit with its matras removed, keeping base and conjunct letters
///
/// Two units with the same base key carry the same consonants and differ
/// only in their vowel signs. The nukta is a sign too, so ਸ਼ and ਸ share a
/// key.
///
/// # Examples
/// ```
/// use punjabi_wordle::core::base_key;
///
/// assert_eq!(base_key("ਮ੍ਰਿ"), "ਮ੍ਰ");
/// assert_eq!(base_key("ਦਾ"), base_key("ਦੁ"));
/// assert_eq!(base_key("ਸ\u{0A3C}"), "ਸ");
/// ```
#[must_use]
pub fn base_key(unit: &str) -> String {
    unit.chars()
        .filter(|&ch| classify(ch) != CharClass::Matra)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<&str> {
        units(text).collect()
    }

    #[test]
    fn plain_letters_are_one_unit_each() {
        assert_eq!(split("ਹਸਪਤਾਲ"), ["ਹ", "ਸ", "ਪ", "ਤਾ", "ਲ"]);
    }

    #[test]
    fn matras_attach_to_previous_letter() {
        assert_eq!(split("ਵਿਦਿਆਰਥੀ"), ["ਵਿ", "ਦਿ", "ਆ", "ਰ", "ਥੀ"]);
        assert_eq!(split("ਨਿਆਂਪਾਲਿਕਾ"), ["ਨਿ", "ਆਂ", "ਪਾ", "ਲਿ", "ਕਾ"]);
    }

    #[test]
    fn addak_stays_with_its_letter() {
        // ਸ + addak, then ਚ + kanna
        assert_eq!(split("ਸੱਚਾ"), ["ਸੱ", "ਚਾ"]);
        assert_eq!(count_units("ਸੱਚਾ"), 2);
    }

    #[test]
    fn conjunct_forms_single_unit() {
        assert_eq!(split("ਪ੍ਰਦਰਸ਼ਨ"), ["ਪ੍ਰ", "ਦ", "ਰ", "ਸ਼", "ਨ"]);
        assert_eq!(split("ਪੜ੍ਹਾਈ"), ["ਪ", "ੜ੍ਹਾ", "ਈ"]);
    }

    #[test]
    fn chained_conjuncts_stay_together() {
        // ਸ + virama + ਤ + virama + ਰ
        assert_eq!(split("ਸ੍ਤ੍ਰੀ"), ["ਸ੍ਤ੍ਰੀ"]);
    }

    #[test]
    fn trailing_virama_without_partner() {
        assert_eq!(split("ਕ੍"), ["ਕ੍"]);
        assert_eq!(split("ਕ੍ਾ"), ["ਕ੍ਾ"]);
    }

    #[test]
    fn virama_after_matra_does_not_join() {
        assert_eq!(split("ਕਿ੍ਰ"), ["ਕਿ੍", "ਰ"]);
    }

    #[test]
    fn orphan_marks_are_dropped() {
        assert_eq!(split("ਾਕਮ"), ["ਕ", "ਮ"]);
        assert_eq!(split("੍ਰਾ"), ["ਰਾ"]);
        assert_eq!(split("ਿ੍"), Vec::<&str>::new());
        assert_eq!(count_units("ੀੀ"), 0);
    }

    #[test]
    fn other_characters_are_skipped() {
        assert_eq!(split("ਕ ਮ"), ["ਕ", "ਮ"]);
        // A space breaks a virama chain
        assert_eq!(split("ਕ੍ ਰ"), ["ਕ੍", "ਰ"]);
    }

    #[test]
    fn count_matches_iteration() {
        for text in ["ਅਧਿਆਪਕ", "ਸਮਝਾਉਣਾ", "ਅੰਮ੍ਰਿਤਸਰ", "ਾ", "", "ਪ੍ਰਾਣ"] {
            let n = count_units(text);
            let collected: Vec<&str> = (0..n).map(|i| unit_at(text, i)).collect();
            assert_eq!(collected, split(text));
            assert!(collected.iter().all(|u| !u.is_empty()));
        }
    }

    #[test]
    fn units_reconstruct_well_formed_text() {
        for text in ["ਅਧਿਆਪਕ", "ਗੁਰਦੁਆਰਾ", "ਅੰਮ੍ਰਿਤਸਰ", "ਪ੍ਰਤਿਭਾਵਾਨ"] {
            assert_eq!(units(text).collect::<String>(), text);
        }
    }

    #[test]
    fn unit_at_is_stable() {
        let text = "ਸਮਸਿਆਵਾਂ";
        assert_eq!(unit_at(text, 4), "ਵਾਂ");
        assert_eq!(unit_at(text, 4), unit_at(text, 4));
        assert_eq!(unit_at(text, 99), "");
    }

    #[test]
    fn base_key_strips_only_matras() {
        assert_eq!(base_key("ਸ਼ੀ"), "ਸ");
        assert_eq!(base_key("ਪ੍ਰ"), "ਪ੍ਰ");
        assert_eq!(base_key("ਵਾਂ"), "ਵ");
        assert_ne!(base_key("ਦਾ"), base_key("ਰਾ"));
    }
}
