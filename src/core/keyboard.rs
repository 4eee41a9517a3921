//! On-screen keyboard layout and cumulative key highlighting
//!
//! The keyboard state maps each single code point to the best verdict seen
//! for it in the current round. Updates are pure: [`KeyboardState::apply`]
//! returns a new state and never moves a key down the
//! `Absent < Present < Correct` order.

use super::classify::{CharClass, classify};
use super::feedback::{Feedback, Verdict};
use super::word::Word;
use rustc_hash::FxHashMap;

/// Independent vowels and vowel carriers
pub const VOWEL_ROW: &[char] = &[
    'ੳ', 'ਅ', 'ੲ', 'ਆ', 'ਇ', 'ਈ', 'ਉ', 'ਊ', 'ਏ', 'ਐ', 'ਓ', 'ਔ',
];

/// Consonant rows in varnmala order
pub const CONSONANT_ROWS: [&[char]; 4] = [
    &['ਸ', 'ਹ', 'ਕ', 'ਖ', 'ਗ', 'ਘ', 'ਙ', 'ਚ', 'ਛ', 'ਜ'],
    &['ਝ', 'ਞ', 'ਟ', 'ਠ', 'ਡ', 'ਢ', 'ਣ', 'ਤ', 'ਥ', 'ਦ'],
    &['ਧ', 'ਨ', 'ਪ', 'ਫ', 'ਬ', 'ਭ', 'ਮ', 'ਯ', 'ਰ', 'ਲ'],
    &['ਵ', 'ੜ'],
];

/// Vowel sign rows
pub const MATRA_ROWS: [&[char]; 2] = [
    &['ਾ', 'ਿ', 'ੀ', 'ੁ', 'ੂ'],
    &['ੇ', 'ੈ', 'ੋ', 'ੌ'],
];

/// Nukta, virama, nasal signs and addak
pub const SIGN_ROW: &[char] = &['਼', '੍', 'ਂ', 'ੰ', 'ੱ'];

/// Every row of the on-screen keyboard, top to bottom
#[must_use]
pub fn layout() -> Vec<&'static [char]> {
    let mut rows = vec![VOWEL_ROW];
    rows.extend(CONSONANT_ROWS);
    rows.extend(MATRA_ROWS);
    rows.push(SIGN_ROW);
    rows
}

/// Punjabi name of a vowel sign or diacritic
#[must_use]
pub const fn matra_name(ch: char) -> Option<&'static str> {
    let name = match ch {
        'ਾ' => "ਕੰਨਾ",
        'ਿ' => "ਸਿਹਾਰੀ",
        'ੀ' => "ਬਿਹਾਰੀ",
        'ੁ' => "ਔਂਕੜ",
        'ੂ' => "ਦੁਲੈਂਕੜ",
        'ੇ' => "ਲਾਂਵ",
        'ੈ' => "ਦੁਲਾਵਾਂ",
        'ੋ' => "ਹੋੜਾ",
        'ੌ' => "ਕਨੌੜਾ",
        'ਂ' => "ਬਿੰਦੀ",
        'ੰ' => "ਟਿੱਪੀ",
        'ੱ' => "ਅੱਧਕ",
        '਼' => "ਪੈਰ ਬਿੰਦੀ",
        '੍' => "ਹਲੰਤ",
        _ => return None,
    };
    Some(name)
}

/// Best verdict seen so far for each key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: FxHashMap<char, Verdict>,
}

impl KeyboardState {
    /// Empty state with no key highlighted
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Verdict for a key, if it has been seen in a guess
    #[inline]
    #[must_use]
    pub fn get(&self, key: char) -> Option<Verdict> {
        self.keys.get(&key).copied()
    }

    /// Number of keys with a verdict
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Fold one evaluated guess into the state
    ///
    /// - every code point of a correct unit becomes correct;
    /// - letters of a present unit become present, but a mark (matra or
    ///   virama) in that unit only counts as present when the target itself
    ///   contains that code point;
    /// - code points of an absent unit are marked absent if not seen before.
    ///
    /// # Examples
    /// ```
    /// use punjabi_wordle::core::{Feedback, KeyboardState, MatchMode, Verdict, Word};
    ///
    /// let target = Word::new("ਪ੍ਰਦਰਸ਼ਨ").unwrap();
    /// let guess = Word::new("ਬਰਦਾਸ਼ਤ").unwrap();
    /// let feedback = Feedback::calculate(&target, &guess, MatchMode::Relaxed);
    ///
    /// let keys = KeyboardState::new().apply(&guess, feedback, &target);
    /// assert_eq!(keys.get('ਦ'), Some(Verdict::Present));
    /// // ਦਾ matched ਦ, but the target has no kanna
    /// assert_eq!(keys.get('ਾ'), Some(Verdict::Absent));
    /// ```
    #[must_use]
    pub fn apply(&self, guess: &Word, feedback: Feedback, target: &Word) -> Self {
        let mut next = self.clone();
        next.record(guess, feedback, target);
        next
    }

    /// In-place form of [`apply`](Self::apply)
    pub fn record(&mut self, guess: &Word, feedback: Feedback, target: &Word) {
        for (unit, verdict) in guess.units().iter().zip(feedback.verdicts()) {
            for ch in unit.chars() {
                let credited = match verdict {
                    Verdict::Correct => Verdict::Correct,
                    Verdict::Present => {
                        if classify(ch) == CharClass::BaseLetter || target.contains_char(ch) {
                            Verdict::Present
                        } else {
                            Verdict::Absent
                        }
                    }
                    Verdict::Absent => Verdict::Absent,
                };
                self.upgrade(ch, credited);
            }
        }
    }

    fn upgrade(&mut self, key: char, verdict: Verdict) {
        let slot = self.keys.entry(key).or_insert(verdict);
        if verdict > *slot {
            *slot = verdict;
        }
    }
}
