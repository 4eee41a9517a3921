//! Guess feedback calculation and representation
//!
//! Feedback encodes the per-unit verdicts of a guess using base-3 encoding:
//! - 0 = Absent (unit not in word)
//! - 1 = Present (unit in word, wrong position)
//! - 2 = Correct (unit in correct position)
//!
//! The feedback is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::segment::base_key;
use super::word::{WORD_UNITS, Word};
use serde::Serialize;
use std::fmt;

/// Verdict for a single unit position
///
/// Ordered `Absent < Present < Correct`, which is the upgrade order used by
/// the keyboard state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

impl Verdict {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Emoji square for share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

/// How units are compared when looking for relocated matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Relocated units must match exactly, matras included
    Strict,
    /// Relocated units match on their base letters alone
    #[default]
    Relaxed,
}

/// Feedback for a guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback(u8);

impl Feedback {
    /// All correct (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create feedback from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Feedback value must be < 243");
        Self(value)
    }

    /// Pack five verdicts
    #[must_use]
    pub fn from_verdicts(verdicts: [Verdict; WORD_UNITS]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for verdict in verdicts {
            value += verdict.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(value)
    }

    /// Get the raw feedback value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == 242
    }

    /// Unpack into five verdicts
    #[must_use]
    pub fn verdicts(self) -> [Verdict; WORD_UNITS] {
        let mut result = [Verdict::Absent; WORD_UNITS];
        let mut val = self.0;
        for slot in &mut result {
            *slot = Verdict::from_digit(val % 3);
            val /= 3;
        }
        result
    }

    /// Get the verdict at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub fn verdict_at(self, position: usize) -> Verdict {
        self.verdicts()[position]
    }

    /// Evaluate `guess` against `target`
    ///
    /// This implements Wordle's two-pass rules over character units.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact unit matches as correct and consume them
    /// 2. Second pass: for each remaining guess unit, claim the leftmost
    ///    unconsumed target unit that matches under `mode`
    /// 3. Everything else is absent
    ///
    /// # Examples
    /// ```
    /// use punjabi_wordle::core::{Feedback, MatchMode, Word};
    ///
    /// let target = Word::new("ਗੁਰਦੁਆਰਾ").unwrap();
    /// let guess = Word::new("ਗੁਰਪੁਰਬ").unwrap();
    ///
    /// let strict = Feedback::calculate(&target, &guess, MatchMode::Strict);
    /// assert_eq!(strict.to_string(), "CC---");
    ///
    /// // ਰ matches ਰਾ once vowel signs are ignored
    /// let relaxed = Feedback::calculate(&target, &guess, MatchMode::Relaxed);
    /// assert_eq!(relaxed.to_string(), "CC-P-");
    /// ```
    #[must_use]
    pub fn calculate(target: &Word, guess: &Word, mode: MatchMode) -> Self {
        let mut result: [Option<Verdict>; WORD_UNITS] = [None; WORD_UNITS];
        let mut consumed = [false; WORD_UNITS];

        // First pass: exact matches, matras included
        for i in 0..WORD_UNITS {
            if guess.unit(i) == target.unit(i) {
                result[i] = Some(Verdict::Correct);
                consumed[i] = true;
            }
        }

        let target_keys = match mode {
            MatchMode::Strict => None,
            MatchMode::Relaxed => Some(target.base_keys()),
        };

        // Second pass: leftmost unconsumed match wins
        for i in 0..WORD_UNITS {
            if result[i].is_some() {
                continue;
            }

            let guess_key = target_keys.as_ref().map(|_| base_key(guess.unit(i)));
            let found = (0..WORD_UNITS).find(|&j| {
                !consumed[j]
                    && match (&guess_key, &target_keys) {
                        (Some(key), Some(keys)) => *key == keys[j],
                        _ => guess.unit(i) == target.unit(j),
                    }
            });

            result[i] = Some(if let Some(j) = found {
                consumed[j] = true;
                Verdict::Present
            } else {
                Verdict::Absent
            });
        }

        Self::from_verdicts(result.map(|v| v.unwrap_or(Verdict::Absent)))
    }

    /// Count the number of correct units
    #[must_use]
    pub fn count_correct(self) -> u8 {
        self.count(Verdict::Correct)
    }

    /// Count the number of present units
    #[must_use]
    pub fn count_present(self) -> u8 {
        self.count(Verdict::Present)
    }

    fn count(self, wanted: Verdict) -> u8 {
        self.verdicts().iter().filter(|&&v| v == wanted).count() as u8
    }

    /// Parse feedback from a string like "CP-CP", "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'C'/'c'/'G'/'g'/🟩 for correct
    /// - 'P'/'p'/'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use punjabi_wordle::core::Feedback;
    ///
    /// let f1 = Feedback::from_str("CP-CP").unwrap();
    /// let f2 = Feedback::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_UNITS {
            return None;
        }

        let mut verdicts = [Verdict::Absent; WORD_UNITS];
        for (slot, ch) in verdicts.iter_mut().zip(chars) {
            *slot = match ch {
                'C' | 'c' | 'G' | 'g' | '🟩' => Verdict::Correct,
                'P' | 'p' | 'Y' | 'y' | '🟨' => Verdict::Present,
                '-' | '_' | '⬜' => Verdict::Absent,
                _ => return None,
            };
        }

        Some(Self::from_verdicts(verdicts))
    }

    /// Convert feedback to emoji string
    ///
    /// # Examples
    /// ```
    /// use punjabi_wordle::core::Feedback;
    ///
    /// let f = Feedback::from_str("CP-CP").unwrap();
    /// assert_eq!(f.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.verdicts().iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in self.verdicts() {
            let ch = match verdict {
                Verdict::Correct => 'C',
                Verdict::Present => 'P',
                Verdict::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
