//! Core domain types for Gurmukhi Wordle
//!
//! This module contains the script rules and game logic: code point
//! classification, character unit segmentation, guess evaluation, keyboard
//! highlighting and the round reducer. Nothing here performs I/O.

mod classify;
mod feedback;
mod game;
mod input;
mod keyboard;
mod segment;
mod word;

pub use classify::{CharClass, MATRAS, NUKTA, VIRAMA, classify, clean, is_base_letter, is_matra};
pub use feedback::{Feedback, MatchMode, Verdict};
pub use game::{Game, GuessError, GuessRecord, MAX_GUESSES, Status, parse_guess};
pub use input::{GuessBuffer, InputError};
pub use keyboard::{
    CONSONANT_ROWS, KeyboardState, MATRA_ROWS, SIGN_ROW, VOWEL_ROW, layout, matra_name,
};
pub use segment::{Units, base_key, count_units, unit_at, units};
pub use word::{WORD_UNITS, Word, WordError};

/// Evaluate `guess` against `target`, one verdict per unit position
///
/// # Examples
/// ```
/// use punjabi_wordle::core::{MatchMode, Verdict, Word, evaluate};
///
/// let target = Word::new("ਨਮਸਕਾਰ").unwrap();
/// let guess = Word::new("ਚਮਤਕਾਰ").unwrap();
/// assert_eq!(
///     evaluate(&target, &guess, MatchMode::Strict),
///     [Verdict::Absent, Verdict::Correct, Verdict::Absent, Verdict::Correct, Verdict::Correct]
/// );
/// ```
#[must_use]
pub fn evaluate(target: &Word, guess: &Word, mode: MatchMode) -> [Verdict; WORD_UNITS] {
    Feedback::calculate(target, guess, mode).verdicts()
}
