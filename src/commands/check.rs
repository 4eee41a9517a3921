//! Guess checking and segmentation commands
//!
//! One-shot evaluation of a guess against a target, without a round or a
//! word list, plus a segmentation dump for inspecting how text splits.

use crate::core::{Feedback, MatchMode, Word, clean, units};
use anyhow::{Context, Result};
use serde::Serialize;

/// Result of checking one guess
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub target: Word,
    pub guess: Word,
    pub mode: MatchMode,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `target`
///
/// Both must clean to five units. Neither has to be a list word, so this can
/// be used to try out words before adding them to the list.
///
/// # Errors
/// Returns an error naming the argument that is not a five-unit word.
pub fn check_guess(target: &str, guess: &str, mode: MatchMode) -> Result<CheckResult> {
    let target = Word::new(target).with_context(|| format!("invalid target '{target}'"))?;
    let guess = Word::new(guess).with_context(|| format!("invalid guess '{guess}'"))?;
    let feedback = Feedback::calculate(&target, &guess, mode);

    Ok(CheckResult {
        target,
        guess,
        mode,
        feedback,
    })
}

/// How a piece of text splits into units
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segmentation {
    pub cleaned: String,
    pub units: Vec<String>,
}

/// Segment arbitrary text
#[must_use]
pub fn segment_text(text: &str) -> Segmentation {
    let cleaned = clean(text);
    let units = units(&cleaned).map(str::to_owned).collect();
    Segmentation { cleaned, units }
}
