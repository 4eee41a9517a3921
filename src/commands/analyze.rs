//! Word analysis command
//!
//! Analyzes how well a guess splits the word list, or ranks the list words
//! as openers.

use crate::analysis::{GuessAnalysis, analyze_guess, rank_openers};
use crate::core::{MatchMode, parse_guess};
use crate::wordlists::WordList;
use anyhow::{Context, Result};

/// Analyze one guess against every list word
///
/// # Errors
///
/// Returns an error if:
/// - The guess is not exactly 5 units
/// - The guess is not in the word list
pub fn analyze_word(word: &str, words: &WordList, mode: MatchMode) -> Result<GuessAnalysis> {
    let guess = parse_guess(word, words).with_context(|| format!("cannot analyze '{word}'"))?;
    Ok(analyze_guess(&guess, words, mode))
}

/// The `top` best openers in the list
#[must_use]
pub fn best_openers(words: &WordList, mode: MatchMode, top: usize) -> Vec<GuessAnalysis> {
    rank_openers(words, mode, top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_valid_word() {
        let words = WordList::embedded();
        let result = analyze_word("ਗੁਰਦੁਆਰਾ", &words, MatchMode::Relaxed).unwrap();

        assert_eq!(result.guess, "ਗੁਰਦੁਆਰਾ");
        assert!(result.entropy > 0.0);
        assert_eq!(result.targets, words.len());
    }

    #[test]
    fn analyze_invalid_word() {
        let words = WordList::embedded();
        assert!(analyze_word("ਕਕਕਕਕ", &words, MatchMode::Relaxed).is_err());
        assert!(analyze_word("ਸੱਚਾ", &words, MatchMode::Relaxed).is_err());
    }

    #[test]
    fn openers_are_list_words() {
        let words = WordList::embedded();
        let openers = best_openers(&words, MatchMode::Strict, 3);
        assert_eq!(openers.len(), 3);
        assert!(openers.iter().all(|opener| words.contains(&opener.guess)));
    }
}
