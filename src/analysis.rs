//! Opening-guess analysis
//!
//! Measures how well a guess splits the word list: each list word is taken
//! as a possible target, targets are grouped by the feedback the guess would
//! get, and the grouping is summarised with Shannon entropy.

use crate::core::{Feedback, MatchMode, Word};
use crate::wordlists::WordList;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Summary of one guess against every possible target
#[derive(Debug, Clone, PartialEq)]
pub struct GuessAnalysis {
    pub guess: String,
    /// Number of possible targets
    pub targets: usize,
    /// Number of distinct feedback patterns
    pub partitions: usize,
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of targets left after seeing the feedback
    pub expected_remaining: f64,
    /// Largest group of targets sharing one feedback
    pub worst_partition: usize,
    /// Mean correct units per target
    pub average_correct: f64,
    /// Mean present units per target
    pub average_present: f64,
}

/// Analyze `guess` against every word of the list
///
/// # Examples
/// ```
/// use punjabi_wordle::analysis::analyze_guess;
/// use punjabi_wordle::core::{MatchMode, Word};
/// use punjabi_wordle::wordlists::WordList;
///
/// let words = WordList::embedded();
/// let guess = Word::new("ਸਰਦਾਰਨੀ").unwrap();
///
/// let analysis = analyze_guess(&guess, &words, MatchMode::Relaxed);
/// assert_eq!(analysis.targets, words.len());
/// assert!(analysis.entropy > 0.0);
/// ```
#[must_use]
pub fn analyze_guess(guess: &Word, words: &WordList, mode: MatchMode) -> GuessAnalysis {
    let feedbacks: Vec<Feedback> = words
        .as_slice()
        .par_iter()
        .map(|target| Feedback::calculate(target, guess, mode))
        .collect();

    summarize(guess, &feedbacks)
}

/// Analyze every list word as an opener, best first
///
/// Ranked by entropy, then by smaller worst partition.
#[must_use]
pub fn rank_openers(words: &WordList, mode: MatchMode, top: usize) -> Vec<GuessAnalysis> {
    let mut ranked: Vec<GuessAnalysis> = words
        .as_slice()
        .par_iter()
        .map(|guess| {
            let feedbacks: Vec<Feedback> = words
                .iter()
                .map(|target| Feedback::calculate(target, guess, mode))
                .collect();
            summarize(guess, &feedbacks)
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.entropy
            .total_cmp(&a.entropy)
            .then(a.worst_partition.cmp(&b.worst_partition))
            .then_with(|| a.guess.cmp(&b.guess))
    });
    ranked.truncate(top);
    ranked
}

fn summarize(guess: &Word, feedbacks: &[Feedback]) -> GuessAnalysis {
    let mut counts: FxHashMap<Feedback, usize> = FxHashMap::default();
    for &feedback in feedbacks {
        *counts.entry(feedback).or_insert(0) += 1;
    }

    let targets = feedbacks.len();
    let total = targets.max(1) as f64;

    let expected_remaining = counts
        .values()
        .map(|&count| count as f64 * count as f64 / total)
        .sum();

    let (correct, present) = feedbacks.iter().fold((0usize, 0usize), |(c, p), f| {
        (c + usize::from(f.count_correct()), p + usize::from(f.count_present()))
    });

    GuessAnalysis {
        guess: guess.text().to_owned(),
        targets,
        partitions: counts.len(),
        entropy: shannon_entropy(&counts),
        expected_remaining,
        worst_partition: counts.values().copied().max().unwrap_or(0),
        average_correct: correct as f64 / total,
        average_present: present as f64 / total,
    }
}

/// Calculate Shannon entropy from a feedback distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one feedback with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n feedbacks
///
/// # Examples
/// ```
/// use punjabi_wordle::analysis::shannon_entropy;
/// use punjabi_wordle::core::Feedback;
/// use rustc_hash::FxHashMap;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert(Feedback::new(0), 25);
/// uniform.insert(Feedback::new(1), 25);
/// uniform.insert(Feedback::new(2), 25);
/// uniform.insert(Feedback::new(3), 25);
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<S>(counts: &HashMap<Feedback, usize, S>) -> f64
where
    S: BuildHasher,
{
    let total = counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}
