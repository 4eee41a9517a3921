//! Formatting utilities for terminal output

use crate::core::{CharClass, Feedback, KeyboardState, Verdict, Word, classify, layout};
use colored::{ColoredString, Colorize};

/// Placeholder base shown under a lone matra or sign
const DOTTED_CIRCLE: char = '\u{25CC}';

/// Text shown for a keyboard key
///
/// Matras and signs cannot stand alone, so they are drawn on a dotted circle.
#[must_use]
pub fn key_text(key: char) -> String {
    match classify(key) {
        CharClass::Matra | CharClass::Virama => format!("{DOTTED_CIRCLE}{key}"),
        CharClass::BaseLetter | CharClass::Other => key.to_string(),
    }
}

/// Color a unit as a tile for its verdict
#[must_use]
pub fn tile(unit: &str, verdict: Verdict) -> ColoredString {
    let text = format!(" {unit} ");
    match verdict {
        Verdict::Correct => text.black().on_green().bold(),
        Verdict::Present => text.black().on_yellow().bold(),
        Verdict::Absent => text.white().on_bright_black(),
    }
}

/// A guess as a row of colored tiles
#[must_use]
pub fn guess_row(word: &Word, feedback: Feedback) -> String {
    word.units()
        .iter()
        .zip(feedback.verdicts())
        .map(|(unit, verdict)| tile(unit, verdict).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keyboard rows with each used key colored by its best verdict
#[must_use]
pub fn keyboard_rows(keyboard: &KeyboardState) -> Vec<String> {
    layout()
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|&key| {
                    let text = key_text(key);
                    match keyboard.get(key) {
                        Some(Verdict::Correct) => text.green().bold().to_string(),
                        Some(Verdict::Present) => text.yellow().bold().to_string(),
                        Some(Verdict::Absent) => text.bright_black().to_string(),
                        None => text,
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy as a bar scaled to the most a list of `targets` words allows
#[must_use]
pub fn entropy_bar(entropy: f64, targets: usize, width: usize) -> String {
    let max_entropy = (targets.max(1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn matra_keys_get_a_carrier() {
        assert_eq!(key_text('ਕ'), "ਕ");
        assert_eq!(key_text('ਾ'), "◌ਾ");
        assert_eq!(key_text('੍'), "◌੍");
    }

    #[test]
    fn guess_row_keeps_units() {
        plain();
        let word = Word::new("ਨਮਸਕਾਰ").unwrap();
        let row = guess_row(&word, Feedback::PERFECT);
        assert_eq!(row, " ਨ   ਮ   ਸ   ਕਾ   ਰ ");
    }

    #[test]
    fn keyboard_rows_cover_layout() {
        plain();
        let rows = keyboard_rows(&KeyboardState::new());
        assert_eq!(rows.len(), layout().len());
        assert!(rows[0].starts_with("ੳ ਅ"));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(150.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn entropy_bar_scales_to_list_size() {
        assert_eq!(entropy_bar(2.0, 16, 4), "██░░");
        assert_eq!(entropy_bar(1.0, 1, 4), "░░░░");
    }
}
