//! Display functions for command results

use super::formatters::{entropy_bar, guess_row, key_text};
use crate::admin::{ScheduleOutcome, StoredWord};
use crate::analysis::GuessAnalysis;
use crate::commands::{CheckResult, Segmentation, TodayReport};
use crate::core::{MatchMode, matra_name};
use crate::daily::date_key;
use crate::validation::Validation;
use colored::Colorize;

/// Print the result of checking a guess
pub fn print_check_result(result: &CheckResult) {
    let mode = match result.mode {
        MatchMode::Strict => "strict",
        MatchMode::Relaxed => "relaxed",
    };

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Target: {}   Guess: {}   ({mode})",
        result.target.text().bright_yellow().bold(),
        result.guess.text().bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n  {}", guess_row(&result.guess, result.feedback));
    println!("  {}  {}", result.feedback.to_emoji(), result.feedback);

    if result.feedback.is_perfect() {
        println!("\n{}", "✅ Exact match".green().bold());
    } else {
        println!(
            "\n  Correct: {}   Present: {}",
            result.feedback.count_correct().to_string().green(),
            result.feedback.count_present().to_string().yellow()
        );
    }
}

/// Print how text splits into units
pub fn print_segmentation(segmentation: &Segmentation) {
    println!(
        "\n{} {} ({} units)",
        "Text:".bright_cyan().bold(),
        segmentation.cleaned,
        segmentation.units.len()
    );

    for (i, unit) in segmentation.units.iter().enumerate() {
        let marks: Vec<String> = unit
            .chars()
            .skip(1)
            .map(|ch| match matra_name(ch) {
                Some(name) => format!("{} {name}", key_text(ch)),
                None => ch.to_string(),
            })
            .collect();

        if marks.is_empty() {
            println!("  {}. {}", i + 1, unit.bright_white().bold());
        } else {
            println!(
                "  {}. {}  {}",
                i + 1,
                unit.bright_white().bold(),
                marks.join(", ").bright_black()
            );
        }
    }
}

/// Print a validation report
pub fn print_validation(report: &Validation) {
    if report.is_valid {
        println!("{} {}", "✅".green(), report.word.bright_white().bold());
    } else if report.is_unknown_word() {
        println!(
            "{} {}: not in the word list",
            "❌".red(),
            report.word.bright_white().bold()
        );
    } else {
        println!(
            "{} {}: {} letters, need 5",
            "❌".red(),
            report.word.bright_white().bold(),
            report.unit_length
        );
    }
}

/// Print the word for a day
pub fn print_today(report: &TodayReport) {
    println!(
        "{}  {}  [{}]  ({})",
        report.date.bright_cyan(),
        report.word.bright_yellow().bold(),
        report.units.join(" · "),
        report.source.to_string().bright_black()
    );
}

/// Print the analysis of one guess
pub fn print_analysis_result(result: &GuessAnalysis) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.guess.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, result.targets, 30);

    println!("\n📊 Against {} possible targets:", result.targets);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!("   Partitions:  {}", result.partitions);
    println!(
        "   Expected:    {:.1} targets remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} targets", result.worst_partition);
    println!(
        "   Per target:  {:.2} correct, {:.2} present",
        result.average_correct, result.average_present
    );
}

/// Print ranked openers
pub fn print_openers(openers: &[GuessAnalysis]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BEST OPENERS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for (i, opener) in openers.iter().enumerate() {
        println!(
            "  {:>2}. {}  [{}] {:.3} bits  worst {}",
            i + 1,
            opener.guess.bright_white().bold(),
            entropy_bar(opener.entropy, opener.targets, 20).green(),
            opener.entropy,
            opener.worst_partition
        );
    }
}

/// Print a word stored by `admin set-word`
pub fn print_set_word(stored: &StoredWord) {
    println!(
        "{} {} → {}",
        "✅ Stored".green().bold(),
        stored.date.bright_cyan(),
        stored.word.bright_yellow().bold()
    );
}

/// Print stored words for upcoming dates
pub fn print_stored_words(stored: &[StoredWord], days: u32) {
    if stored.is_empty() {
        println!("No words stored for the next {days} days");
        return;
    }

    println!(
        "\n📅 {} ({} of {days} days)\n",
        "Stored words".bright_cyan().bold(),
        stored.len()
    );
    for entry in stored {
        println!("   {}  {}", entry.date.bright_cyan(), entry.word);
    }
}

/// Print per-date scheduling results
pub fn print_schedule(outcomes: &[ScheduleOutcome]) {
    let stored = outcomes.iter().filter(|o| o.result.is_ok()).count();

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SCHEDULE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for outcome in outcomes {
        match &outcome.result {
            Ok(word) => println!("   {}  {}", date_key(outcome.date).bright_cyan(), word),
            Err(err) => println!(
                "   {}  {}",
                date_key(outcome.date).bright_cyan(),
                err.to_string().red()
            ),
        }
    }

    let summary = format!("{stored}/{} dates stored", outcomes.len());
    if stored == outcomes.len() {
        println!("\n{}", summary.green().bold());
    } else {
        println!("\n{}", summary.yellow().bold());
    }
}
