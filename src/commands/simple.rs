//! Simple interactive CLI mode
//!
//! Line-based game without TUI: each line is a guess or a command.

use super::today::Target;
use crate::core::{Game, MAX_GUESSES, MatchMode, Status};
use crate::output::formatters::{guess_row, keyboard_rows};
use crate::wordlists::WordList;
use anyhow::{Result, anyhow};
use colored::Colorize;
use std::io::{self, Write};
use tracing::debug;

/// What the loop should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

/// A line-based game session
pub struct Session<'a> {
    game: Game,
    words: &'a WordList,
    label: String,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(target: Target, words: &'a WordList, mode: MatchMode) -> Self {
        Self {
            game: Game::new(target.word, mode),
            words,
            label: target.label,
        }
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Handle one line of input
    ///
    /// # Errors
    ///
    /// Returns an error if a new round is requested and the word list is empty.
    pub fn handle(&mut self, line: &str) -> Result<Step> {
        match line.trim() {
            "" => {}
            "quit" | "q" | "exit" => return Ok(Step::Quit),
            "new" | "n" => self.new_round()?,
            "keys" | "k" => print_keyboard(&self.game),
            "share" | "s" => println!("\n{}\n", self.game.share_grid()),
            input => self.guess(input),
        }
        Ok(Step::Continue)
    }

    fn guess(&mut self, input: &str) {
        match self.game.submit(input, self.words) {
            Ok(feedback) => {
                let turn = self.game.guesses().len();
                if let Some(record) = self.game.guesses().last() {
                    println!(
                        "  {}. {}",
                        turn.to_string().bright_black(),
                        guess_row(&record.word, feedback)
                    );
                }

                match self.game.status() {
                    Status::Won => print_win(&self.game),
                    Status::Lost => print_loss(&self.game),
                    Status::InProgress => {
                        println!("     {} ਮੌਕੇ ਬਾਕੀ\n", self.game.remaining());
                    }
                }
            }
            Err(err) => {
                debug!(%err, input = %input, "guess rejected");
                println!("❌ {} ({err})\n", err.message().red());
            }
        }
    }

    /// Start a practice round on a random list word
    fn new_round(&mut self) -> Result<()> {
        let word = self
            .words
            .random(&mut rand::rng())
            .cloned()
            .ok_or_else(|| anyhow!("word list is empty"))?;
        self.game.reset(word);
        self.label = "ਅਭਿਆਸ (practice)".to_string();
        println!("\n🔄 ਨਵੀਂ ਖੇਡ ({})\n", self.label);
        Ok(())
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(target: Target, words: &WordList, mode: MatchMode) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  ਪੰਜਾਬੀ ਵਰਡਲ - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the 5-letter Gurmukhi word in {MAX_GUESSES} tries.");
    println!("A letter is a consonant or vowel with its matras, e.g. ਗੁ or ਮ੍ਰਿ.\n");
    println!("  - {} right letter, right place", " ਕ ".black().on_green());
    println!("  - {} in the word, wrong place", " ਕ ".black().on_yellow());
    println!("  - {} not in the word\n", " ਕ ".white().on_bright_black());
    println!("Commands: 'quit' to exit, 'new' for a practice word, 'keys' for the keyboard, 'share' for the grid\n");

    let mut session = Session::new(target, words, mode);
    println!("Playing: {}\n", session.label.bright_cyan());

    loop {
        let Some(line) = get_user_input("ਅੰਦਾਜ਼ਾ")? else {
            break;
        };
        if session.handle(&line)? == Step::Quit {
            break;
        }
    }

    println!("\n👋 ਫਿਰ ਮਿਲਾਂਗੇ!\n");
    Ok(())
}

fn print_keyboard(game: &Game) {
    println!();
    for row in keyboard_rows(game.keyboard()) {
        println!("  {row}");
    }
    println!();
}

fn print_win(game: &Game) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "        🎉 ਸ਼ਾਬਾਸ਼! ਤੁਸੀਂ ਸ਼ਬਦ ਲੱਭ ਲਿਆ! 🎉".bright_green().bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
    println!("\n{}\n", game.share_grid());
    println!("Type 'new' to play again or 'quit' to exit.\n");
}

fn print_loss(game: &Game) {
    println!(
        "\n{} {}\n",
        "ਸ਼ਬਦ ਸੀ:".red().bold(),
        game.target().text().bright_yellow().bold()
    );
    println!("{}\n", game.share_grid());
    println!("Type 'new' to play again or 'quit' to exit.\n");
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn session(words: &WordList) -> Session<'_> {
        let target = Target {
            word: Word::new("ਨਮਸਕਾਰ").unwrap(),
            label: "2026-10-19".to_string(),
        };
        Session::new(target, words, MatchMode::Relaxed)
    }

    #[test]
    fn guesses_and_commands() {
        let words = WordList::embedded();
        let mut session = session(&words);

        assert_eq!(session.handle("ਚਮਤਕਾਰ").unwrap(), Step::Continue);
        assert_eq!(session.game().guesses().len(), 1);

        // Rejected guesses do not use a turn
        session.handle("ਸੱਚਾ").unwrap();
        session.handle("keys").unwrap();
        assert_eq!(session.game().guesses().len(), 1);

        session.handle("ਨਮਸਕਾਰ").unwrap();
        assert_eq!(session.game().status(), Status::Won);
        assert_eq!(session.handle(" quit ").unwrap(), Step::Quit);
    }

    #[test]
    fn new_round_resets() {
        let words = WordList::embedded();
        let mut session = session(&words);
        session.handle("ਚਮਤਕਾਰ").unwrap();

        session.handle("new").unwrap();
        assert!(session.game().guesses().is_empty());
        assert!(session.game().keyboard().is_empty());
        assert!(words.contains(session.game().target().text()));
    }
}
