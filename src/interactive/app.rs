//! TUI application state and logic

use crate::commands::Target;
use crate::core::{Game, GuessBuffer, MAX_GUESSES, MatchMode, Status, layout};
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App<'a> {
    pub words: &'a WordList,
    pub game: Game,
    pub label: String,
    pub buffer: GuessBuffer,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    /// Highlighted on-screen key as (row, column)
    pub cursor: (usize, usize),
    /// Share grid of the finished round, once requested
    pub share: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl Statistics {
    /// Wins per guess count, e.g. `1:0 2:1 3:0 4:0 5:0 6:0`
    #[must_use]
    pub fn distribution_summary(&self) -> String {
        (1..=MAX_GUESSES)
            .map(|guesses| format!("{guesses}:{}", self.guess_distribution[guesses]))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(target: Target, words: &'a WordList, mode: MatchMode) -> Self {
        Self {
            words,
            game: Game::new(target.word, mode),
            label: target.label,
            buffer: GuessBuffer::new(),
            messages: vec![
                Message {
                    text: "ਜੀ ਆਇਆਂ ਨੂੰ! Guess the 5-letter word in 6 tries.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type in Gurmukhi, or pick keys with the arrows and Space".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Typing,
            cursor: (0, 0),
            share: None,
        }
    }

    /// Add a typed code point to the guess
    pub fn type_key(&mut self, key: char) {
        if let Err(err) = self.buffer.push(key) {
            debug!(%err, "key rejected");
            self.add_message(err.message(), MessageStyle::Error);
        }
    }

    pub fn backspace(&mut self) {
        self.buffer.backspace();
    }

    /// Key under the on-screen cursor
    #[must_use]
    pub fn selected_key(&self) -> Option<char> {
        let rows = layout();
        let (row, col) = self.cursor;
        rows.get(row).and_then(|keys| keys.get(col)).copied()
    }

    pub fn type_selected(&mut self) {
        if let Some(key) = self.selected_key() {
            self.type_key(key);
        }
    }

    /// Move the on-screen cursor, clamping to the layout
    pub fn move_cursor(&mut self, rows: isize, cols: isize) {
        let layout = layout();
        let (row, col) = self.cursor;

        let row = row.saturating_add_signed(rows).min(layout.len() - 1);
        let width = layout[row].len();
        let col = col.saturating_add_signed(cols).min(width - 1);
        self.cursor = (row, col);
    }

    /// Submit the buffered guess
    pub fn submit(&mut self) {
        let input = self.buffer.as_str().to_owned();

        match self.game.submit(&input, self.words) {
            Ok(_) => {
                self.buffer.clear();
                match self.game.status() {
                    Status::Won => self.finish_round(true),
                    Status::Lost => self.finish_round(false),
                    Status::InProgress => {}
                }
            }
            Err(err) => {
                debug!(%err, input = %input, "guess rejected");
                self.add_message(err.message(), MessageStyle::Error);
            }
        }
    }

    fn finish_round(&mut self, won: bool) {
        let guess_count = self.game.guesses().len();
        self.stats.total_games += 1;
        self.input_mode = InputMode::RoundOver;

        if won {
            self.stats.games_won += 1;
            if guess_count <= MAX_GUESSES {
                self.stats.guess_distribution[guess_count] += 1;
            }

            let celebration = match guess_count {
                1 => "🎯 ਕਮਾਲ! Hole in one! 🌟",
                2 => "🔥 ਬਹੁਤ ਵਧੀਆ! Two guesses! 🔥",
                3 => "✨ ਸ਼ਾਬਾਸ਼! Three guesses! ✨",
                4 => "👏 ਵਧੀਆ! Four guesses! 👏",
                5 => "🎉 ਠੀਕ ਹੈ! Five guesses! 🎉",
                _ => "😅 ਬੱਸ ਬਚ ਗਏ! Got it in six! 😅",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else {
            let text = format!("ਸ਼ਬਦ ਸੀ: {}", self.game.target());
            self.add_message(&text, MessageStyle::Error);
        }

        self.add_message(
            "Press 's' to share, 'n' for a new game or 'q' to quit.",
            MessageStyle::Info,
        );
    }

    /// Start a practice round on a random list word
    pub fn new_game(&mut self) {
        let Some(word) = self.words.random(&mut rand::rng()).cloned() else {
            self.add_message("Word list is empty!", MessageStyle::Error);
            return;
        };

        self.game.reset(word);
        self.label = "ਅਭਿਆਸ (practice)".to_string();
        self.buffer.clear();
        self.messages.clear();
        self.share = None;
        self.input_mode = InputMode::Typing;
        self.add_message("ਨਵੀਂ ਖੇਡ! New practice game started.", MessageStyle::Info);
    }

    pub fn show_share(&mut self) {
        self.share = Some(self.game.share_grid());
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }

            match app.input_mode {
                InputMode::RoundOver => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    KeyCode::Char('s') => app.show_share(),
                    _ => {}
                },
                InputMode::Typing => match key.code {
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_game();
                    }
                    KeyCode::Up => app.move_cursor(-1, 0),
                    KeyCode::Down => app.move_cursor(1, 0),
                    KeyCode::Left => app.move_cursor(0, -1),
                    KeyCode::Right => app.move_cursor(0, 1),
                    KeyCode::Char(' ') => app.type_selected(),
                    KeyCode::Char(c) => app.type_key(c),
                    KeyCode::Backspace => app.backspace(),
                    KeyCode::Enter => app.submit(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Verdict, Word};

    fn app(words: &WordList) -> App<'_> {
        let target = Target {
            word: Word::new("ਨਮਸਕਾਰ").unwrap(),
            label: "2026-10-19".to_string(),
        };
        App::new(target, words, MatchMode::Relaxed)
    }

    fn type_word(app: &mut App, word: &str) {
        for ch in word.chars() {
            app.type_key(ch);
        }
    }

    #[test]
    fn typing_and_submitting() {
        let words = WordList::embedded();
        let mut app = app(&words);

        type_word(&mut app, "ਚਮਤਕਾਰ");
        assert!(app.buffer.is_complete());
        app.submit();
        assert!(app.buffer.is_empty());
        assert_eq!(app.game.guesses().len(), 1);
        assert_eq!(app.game.keyboard().get('ਮ'), Some(Verdict::Correct));

        type_word(&mut app, "ਨਮਸਕਾਰ");
        app.submit();
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert_eq!(app.stats.distribution_summary(), "1:0 2:1 3:0 4:0 5:0 6:0");
    }

    #[test]
    fn rejected_input_becomes_a_message() {
        let words = WordList::embedded();
        let mut app = app(&words);

        app.type_key('ਾ');
        assert!(app.buffer.is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);

        type_word(&mut app, "ਕਕ");
        app.submit();
        assert_eq!(app.messages.last().unwrap().text, "5 ਅੱਖਰ ਭਰੋ");
        assert!(app.game.guesses().is_empty());
        assert_eq!(app.buffer.unit_count(), 2);
    }

    #[test]
    fn messages_are_capped() {
        let words = WordList::embedded();
        let mut app = app(&words);
        for _ in 0..10 {
            app.add_message("x", MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
    }

    #[test]
    fn cursor_picks_keys() {
        let words = WordList::embedded();
        let mut app = app(&words);

        app.move_cursor(-1, -1);
        assert_eq!(app.cursor, (0, 0));
        assert_eq!(app.selected_key(), Some('ੳ'));

        // Row 1 starts ਸ ਹ ਕ
        app.move_cursor(1, 2);
        assert_eq!(app.selected_key(), Some('ਕ'));
        app.type_selected();
        assert_eq!(app.buffer.as_str(), "ਕ");

        // The short consonant row clamps the column
        app.move_cursor(3, 9);
        assert_eq!(app.selected_key(), Some('ੜ'));
    }

    #[test]
    fn losing_reveals_target_and_new_game_resets() {
        let words = WordList::embedded();
        let mut app = app(&words);
        for _ in 0..MAX_GUESSES {
            type_word(&mut app, "ਹਸਪਤਾਲ");
            app.submit();
        }
        assert_eq!(app.game.status(), Status::Lost);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.messages.iter().any(|m| m.text.contains("ਨਮਸਕਾਰ")));

        app.show_share();
        assert!(app.share.as_deref().unwrap().starts_with("ਪੰਜਾਬੀ ਵਰਡਲ X/6"));

        app.new_game();
        assert_eq!(app.input_mode, InputMode::Typing);
        assert!(app.game.guesses().is_empty());
        assert!(app.share.is_none());
    }
}
