//! A single round of the game
//!
//! `Game` owns the target word, the submitted guesses and the keyboard
//! state. Submissions are validated before evaluation, so the evaluator only
//! ever sees two five-unit words.

use super::feedback::{Feedback, MatchMode};
use super::keyboard::KeyboardState;
use super::word::{Word, WordError};
use crate::wordlists::WordList;
use thiserror::Error;

/// Number of guesses allowed in a round
pub const MAX_GUESSES: usize = 6;

/// Progress of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

/// Error type for rejected guesses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// The guess is not five units long
    #[error("word must be exactly 5 letters, got {units}")]
    WrongLength { units: usize },

    /// Five units, but not a word from the list
    #[error("'{word}' is not in the word list")]
    NotInWordList { word: String },

    /// The round is already won or lost
    #[error("the game is over")]
    GameOver,
}

impl GuessError {
    /// Message shown to the player
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::WrongLength { .. } => "5 ਅੱਖਰ ਭਰੋ",
            Self::NotInWordList { .. } => "ਇਹ ਸ਼ਬਦ ਮਾਨਤਾ ਪ੍ਰਾਪਤ ਨਹੀਂ ਹੈ",
            Self::GameOver => "ਖੇਡ ਖ਼ਤਮ ਹੋ ਗਈ ਹੈ",
        }
    }
}

/// Clean `input` and check it is a five-unit word from `words`
///
/// # Errors
/// Returns `GuessError::WrongLength` or `GuessError::NotInWordList`.
///
/// # Examples
/// ```
/// use punjabi_wordle::core::{GuessError, parse_guess};
/// use punjabi_wordle::wordlists::WordList;
///
/// let words = WordList::embedded();
/// assert!(parse_guess("ਹਸਪਤਾਲ", &words).is_ok());
/// assert_eq!(
///     parse_guess("ਪਰਿਵਰਤਨ", &words),
///     Err(GuessError::WrongLength { units: 6 })
/// );
/// ```
pub fn parse_guess(input: &str, words: &WordList) -> Result<Word, GuessError> {
    let word = Word::new(input).map_err(|err| match err {
        WordError::Empty => GuessError::WrongLength { units: 0 },
        WordError::WrongLength { units } => GuessError::WrongLength { units },
    })?;

    if !words.contains(word.text()) {
        return Err(GuessError::NotInWordList {
            word: word.text().to_owned(),
        });
    }

    Ok(word)
}

/// One submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub feedback: Feedback,
}

/// State of one round
#[derive(Debug, Clone)]
pub struct Game {
    target: Word,
    mode: MatchMode,
    guesses: Vec<GuessRecord>,
    keyboard: KeyboardState,
    status: Status,
}

impl Game {
    #[must_use]
    pub fn new(target: Word, mode: MatchMode) -> Self {
        Self {
            target,
            mode,
            guesses: Vec::with_capacity(MAX_GUESSES),
            keyboard: KeyboardState::new(),
            status: Status::InProgress,
        }
    }

    /// Submit a guess
    ///
    /// # Errors
    /// Returns `GuessError` if the round is over, the cleaned input is not
    /// five units, or the word is not in `words`. A rejected guess does not
    /// use up a turn.
    ///
    /// # Examples
    /// ```
    /// use punjabi_wordle::core::{Game, GuessError, MatchMode, Status, Word};
    /// use punjabi_wordle::wordlists::WordList;
    ///
    /// let words = WordList::embedded();
    /// let mut game = Game::new(Word::new("ਨਮਸਕਾਰ").unwrap(), MatchMode::Relaxed);
    ///
    /// assert_eq!(
    ///     game.submit("ਸੱਚਾ", &words),
    ///     Err(GuessError::WrongLength { units: 2 })
    /// );
    ///
    /// let feedback = game.submit("ਨਮਸਕਾਰ", &words).unwrap();
    /// assert!(feedback.is_perfect());
    /// assert_eq!(game.status(), Status::Won);
    /// ```
    pub fn submit(&mut self, input: &str, words: &WordList) -> Result<Feedback, GuessError> {
        if self.is_over() {
            return Err(GuessError::GameOver);
        }

        let guess = parse_guess(input, words)?;
        let feedback = Feedback::calculate(&self.target, &guess, self.mode);
        self.keyboard = self.keyboard.apply(&guess, feedback, &self.target);
        self.guesses.push(GuessRecord {
            word: guess,
            feedback,
        });

        if feedback.is_perfect() {
            self.status = Status::Won;
        } else if self.guesses.len() >= MAX_GUESSES {
            self.status = Status::Lost;
        }

        Ok(feedback)
    }

    /// Start a new round, clearing guesses and keyboard state
    pub fn reset(&mut self, target: Word) {
        *self = Self::new(target, self.mode);
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn mode(&self) -> MatchMode {
        self.mode
    }

    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != Status::InProgress
    }

    /// Guesses left in this round
    #[must_use]
    pub fn remaining(&self) -> usize {
        MAX_GUESSES - self.guesses.len()
    }

    /// Emoji grid of the round, headed by the score
    ///
    /// The score is the number of guesses on a win and `X` otherwise.
    #[must_use]
    pub fn share_grid(&self) -> String {
        let score = match self.status {
            Status::Won => self.guesses.len().to_string(),
            Status::Lost | Status::InProgress => "X".to_string(),
        };

        let mut grid = format!("ਪੰਜਾਬੀ ਵਰਡਲ {score}/{MAX_GUESSES}\n");
        for record in &self.guesses {
            grid.push('\n');
            grid.push_str(&record.feedback.to_emoji());
        }
        grid
    }
}
