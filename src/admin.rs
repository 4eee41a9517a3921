//! Admin operations on the daily word store
//!
//! Every operation takes the caller's credential and checks it against the
//! configured shared secret first. With no secret configured the gate is
//! open: any credential, including none, is accepted.

use crate::core::{GuessError, parse_guess};
use crate::daily::{date_key, parse_date_key, today};
use crate::store::{StoreError, WordStore};
use crate::wordlists::WordList;
use chrono::{Days, NaiveDate};
use indicatif::ProgressBar;
use serde::Serialize;
use subtle::ConstantTimeEq;
use thiserror::Error;
use tracing::{info, warn};

/// Default window for `upcoming` and `schedule`
pub const DEFAULT_DAYS: u32 = 30;

/// Error type for admin operations
///
/// Authorization, validation and storage failures stay distinct so callers
/// can tell a bad credential from bad data.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Missing or mismatched credential
    #[error("unauthorized")]
    Unauthorized,

    /// The word is not a playable list word
    #[error("invalid word: {0}")]
    InvalidWord(#[from] GuessError),

    /// The date is not a valid `YYYY-MM-DD` key
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The store could not be read or written
    #[error("storage failed: {0}")]
    Storage(#[from] StoreError),
}

/// Shared-secret check for admin writes
#[derive(Debug, Clone, Default)]
pub struct AdminGate {
    secret: Option<String>,
}

impl AdminGate {
    /// Gate for `secret`; `None` or a blank secret leaves the gate open
    #[must_use]
    pub fn new(secret: Option<String>) -> Self {
        let secret = secret.filter(|s| !s.trim().is_empty());
        if secret.is_none() {
            warn!("no admin secret configured, admin commands are unauthenticated");
        }
        Self { secret }
    }

    /// Whether a secret is configured
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.secret.is_none()
    }

    /// Check a caller's credential
    ///
    /// # Errors
    /// Returns `AdminError::Unauthorized` if a secret is configured and the
    /// credential is missing or different.
    ///
    /// # Examples
    /// ```
    /// use punjabi_wordle::admin::AdminGate;
    ///
    /// let gate = AdminGate::new(Some("hunter2".to_string()));
    /// assert!(gate.check(Some("hunter2")).is_ok());
    /// assert!(gate.check(Some("wrong")).is_err());
    /// assert!(gate.check(None).is_err());
    ///
    /// assert!(AdminGate::new(None).check(None).is_ok());
    /// ```
    pub fn check(&self, credential: Option<&str>) -> Result<(), AdminError> {
        let Some(secret) = &self.secret else {
            return Ok(());
        };

        match credential {
            Some(given) if bool::from(given.as_bytes().ct_eq(secret.as_bytes())) => Ok(()),
            _ => {
                warn!("admin credential rejected");
                Err(AdminError::Unauthorized)
            }
        }
    }
}

/// A word stored for a date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredWord {
    pub date: String,
    pub word: String,
}

/// Result of scheduling one date
#[derive(Debug)]
pub struct ScheduleOutcome {
    pub date: NaiveDate,
    pub result: Result<String, AdminError>,
}

/// Admin operations bound to a store and word list
pub struct Admin<'a> {
    gate: &'a AdminGate,
    store: &'a dyn WordStore,
    words: &'a WordList,
}

impl<'a> Admin<'a> {
    #[must_use]
    pub fn new(gate: &'a AdminGate, store: &'a dyn WordStore, words: &'a WordList) -> Self {
        Self { gate, store, words }
    }

    /// Store `word` for `date` (today when `None`)
    ///
    /// The word must be a five-unit word from the list; it is stored in its
    /// cleaned form.
    ///
    /// # Errors
    /// Returns `AdminError` if the credential is rejected, the word or date
    /// is invalid, or the store write fails.
    pub fn set_word(
        &self,
        credential: Option<&str>,
        word: &str,
        date: Option<&str>,
    ) -> Result<StoredWord, AdminError> {
        self.gate.check(credential)?;

        let word = parse_guess(word, self.words)?;
        let date = match date {
            Some(raw) => {
                parse_date_key(raw).ok_or_else(|| AdminError::InvalidDate(raw.to_owned()))?
            }
            None => today(),
        };

        self.store.set(date, word.text())?;
        info!(date = %date_key(date), word = %word, "daily word set");

        Ok(StoredWord {
            date: date_key(date),
            word: word.text().to_owned(),
        })
    }

    /// Stored words for `days` dates starting at `start`
    ///
    /// Dates without an entry are left out.
    ///
    /// # Errors
    /// Returns `AdminError` if the credential is rejected or the store
    /// cannot be read.
    pub fn upcoming(
        &self,
        credential: Option<&str>,
        start: NaiveDate,
        days: u32,
    ) -> Result<Vec<StoredWord>, AdminError> {
        self.gate.check(credential)?;

        let mut found = Vec::new();
        for date in date_range(start, days) {
            if let Some(word) = self.store.get(date)? {
                found.push(StoredWord {
                    date: date_key(date),
                    word,
                });
            }
        }
        Ok(found)
    }

    /// Store the deterministic word for each of `days` dates from `start`
    ///
    /// Each date is attempted independently and reported in the outcomes;
    /// one failed write does not stop the rest.
    ///
    /// # Errors
    /// Returns `AdminError::Unauthorized` if the credential is rejected.
    pub fn schedule(
        &self,
        credential: Option<&str>,
        start: NaiveDate,
        days: u32,
        progress: &ProgressBar,
    ) -> Result<Vec<ScheduleOutcome>, AdminError> {
        self.gate.check(credential)?;

        let mut outcomes = Vec::new();
        for date in date_range(start, days) {
            let key = date_key(date);
            let Some(word) = self.words.word_for_date(&key) else {
                warn!("word list is empty, nothing to schedule");
                break;
            };
            progress.set_message(key.clone());

            let result = self
                .store
                .set(date, word.text())
                .map(|()| word.text().to_owned())
                .map_err(AdminError::from);

            if let Err(err) = &result {
                warn!(date = %key, %err, "scheduling failed");
            }
            outcomes.push(ScheduleOutcome { date, result });
            progress.inc(1);
        }

        progress.finish_and_clear();
        info!(
            days,
            stored = outcomes.iter().filter(|o| o.result.is_ok()).count(),
            "schedule complete"
        );
        Ok(outcomes)
    }
}

/// `days` consecutive dates starting at `start`
fn date_range(start: NaiveDate, days: u32) -> impl Iterator<Item = NaiveDate> {
    (0..days).map_while(move |offset| start.checked_add_days(Days::new(u64::from(offset))))
}
