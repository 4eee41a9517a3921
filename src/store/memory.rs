//! In-process word store

use super::{StoreError, WordStore};
use crate::daily::date_key;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::warn;

/// Word store held in memory for the life of the process
///
/// Used when no store file is configured. Writes succeed but are lost on
/// exit, and each one logs a warning saying so.
#[derive(Debug, Default)]
pub struct MemoryStore {
    words: RwLock<HashMap<NaiveDate, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordStore for MemoryStore {
    fn get(&self, date: NaiveDate) -> Result<Option<String>, StoreError> {
        let words = self
            .words
            .read()
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        Ok(words.get(&date).cloned())
    }

    fn set(&self, date: NaiveDate, word: &str) -> Result<(), StoreError> {
        let mut words = self
            .words
            .write()
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        words.insert(date, word.to_owned());
        warn!(
            date = %date_key(date),
            "no word store configured, word kept in memory only and not persisted"
        );
        Ok(())
    }

    fn describe(&self) -> String {
        "memory (not persisted)".to_string()
    }
}
