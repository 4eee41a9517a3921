//! Daily word persistence
//!
//! The store maps a calendar date to the word chosen for it. Entries are
//! written by the admin commands and read once per round; a missing entry
//! is normal and means the deterministic word is used. Writes for the same
//! date are last-write-wins.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use chrono::NaiveDate;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for store access
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("word store I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The backing file is not a valid date-to-word map
    #[error("word store {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The store cannot be used at all (e.g. a poisoned lock)
    #[error("word store unavailable: {0}")]
    Unavailable(String),
}

/// Key-value store of daily words
///
/// Implementations must be safe to share between threads.
pub trait WordStore: Send + Sync {
    /// Word stored for `date`, if any
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be read.
    fn get(&self, date: NaiveDate) -> Result<Option<String>, StoreError>;

    /// Store `word` for `date`, replacing any previous entry
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be written.
    fn set(&self, date: NaiveDate, word: &str) -> Result<(), StoreError>;

    /// Short description for logs
    fn describe(&self) -> String;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{StoreError, WordStore};
    use chrono::NaiveDate;

    /// Store whose every call fails
    pub struct BrokenStore;

    impl WordStore for BrokenStore {
        fn get(&self, _date: NaiveDate) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("broken".to_string()))
        }

        fn set(&self, _date: NaiveDate, _word: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("broken".to_string()))
        }

        fn describe(&self) -> String {
            "broken".to_string()
        }
    }
}
