//! Resolved runtime settings
//!
//! The binary fills this from command-line flags and environment variables;
//! everything downstream takes a `Settings` rather than reading the
//! environment itself.

use crate::admin::AdminGate;
use crate::core::MatchMode;
use crate::store::{JsonFileStore, MemoryStore, WordStore};
use crate::wordlists::{WordList, loader};
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Runtime configuration
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// JSON word store file; `None` keeps words in memory only
    pub store_path: Option<PathBuf>,
    /// Admin shared secret; `None` or blank leaves admin commands open
    pub admin_secret: Option<String>,
    /// Custom word list file; `None` uses the embedded list
    pub wordlist: Option<PathBuf>,
    /// Matching used for relocated units
    pub mode: MatchMode,
}

impl Settings {
    /// Open the configured word store
    #[must_use]
    pub fn open_store(&self) -> Box<dyn WordStore> {
        match &self.store_path {
            Some(path) => {
                debug!(path = %path.display(), "using JSON word store");
                Box::new(JsonFileStore::new(path))
            }
            None => {
                debug!("no word store configured, using memory store");
                Box::new(MemoryStore::new())
            }
        }
    }

    /// Load the configured word list
    ///
    /// # Errors
    /// Returns an I/O error if a custom word list file cannot be read.
    pub fn load_words(&self) -> io::Result<WordList> {
        let words = match &self.wordlist {
            Some(path) => loader::load_from_file(path)?,
            None => WordList::embedded(),
        };

        if words.is_empty() {
            warn!("word list has no five-letter words");
        }
        Ok(words)
    }

    /// Admin gate for the configured secret
    #[must_use]
    pub fn admin_gate(&self) -> AdminGate {
        AdminGate::new(self.admin_secret.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.mode, MatchMode::Relaxed);
        assert!(settings.admin_gate().is_open());
        assert_eq!(settings.load_words().unwrap().len(), 36);
        assert!(settings.open_store().describe().starts_with("memory"));
    }

    #[test]
    fn file_store_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            store_path: Some(dir.path().join("words.json")),
            ..Settings::default()
        };

        let store = settings.open_store();
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        store.set(date, "ਨਮਸਕਾਰ").unwrap();
        assert!(dir.path().join("words.json").exists());
        assert_eq!(settings.open_store().get(date).unwrap().as_deref(), Some("ਨਮਸਕਾਰ"));
    }

    #[test]
    fn custom_word_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ਹਸਪਤਾਲ\nਸੱਚਾ").unwrap();

        let settings = Settings {
            wordlist: Some(file.path().to_path_buf()),
            ..Settings::default()
        };
        let words = settings.load_words().unwrap();
        assert_eq!(words.len(), 1);
        assert!(words.contains("ਹਸਪਤਾਲ"));
    }

    #[test]
    fn secret_locks_gate() {
        let settings = Settings {
            admin_secret: Some("ਪਾਸਵਰਡ".to_string()),
            ..Settings::default()
        };
        assert!(!settings.admin_gate().is_open());
    }
}
