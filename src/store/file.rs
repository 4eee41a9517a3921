//! JSON file word store
//!
//! The file holds a single object mapping `YYYY-MM-DD` keys to words, kept
//! sorted by date. Every write rewrites the whole file through a temporary
//! file in the same directory, so readers never see a partial write.
//! Writers take an exclusive lock on a `<file>.lock` sidecar for the whole
//! read-modify-write, so writers in other processes never drop each other's
//! dates.

use super::{StoreError, WordStore};
use crate::daily::date_key;
use chrono::NaiveDate;
use fs2::FileExt;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

type WordMap = BTreeMap<String, String>;

/// Word store backed by a JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock_path: PathBuf,
}

impl JsonFileStore {
    /// Open a store at `path`; the file is created on first write
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut lock_name = path.file_name().map_or_else(OsString::new, OsString::from);
        lock_name.push(".lock");
        let lock_path = path.with_file_name(lock_name);
        Self { path, lock_path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    /// Open the sidecar lock file and hold it exclusively
    ///
    /// The lock is released when the returned file is dropped.
    fn lock_exclusive(&self) -> Result<File, StoreError> {
        fs::create_dir_all(self.parent_dir())?;
        let lock_file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(&self.lock_path)?;
        FileExt::lock_exclusive(&lock_file)?;
        Ok(lock_file)
    }

    fn load(&self) -> Result<WordMap, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(WordMap::new()),
            Err(err) => return Err(err.into()),
        };

        if content.trim().is_empty() {
            return Ok(WordMap::new());
        }

        serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, words: &WordMap) -> Result<(), StoreError> {
        let parent = self.parent_dir();
        fs::create_dir_all(parent)?;

        let temp_file = NamedTempFile::new_in(parent)?;
        {
            let mut writer = BufWriter::new(&temp_file);
            serde_json::to_writer_pretty(&mut writer, words).map_err(io::Error::from)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }

        temp_file.persist(&self.path).map_err(|err| err.error)?;
        debug!(path = %self.path.display(), entries = words.len(), "word store saved");
        Ok(())
    }
}

impl WordStore for JsonFileStore {
    fn get(&self, date: NaiveDate) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.remove(&date_key(date)))
    }

    fn set(&self, date: NaiveDate, word: &str) -> Result<(), StoreError> {
        let lock_file = self.lock_exclusive()?;

        let mut words = self.load()?;
        let key = date_key(date);
        if let Some(previous) = words.insert(key.clone(), word.to_owned()) {
            info!(date = %key, previous = %previous, "replacing stored word");
        }
        let saved = self.save(&words);

        drop(lock_file);
        saved
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("words.json"));
        assert_eq!(store.get(day(19)).unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn set_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");

        JsonFileStore::new(&path).set(day(19), "ਨਮਸਕਾਰ").unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get(day(19)).unwrap().as_deref(), Some("ਨਮਸਕਾਰ"));
    }

    #[test]
    fn file_is_a_sorted_date_map() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        let store = JsonFileStore::new(&path);

        store.set(day(21), "ਹਸਪਤਾਲ").unwrap();
        store.set(day(19), "ਨਮਸਕਾਰ").unwrap();

        let raw: BTreeMap<String, String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw["2026-10-19"], "ਨਮਸਕਾਰ");

        let keys: Vec<&String> = raw.keys().collect();
        assert_eq!(keys, ["2026-10-19", "2026-10-21"]);
    }

    #[test]
    fn last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("words.json"));
        store.set(day(19), "ਨਮਸਕਾਰ").unwrap();
        store.set(day(19), "ਇਨਕਲਾਬ").unwrap();
        assert_eq!(store.get(day(19)).unwrap().as_deref(), Some("ਇਨਕਲਾਬ"));
    }

    #[test]
    fn creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/store/words.json"));
        store.set(day(19), "ਨਮਸਕਾਰ").unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn writers_on_one_file_keep_every_date() {
        use std::sync::{Arc, Barrier};
        use std::thread;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        let writers = 8;
        let barrier = Arc::new(Barrier::new(writers));

        let handles: Vec<_> = (0..writers)
            .map(|i| {
                let path = path.clone();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    // A separate store per writer, as separate CLI runs would have
                    let store = JsonFileStore::new(&path);
                    barrier.wait();
                    store.set(day(1 + i as u32), "ਨਮਸਕਾਰ").unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let store = JsonFileStore::new(&path);
        for i in 0..writers {
            assert_eq!(
                store.get(day(1 + i as u32)).unwrap().as_deref(),
                Some("ਨਮਸਕਾਰ"),
                "date {} was lost",
                i + 1
            );
        }
        assert!(dir.path().join("words.json.lock").exists());
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.get(day(19)), Err(StoreError::Corrupt { .. })));
        assert!(matches!(
            store.set(day(19), "ਨਮਸਕਾਰ"),
            Err(StoreError::Corrupt { .. })
        ));
    }

    #[test]
    fn empty_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        fs::write(&path, "").unwrap();
        assert_eq!(JsonFileStore::new(&path).get(day(19)).unwrap(), None);
    }
}
