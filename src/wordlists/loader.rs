//! Word list loading utilities
//!
//! Loads a custom word file in the same format as the embedded list: one
//! word per line, blank lines and `#` comments ignored.

use super::WordList;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Load a word list from a file
///
/// Entries that are not exactly five units are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use punjabi_wordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let list = WordList::from_words(parse_entries(&content));
    info!(path = %path.display(), words = list.len(), "loaded word list");
    Ok(list)
}

/// Parse file content into words, skipping comments and invalid entries
///
/// # Examples
/// ```
/// use punjabi_wordle::wordlists::loader::parse_entries;
///
/// let words = parse_entries("# list\nਨਮਸਕਾਰ\n\nਸੱਚਾ\n");
/// assert_eq!(words.len(), 1);
/// ```
#[must_use]
pub fn parse_entries(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(err) => {
                debug!(entry = line, %err, "skipping word list entry");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_entries_keeps_valid_words() {
        let words = parse_entries("ਹਸਪਤਾਲ\nਨਮਸਕਾਰ\nਇਨਕਲਾਬ\n");

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "ਹਸਪਤਾਲ");
        assert_eq!(words[1].text(), "ਨਮਸਕਾਰ");
        assert_eq!(words[2].text(), "ਇਨਕਲਾਬ");
    }

    #[test]
    fn parse_entries_skips_invalid() {
        let words = parse_entries("ਹਸਪਤਾਲ\nਪਰਿਵਰਤਨ\nਸੱਚਾ\n# ਨਮਸਕਾਰ\nਇਨਕਲਾਬ");

        // Only the five-unit words survive; the comment is ignored
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "ਹਸਪਤਾਲ");
        assert_eq!(words[1].text(), "ਇਨਕਲਾਬ");
    }

    #[test]
    fn parse_entries_empty() {
        assert!(parse_entries("").is_empty());
        assert!(parse_entries("\n\n# nothing\n").is_empty());
    }

    #[test]
    fn load_from_file_builds_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ਗੁਰਪੁਰਬ\nਮਨਪਸੰਦ\nਗੁਰਪੁਰਬ").unwrap();

        let list = load_from_file(file.path()).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.word_for_date("2").map(Word::text), Some("ਗੁਰਪੁਰਬ"));
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_file(dir.path().join("missing.txt")).is_err());
    }
}
