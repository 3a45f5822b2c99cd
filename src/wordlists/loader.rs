//! Word list loading
//!
//! Builds a [`WordList`] from a file or from the embedded constant.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while building a dictionary
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list contains no valid words")]
    Empty,
}

/// Ordered, duplicate-free dictionary of playable words
///
/// Order is preserved from the source; membership checks are hashed.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordList {
    /// Build a dictionary from raw entries
    ///
    /// Blank lines are ignored, invalid entries are skipped with a warning and
    /// later duplicates are dropped.
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` if no valid word remains.
    ///
    /// # Examples
    /// ```
    /// use adversarial_wordle::wordlists::loader::WordList;
    ///
    /// let list = WordList::from_entries(["crane", "slate", "CRANE", "toolong"]).unwrap();
    /// assert_eq!(list.len(), 2);
    /// assert!(list.contains_str("Slate"));
    /// ```
    pub fn from_entries<I, S>(entries: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut index = FxHashSet::default();

        for entry in entries {
            let trimmed = entry.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }

            match Word::new(trimmed) {
                Ok(word) => {
                    if index.insert(word.clone()) {
                        words.push(word);
                    } else {
                        tracing::debug!(word = %word, "dropping duplicate word list entry");
                    }
                }
                Err(e) => tracing::warn!(entry = trimmed, error = %e, "skipping invalid word"),
            }
        }

        if words.is_empty() {
            return Err(WordListError::Empty);
        }

        Ok(Self { words, index })
    }

    /// The dictionary compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` only if the embedded list was built empty.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::from_entries(super::WORDS.iter().copied())
    }

    /// Load a dictionary from a file with one word per line
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds no valid word.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let list = Self::from_entries(content.lines())?;
        tracing::info!(path = %path.display(), words = list.len(), "loaded word list");
        Ok(list)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Membership check for raw text; invalid text is never a member
    #[must_use]
    pub fn contains_str(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.contains(&word))
    }

    /// Look up the dictionary's copy of `text`
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        let word = Word::new(text).ok()?;
        self.index.get(&word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn entries_keep_order_and_drop_duplicates() {
        let list = WordList::from_entries(["crane", "slate", "crane", "irate"]).unwrap();

        let texts: Vec<&str> = list.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["CRANE", "SLATE", "IRATE"]);
    }

    #[test]
    fn invalid_and_blank_entries_are_skipped() {
        let list = WordList::from_entries(["crane", "", "  ", "toolong", "abc", "sl4te", "slate"])
            .unwrap();

        assert_eq!(list.len(), 2);
        assert!(list.contains_str("crane"));
        assert!(list.contains_str("SLATE"));
    }

    #[test]
    fn empty_list_is_an_error() {
        let entries: [&str; 0] = [];
        assert!(matches!(
            WordList::from_entries(entries),
            Err(WordListError::Empty)
        ));
        assert!(matches!(
            WordList::from_entries(["toolong"]),
            Err(WordListError::Empty)
        ));
    }

    #[test]
    fn membership_checks() {
        let list = WordList::from_entries(["crane"]).unwrap();

        assert!(list.contains(&Word::new("crane").unwrap()));
        assert!(!list.contains_str("slate"));
        assert!(!list.contains_str("cran"));
        assert_eq!(list.get("Crane").map(Word::text), Some("CRANE"));
        assert!(list.get("slate").is_none());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!(
            "adversarial_wordle_loader_{}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "crane\nslate\n\nirate").unwrap();
        drop(file);

        let list = WordList::from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(list.len(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = WordList::from_file("/definitely/not/a/word/list.txt");
        assert!(matches!(result, Err(WordListError::Io { .. })));
    }

    #[test]
    fn embedded_list_loads() {
        let list = WordList::embedded().unwrap();
        assert_eq!(list.len(), super::super::WORDS_COUNT);
    }
}
