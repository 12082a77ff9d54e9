// Known-word set and its file/directory loader.
//
// The dictionary is populated once at startup and read-only afterwards;
// the oracle and the suggestion engine share it without mutation.

use std::fs;
use std::path::{Path, PathBuf};

use hashbrown::HashSet;

use lexcop_core::character::lower_all;

/// Error type for dictionary loading failures.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// A word list file or directory could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A deduplicated set of known words.
///
/// Invariant: every stored entry is case-folded and free of whitespace.
/// Both are enforced on insertion, so lookups can assume the canonical
/// form. Queries must fold their argument before calling [`contains`].
///
/// [`contains`]: Dictionary::contains
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from an iterator of words.
    ///
    /// Each item is split on whitespace runs and case-folded, so a line of
    /// several words is accepted as well as a single word.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::new();
        for word in words {
            dict.add(word.as_ref());
        }
        dict
    }

    /// Build a dictionary by loading every path in `paths`.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self, DictionaryError> {
        let mut dict = Self::new();
        for path in paths {
            dict.load_path(path.as_ref())?;
        }
        Ok(dict)
    }

    /// Load a word list file, or recurse into a directory of word lists.
    ///
    /// Every regular file reachable under a directory argument is treated
    /// as a word list. Files are split on whitespace runs; duplicates
    /// collapse silently.
    pub fn load_path(&mut self, path: &Path) -> Result<(), DictionaryError> {
        if path.is_dir() {
            let entries = fs::read_dir(path).map_err(|source| DictionaryError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            for entry in entries {
                let entry = entry.map_err(|source| DictionaryError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                self.load_path(&entry.path())?;
            }
        } else {
            self.load_file(path)?;
        }
        Ok(())
    }

    fn load_file(&mut self, path: &Path) -> Result<(), DictionaryError> {
        let contents = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.add(&contents);
        Ok(())
    }

    /// Insert one or more words, splitting on whitespace and case-folding.
    pub fn add(&mut self, text: &str) {
        for word in text.split_whitespace() {
            self.words.insert(lower_all(word));
        }
    }

    /// Check whether an already-folded word is in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterate over the stored words in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_words_folds_and_dedupes() {
        let dict = Dictionary::from_words(["Color", "color", "COLOR", "meter"]);
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("color"));
        assert!(dict.contains("meter"));
        assert!(!dict.contains("Color"));
    }

    #[test]
    fn add_splits_on_whitespace() {
        let mut dict = Dictionary::new();
        dict.add("alpha beta\tgamma\n delta");
        assert_eq!(dict.len(), 4);
        assert!(dict.contains("gamma"));
    }

    #[test]
    fn empty_runs_are_skipped() {
        let mut dict = Dictionary::new();
        dict.add("   \n\t  ");
        assert!(dict.is_empty());
    }

    #[test]
    fn contains_expects_folded_input() {
        let dict = Dictionary::from_words(["quick"]);
        assert!(dict.contains("quick"));
        assert!(!dict.contains("Quick"));
    }

    #[test]
    fn load_missing_path_is_an_error() {
        let mut dict = Dictionary::new();
        let err = dict
            .load_path(Path::new("/nonexistent/lexcop-wordlist"))
            .unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
    }

    #[test]
    fn load_directory_recurses() {
        let base = std::env::temp_dir().join(format!("lexcop-dict-test-{}", std::process::id()));
        let nested = base.join("nested");
        fs::create_dir_all(&nested).unwrap();
        fs::write(base.join("a.txt"), "one two\n").unwrap();
        fs::write(nested.join("b.txt"), "two three\n").unwrap();

        let mut dict = Dictionary::new();
        dict.load_path(&base).unwrap();
        fs::remove_dir_all(&base).unwrap();

        assert_eq!(dict.len(), 3);
        assert!(dict.contains("one"));
        assert!(dict.contains("two"));
        assert!(dict.contains("three"));
    }
}
