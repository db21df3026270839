//! Dictionary loading utilities
//!
//! Reads raw dictionary lines from a file or from the embedded list, counts the
//! usable words and hands the lines to [`WordSet::build`].

use crate::core::{WordSet, WordSetError};
use std::fs;
use std::io;
use std::path::Path;

/// Raw dictionary contents, one candidate word per entry
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<String>,
    words_read: usize,
}

impl Dictionary {
    /// Collect dictionary lines, counting the purely alphabetic ones
    ///
    /// Blank lines are ignored. Lines with any non-alphabetic character are
    /// kept out of the count and logged as discarded.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        let mut words_read = 0;

        for line in lines {
            let trimmed = line.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }

            if trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
                words_read += 1;
            } else {
                log::warn!("{trimmed} was read from dictionary but discarded");
            }
            entries.push(trimmed.to_string());
        }

        Self {
            entries,
            words_read,
        }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_lines(super::EMBEDDED)
    }

    /// Number of usable (non-empty, alphabetic) words of any length
    #[must_use]
    pub const fn words_read(&self) -> usize {
        self.words_read
    }

    /// Build the fixed-length node set used by searches
    ///
    /// # Errors
    /// Returns `WordSetError` if the length is too small or no word has it.
    pub fn word_set(&self, word_length: usize) -> Result<WordSet, WordSetError> {
        WordSet::build_non_empty(&self.entries, word_length)
    }
}

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("/usr/share/dict/words").unwrap();
/// println!("{} words read", dictionary.words_read());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(Dictionary::from_lines(content.lines()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn counts_only_alphabetic_words() {
        let dictionary = Dictionary::from_lines(["cold", "don't", "", "  ", "Code", "r2d2"]);
        assert_eq!(dictionary.words_read(), 2);
        assert_eq!(dictionary.word_set(4).map(|set| set.len()), Ok(2));
    }

    #[test]
    fn word_set_filters_by_length() {
        let dictionary = Dictionary::from_lines(["cold", "cord", "cat", "don't"]);
        let set = dictionary.word_set(4).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(
            dictionary.word_set(6).unwrap_err(),
            WordSetError::NoWordsOfLength(6)
        );
    }

    #[test]
    fn embedded_dictionary_has_every_length() {
        let dictionary = Dictionary::embedded();
        assert_eq!(dictionary.words_read(), crate::wordlists::EMBEDDED_COUNT);
        for length in 3..=5 {
            assert!(dictionary.word_set(length).is_ok(), "no words of length {length}");
        }
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!("word_ladder_{}.txt", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "cold\ncord\r\nit's\n\ncore").unwrap();
        }

        let dictionary = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dictionary.words_read(), 3);
        assert_eq!(dictionary.word_set(4).unwrap().len(), 3);
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/nonexistent/word_ladder/dictionary.txt").is_err());
    }
}
