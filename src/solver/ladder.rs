//! Ladder result type

use crate::core::Word;
use std::fmt;

/// An ordered chain of words from start to end, inclusive
///
/// Consecutive words are adjacent. A ladder between two distinct words has at
/// least two entries; searching from a word to itself yields a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    words: Vec<Word>,
}

impl Ladder {
    pub(crate) const fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Words in ladder order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words, including both endpoints
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

    /// Number of single-letter moves
    #[inline]
    #[must_use]
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    #[must_use]
    pub fn start(&self) -> Option<&Word> {
        self.words.first()
    }

    #[must_use]
    pub fn end(&self) -> Option<&Word> {
        self.words.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Check that every consecutive pair of words is adjacent
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.words.windows(2).all(|pair| pair[0].is_adjacent(&pair[1]))
    }
}

impl<'a> IntoIterator for &'a Ladder {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}
