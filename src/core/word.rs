//! Word representation and the adjacency oracle
//!
//! A Word is a validated, lowercase ASCII word. Two words are adjacent when they
//! have equal length and differ in exactly one position; this is the only edge
//! of the ladder graph.

use std::fmt;

/// A lowercase, purely alphabetic dictionary word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: Box<str>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidLength { expected: usize, actual: usize },
    NonAlphabetic,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidLength { expected, actual } => {
                write!(f, "Word must be exactly {expected} letters, got {actual}")
            }
            Self::NonAlphabetic => write!(f, "Word must contain only ASCII letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lowercased. Any non-alphabetic or non-ASCII character
    /// rejects the whole word.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("Cold").unwrap();
    /// assert_eq!(word.text(), "cold");
    ///
    /// assert!(Word::new("don't").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::NonAlphabetic);
        }

        Ok(Self {
            text: text.to_ascii_lowercase().into_boxed_str(),
        })
    }

    /// Create a new Word that must have exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` on a length mismatch, or any error
    /// from [`Word::new`].
    pub fn with_length(text: impl AsRef<str>, length: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() == length {
            Ok(word)
        } else {
            Err(WordError::InvalidLength {
                expected: length,
                actual: word.len(),
            })
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed Word; present for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check whether `other` is exactly one letter substitution away
    #[inline]
    #[must_use]
    pub fn is_adjacent(&self, other: &Self) -> bool {
        are_adjacent(self, other)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Count the positions at which two equal-length words differ
///
/// Callers must pass words of equal length; a `WordSet` guarantees this.
#[must_use]
pub fn hamming_distance(a: &Word, b: &Word) -> usize {
    debug_assert_eq!(a.len(), b.len(), "hamming distance needs equal lengths");
    a.as_bytes()
        .iter()
        .zip(b.as_bytes())
        .filter(|(x, y)| x != y)
        .count()
}

/// True iff `a` and `b` have equal length and differ in exactly one position
///
/// Stops scanning as soon as a second difference is found.
#[must_use]
pub fn are_adjacent(a: &Word, b: &Word) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut differences = 0;
    for (x, y) in a.as_bytes().iter().zip(b.as_bytes()) {
        if x != y {
            differences += 1;
            if differences > 1 {
                return false;
            }
        }
    }
    differences == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn word_creation_valid() {
        let word = w("ladder");
        assert_eq!(word.text(), "ladder");
        assert_eq!(word.as_bytes(), b"ladder");
        assert_eq!(word.len(), 6);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(w("COLD").text(), "cold");
        assert_eq!(w("CoLd").text(), "cold");
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("c0ld"), Err(WordError::NonAlphabetic));
        assert_eq!(Word::new("co d"), Err(WordError::NonAlphabetic));
        assert_eq!(Word::new("don't"), Err(WordError::NonAlphabetic));
        assert_eq!(Word::new("café"), Err(WordError::NonAlphabetic));
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_with_length() {
        assert!(Word::with_length("cold", 4).is_ok());
        assert_eq!(
            Word::with_length("cold", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 4
            })
        );
    }

    #[test]
    fn adjacency_single_substitution() {
        assert!(are_adjacent(&w("cold"), &w("cord")));
        assert!(are_adjacent(&w("cord"), &w("cold")));
        assert!(w("cat").is_adjacent(&w("cot")));
    }

    #[test]
    fn adjacency_rejects_identical_and_distant() {
        assert!(!are_adjacent(&w("cold"), &w("cold")));
        assert!(!are_adjacent(&w("cold"), &w("core")));
        assert!(!are_adjacent(&w("cat"), &w("dog")));
    }

    #[test]
    fn adjacency_rejects_different_lengths() {
        assert!(!are_adjacent(&w("cat"), &w("cats")));
    }

    #[test]
    fn hamming_distance_counts_differences() {
        assert_eq!(hamming_distance(&w("cold"), &w("cold")), 0);
        assert_eq!(hamming_distance(&w("cold"), &w("cord")), 1);
        assert_eq!(hamming_distance(&w("cold"), &w("core")), 2);
        assert_eq!(hamming_distance(&w("cold"), &w("warm")), 4);
    }

    #[test]
    fn word_display() {
        assert_eq!(format!("{}", w("Ladder")), "ladder");
    }
}
