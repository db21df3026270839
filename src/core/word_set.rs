//! Fixed-length dictionary
//!
//! A `WordSet` holds every dictionary word of one length, in the order the
//! dictionary listed them. Each entry is a node of the implicit ladder graph,
//! addressed by a stable [`NodeId`].

use super::word::Word;
use rustc_hash::FxHashMap;
use std::fmt;

/// Smallest word length accepted for ladders
pub const MIN_WORD_LENGTH: usize = 3;

/// Stable index of a node within one `WordSet`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in insertion order
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Configuration errors raised while preparing a `WordSet`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSetError {
    LengthTooSmall { length: usize, minimum: usize },
    NoWordsOfLength(usize),
}

impl fmt::Display for WordSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthTooSmall { length, minimum } => {
                write!(f, "Word length must be at least {minimum}, got {length}")
            }
            Self::NoWordsOfLength(length) => {
                write!(f, "No words of length {length} in your dictionary")
            }
        }
    }
}

impl std::error::Error for WordSetError {}

/// All dictionary words of one fixed length
///
/// Duplicate dictionary entries are kept as separate nodes. Word lookup returns
/// the first node with the given text.
#[derive(Debug, Clone)]
pub struct WordSet {
    words: Vec<Word>,
    index: FxHashMap<Box<str>, NodeId>,
    word_length: usize,
    rejected: usize,
}

impl WordSet {
    /// Build a set from candidate strings, keeping those of `word_length` letters
    ///
    /// Candidates of another length or containing non-alphabetic characters are
    /// skipped. Accepted words are lowercased. The result may be empty.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::WordSet;
    ///
    /// let set = WordSet::build(["Cat", "cot", "dogs", "c@t"], 3);
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.rejected(), 2);
    /// ```
    pub fn build<I, S>(candidates: I, word_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut index: FxHashMap<Box<str>, NodeId> = FxHashMap::default();
        let mut rejected = 0;

        for candidate in candidates {
            match Word::with_length(candidate.as_ref(), word_length) {
                Ok(word) => {
                    let id = NodeId(words.len());
                    index.entry(word.text().into()).or_insert(id);
                    words.push(word);
                }
                Err(_) => rejected += 1,
            }
        }

        log::debug!(
            "Built word set: {} words of length {word_length}, {rejected} candidates skipped",
            words.len()
        );

        Self {
            words,
            index,
            word_length,
            rejected,
        }
    }

    /// Build a set and fail if the length is too small or no word matched
    ///
    /// # Errors
    /// Returns `WordSetError` for a length below [`MIN_WORD_LENGTH`] or an
    /// empty result.
    pub fn build_non_empty<I, S>(candidates: I, word_length: usize) -> Result<Self, WordSetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if word_length < MIN_WORD_LENGTH {
            return Err(WordSetError::LengthTooSmall {
                length: word_length,
                minimum: MIN_WORD_LENGTH,
            });
        }

        let set = Self::build(candidates, word_length);
        if set.is_empty() {
            return Err(WordSetError::NoWordsOfLength(word_length));
        }
        Ok(set)
    }

    /// Length shared by every word in the set
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
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

    /// Number of candidates skipped during construction
    #[inline]
    #[must_use]
    pub const fn rejected(&self) -> usize {
        self.rejected
    }

    /// The word stored at `id`
    ///
    /// # Panics
    /// Panics if `id` came from a different, smaller `WordSet`.
    #[inline]
    #[must_use]
    pub fn word(&self, id: NodeId) -> &Word {
        &self.words[id.0]
    }

    /// First node whose word equals `text` exactly
    #[must_use]
    pub fn find(&self, text: &str) -> Option<NodeId> {
        self.index.get(text).copied()
    }

    /// True if some node holds `text`
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains_key(text)
    }

    /// Node at a 0-based ordinal position, used for random selection
    #[must_use]
    pub fn nth(&self, ordinal: usize) -> Option<NodeId> {
        (ordinal < self.words.len()).then_some(NodeId(ordinal))
    }

    /// Iterate over nodes in insertion order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (NodeId, &Word)> + '_ {
        self.words
            .iter()
            .enumerate()
            .map(|(i, word)| (NodeId(i), word))
    }

    /// Iterate over node ids in insertion order
    pub fn ids(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        (0..self.words.len()).map(NodeId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_filters_by_length_and_alphabet() {
        let set = WordSet::build(["cold", "cord", "co1d", "colder", "cat", "", "co-d"], 4);
        let texts: Vec<&str> = set.iter().map(|(_, w)| w.text()).collect();
        assert_eq!(texts, vec!["cold", "cord"]);
        assert_eq!(set.rejected(), 5);
        assert_eq!(set.word_length(), 4);
    }

    #[test]
    fn build_lowercases() {
        let set = WordSet::build(["COLD", "Cord"], 4);
        assert!(set.contains("cold"));
        assert!(set.contains("cord"));
        assert!(!set.contains("COLD"));
    }

    #[test]
    fn build_keeps_duplicates_as_distinct_nodes() {
        let set = WordSet::build(["cold", "cord", "cold"], 4);
        assert_eq!(set.len(), 3);

        let first = set.find("cold").unwrap();
        assert_eq!(first.index(), 0);
        assert_eq!(set.word(set.nth(2).unwrap()).text(), "cold");
    }

    #[test]
    fn build_empty_is_not_an_error() {
        let set = WordSet::build(["cat", "dog"], 4);
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn build_non_empty_reports_configuration_errors() {
        assert_eq!(
            WordSet::build_non_empty(["cat"], 4).unwrap_err(),
            WordSetError::NoWordsOfLength(4)
        );
        assert_eq!(
            WordSet::build_non_empty(["at"], 2).unwrap_err(),
            WordSetError::LengthTooSmall {
                length: 2,
                minimum: MIN_WORD_LENGTH
            }
        );
        assert!(WordSet::build_non_empty(["cat"], 3).is_ok());
    }

    #[test]
    fn nth_is_bounded() {
        let set = WordSet::build(["cat", "cot"], 3);
        assert_eq!(set.nth(1).map(NodeId::index), Some(1));
        assert_eq!(set.nth(2), None);
    }

    #[test]
    fn find_missing_word() {
        let set = WordSet::build(["cat", "cot"], 3);
        assert_eq!(set.find("dog"), None);
        assert_eq!(set.find("ca"), None);
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let set = WordSet::build(["dog", "cat", "cot"], 3);
        let ids: Vec<usize> = set.ids().map(NodeId::index).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(set.word(NodeId(1)).text(), "cat");
    }
}
