//! Ladder solving command
//!
//! Finds the shortest ladder between two user-given words.

use crate::core::{Word, WordError, WordSetError, hamming_distance};
use crate::solver::{Ladder, LadderSearch, SearchStats};
use crate::wordlists::Dictionary;
use std::fmt;

/// Configuration for solving a ladder
pub struct SolveConfig {
    pub start: String,
    pub end: String,
}

impl SolveConfig {
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Result of solving a ladder
pub struct SolveResult {
    pub start: Word,
    pub end: Word,
    /// `None` when no ladder connects the words
    pub ladder: Option<Ladder>,
    /// Dictionary words of the endpoints' length
    pub candidates: usize,
    /// Positions where the endpoints differ, a lower bound on the steps
    pub letters_differing: usize,
    pub stats: SearchStats,
}

/// Reasons a solve request cannot start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    InvalidWord { word: String, source: WordError },
    LengthMismatch { start: String, end: String },
    SameWord(String),
    WordSet(WordSetError),
    NotInDictionary(String),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord { word, source } => write!(f, "Invalid word '{word}': {source}"),
            Self::LengthMismatch { start, end } => write!(
                f,
                "Source and target words must be of equal length ({start} vs {end})"
            ),
            Self::SameWord(word) => write!(f, "Two different words required, got {word} twice"),
            Self::WordSet(err) => write!(f, "{err}"),
            Self::NotInDictionary(word) => write!(f, "{word} not found in dictionary"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord { source, .. } => Some(source),
            Self::WordSet(err) => Some(err),
            _ => None,
        }
    }
}

impl From<WordSetError> for SolveError {
    fn from(err: WordSetError) -> Self {
        Self::WordSet(err)
    }
}

fn parse_word(text: &str) -> Result<Word, SolveError> {
    Word::new(text.trim()).map_err(|source| SolveError::InvalidWord {
        word: text.to_string(),
        source,
    })
}

/// Solve a ladder between the two configured words
///
/// An unreachable pair is a successful solve with `ladder: None`.
///
/// # Errors
///
/// Returns an error if:
/// - Either word is empty or not alphabetic
/// - The words differ in length or are the same word
/// - The dictionary has no words of that length, or lacks either word
pub fn solve_ladder(dictionary: &Dictionary, config: &SolveConfig) -> Result<SolveResult, SolveError> {
    let start = parse_word(&config.start)?;
    let end = parse_word(&config.end)?;

    if start.len() != end.len() {
        return Err(SolveError::LengthMismatch {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    if start == end {
        return Err(SolveError::SameWord(start.to_string()));
    }

    let words = dictionary.word_set(start.len())?;
    let start_id = words
        .find(start.text())
        .ok_or_else(|| SolveError::NotInDictionary(start.to_string()))?;
    let end_id = words
        .find(end.text())
        .ok_or_else(|| SolveError::NotInDictionary(end.to_string()))?;

    let mut search = LadderSearch::new(&words);
    let ladder = search.shortest_path_between(start_id, end_id);

    let letters_differing = hamming_distance(&start, &end);
    Ok(SolveResult {
        start,
        end,
        ladder,
        candidates: words.len(),
        letters_differing,
        stats: search.last_stats(),
    })
}
