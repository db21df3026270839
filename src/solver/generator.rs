//! Random solvable ladder selection
//!
//! Picks random endpoint pairs from a `WordSet` until one is connected by a
//! ladder of at least the minimum length.

use super::ladder::Ladder;
use super::search::LadderSearch;
use crate::core::WordSet;
use rand::Rng;
use std::fmt;

/// Default minimum ladder length, counting both endpoints
pub const DEFAULT_MIN_LADDER_LEN: usize = 4;

/// Shortest ladder length that still leaves an interior word to guess
pub const MIN_LADDER_LEN: usize = 3;

/// Errors from puzzle generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    EmptyWordSet,
    MinLengthTooSmall { requested: usize, minimum: usize },
    AttemptsExhausted { attempts: usize, min_len: usize },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordSet => write!(f, "Cannot generate a ladder from an empty dictionary"),
            Self::MinLengthTooSmall { requested, minimum } => {
                write!(f, "Minimum ladder length must be at least {minimum}, got {requested}")
            }
            Self::AttemptsExhausted { attempts, min_len } => write!(
                f,
                "No ladder of at least {min_len} words found after {attempts} attempts"
            ),
        }
    }
}

impl std::error::Error for GenerateError {}

/// Generates random ladders of a minimum length
///
/// Without an attempt cap the generator retries until it succeeds, which never
/// terminates on a dictionary that has no qualifying pair.
#[derive(Debug, Clone)]
pub struct LadderGenerator<'a> {
    words: &'a WordSet,
    min_len: usize,
    max_attempts: Option<usize>,
}

impl<'a> LadderGenerator<'a> {
    /// Create a generator with the default minimum length and no attempt cap
    #[must_use]
    pub const fn new(words: &'a WordSet) -> Self {
        Self {
            words,
            min_len: DEFAULT_MIN_LADDER_LEN,
            max_attempts: None,
        }
    }

    #[must_use]
    pub const fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Cap the number of random pairs tried; `None` retries forever
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub const fn min_len(&self) -> usize {
        self.min_len
    }

    /// Pick random pairs until one yields a ladder of at least `min_len` words
    ///
    /// # Errors
    /// Returns `GenerateError` if the set is empty, the minimum length is below
    /// [`MIN_LADDER_LEN`], or the attempt cap is reached.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Ladder, GenerateError> {
        if self.words.is_empty() {
            return Err(GenerateError::EmptyWordSet);
        }
        if self.min_len < MIN_LADDER_LEN {
            return Err(GenerateError::MinLengthTooSmall {
                requested: self.min_len,
                minimum: MIN_LADDER_LEN,
            });
        }

        let mut search = LadderSearch::new(self.words);
        let mut attempts = 0;

        loop {
            if self.max_attempts.is_some_and(|max| attempts >= max) {
                log::warn!("Giving up after {attempts} generation attempts");
                return Err(GenerateError::AttemptsExhausted {
                    attempts,
                    min_len: self.min_len,
                });
            }
            attempts += 1;

            let (Some(start), Some(end)) = (
                self.words.nth(rng.random_range(0..self.words.len())),
                self.words.nth(rng.random_range(0..self.words.len())),
            ) else {
                continue;
            };

            match search.shortest_path_between(start, end) {
                Some(ladder) if ladder.len() >= self.min_len => {
                    log::info!(
                        "Generated {}-word ladder {} -> {} after {attempts} attempts",
                        ladder.len(),
                        self.words.word(start),
                        self.words.word(end)
                    );
                    return Ok(ladder);
                }
                _ => {}
            }
        }
    }
}
