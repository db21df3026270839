//! Puzzle configuration

use crate::core::{MIN_WORD_LENGTH, WordSetError};
use crate::solver::{DEFAULT_MIN_LADDER_LEN, GenerateError, MIN_LADDER_LEN};
use std::fmt;

/// Default word length for generated puzzles
pub const DEFAULT_WORD_LENGTH: usize = 4;

/// Settings for generating a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Letters per word
    pub word_length: usize,
    /// Minimum ladder length, counting both endpoints
    pub min_ladder_len: usize,
    /// Cap on random pairs tried; `None` retries until a ladder is found
    pub max_attempts: Option<usize>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            min_ladder_len: DEFAULT_MIN_LADDER_LEN,
            max_attempts: None,
        }
    }
}

/// Invalid puzzle configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    WordSet(WordSetError),
    Generate(GenerateError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordSet(err) => write!(f, "{err}"),
            Self::Generate(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl PuzzleConfig {
    /// Check the limits before any dictionary work happens
    ///
    /// # Errors
    /// Returns `ConfigError` if the word length or minimum ladder length is too
    /// small.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.word_length < MIN_WORD_LENGTH {
            return Err(ConfigError::WordSet(WordSetError::LengthTooSmall {
                length: self.word_length,
                minimum: MIN_WORD_LENGTH,
            }));
        }
        if self.min_ladder_len < MIN_LADDER_LEN {
            return Err(ConfigError::Generate(GenerateError::MinLengthTooSmall {
                requested: self.min_ladder_len,
                minimum: MIN_LADDER_LEN,
            }));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = PuzzleConfig::default();
        assert_eq!(config.word_length, 4);
        assert_eq!(config.min_ladder_len, 4);
        assert_eq!(config.max_attempts, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn short_words_are_rejected() {
        let config = PuzzleConfig {
            word_length: 2,
            ..PuzzleConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::WordSet(WordSetError::LengthTooSmall { length: 2, .. }))
        ));
    }

    #[test]
    fn short_ladders_are_rejected() {
        let config = PuzzleConfig {
            min_ladder_len: 2,
            ..PuzzleConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Generate(GenerateError::MinLengthTooSmall { requested: 2, .. }))
        ));
    }
}
