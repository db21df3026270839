//! Interactive ladder fill-in state machine
//!
//! A session holds the player's slot array. Slot 0 and the last slot are the
//! fixed endpoints; the player fills the interior one slot at a time. Each
//! entry is checked against the dictionary and against the previous confirmed
//! slot. Adjacency to the fixed end word is only checked by [`PuzzleSession::finish`].

use super::config::PuzzleConfig;
use crate::core::{Word, WordSet};
use crate::solver::{GenerateError, Ladder, LadderGenerator, LadderSearch, MIN_LADDER_LEN};
use rand::Rng;
use std::fmt;

/// Reserved input that undoes instead of guessing
pub const UNDO_COMMAND: &str = "UNDO";

/// Placeholder character for a blank slot
pub const BLANK_CHAR: char = '_';

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Interior slots remain to be filled
    Filling,
    /// Every interior slot is filled; call `finish` for the result
    Completed,
}

/// Final result of a completed session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
}

/// Why a submission or undo was refused
///
/// A rejection never changes the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    TooLong,
    TooShort,
    NotInDictionary(String),
    InvalidMove,
    NothingToUndo,
    AlreadyComplete,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong => write!(f, "That word is too long!"),
            Self::TooShort => write!(f, "That word is too short!"),
            Self::NotInDictionary(word) => {
                write!(f, "{word} is not in your dictionary! Please try again")
            }
            Self::InvalidMove => write!(f, "That is not a valid move!"),
            Self::NothingToUndo => write!(f, "Nothing to undo."),
            Self::AlreadyComplete => write!(f, "The ladder is already complete!"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Errors raised while setting up a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Generate(GenerateError),
    UnknownWord(String),
    NoLadder { start: String, end: String },
    LadderTooShort { len: usize, minimum: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generate(err) => write!(f, "{err}"),
            Self::UnknownWord(word) => write!(f, "{word} not found in dictionary"),
            Self::NoLadder { start, end } => {
                write!(f, "No ladder possible between {start} and {end}")
            }
            Self::LadderTooShort { len, minimum } => write!(
                f,
                "Ladder has {len} words but a puzzle needs at least {minimum}"
            ),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Generate(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GenerateError> for SessionError {
    fn from(err: GenerateError) -> Self {
        Self::Generate(err)
    }
}

/// One fill-in game over a solvable ladder
#[derive(Debug, Clone)]
pub struct PuzzleSession<'a> {
    words: &'a WordSet,
    solution: Ladder,
    slots: Vec<Option<Word>>,
    cursor: usize,
    moves: usize,
}

impl<'a> PuzzleSession<'a> {
    /// Generate a random puzzle according to `config`
    ///
    /// # Errors
    /// Returns `SessionError::Generate` if no qualifying ladder could be found.
    pub fn generate<R: Rng + ?Sized>(
        words: &'a WordSet,
        config: &PuzzleConfig,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        let ladder = LadderGenerator::new(words)
            .with_min_len(config.min_ladder_len)
            .with_max_attempts(config.max_attempts)
            .generate(rng)?;
        Self::from_ladder(words, ladder, config.min_ladder_len)
    }

    /// Start a puzzle between two chosen words
    ///
    /// # Errors
    /// Returns `SessionError` if either word is missing, no ladder connects
    /// them, or the ladder has fewer than `min_len` words.
    pub fn with_endpoints(
        words: &'a WordSet,
        start: &str,
        end: &str,
        min_len: usize,
    ) -> Result<Self, SessionError> {
        let start_id = words
            .find(start)
            .ok_or_else(|| SessionError::UnknownWord(start.to_string()))?;
        let end_id = words
            .find(end)
            .ok_or_else(|| SessionError::UnknownWord(end.to_string()))?;

        let ladder = LadderSearch::new(words)
            .shortest_path_between(start_id, end_id)
            .ok_or_else(|| SessionError::NoLadder {
                start: start.to_string(),
                end: end.to_string(),
            })?;

        Self::from_ladder(words, ladder, min_len)
    }

    fn from_ladder(
        words: &'a WordSet,
        solution: Ladder,
        min_len: usize,
    ) -> Result<Self, SessionError> {
        let len = solution.len();
        let minimum = min_len.max(MIN_LADDER_LEN);
        if len < minimum {
            return Err(SessionError::LadderTooShort { len, minimum });
        }

        let mut slots = vec![None; len];
        slots[0] = solution.start().cloned();
        slots[len - 1] = solution.end().cloned();

        Ok(Self {
            words,
            solution,
            slots,
            cursor: 1,
            moves: 0,
        })
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.cursor >= self.last_index() {
            SessionState::Completed
        } else {
            SessionState::Filling
        }
    }

    /// Index of the slot the next submission fills
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total number of slots, endpoints included
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.words.word_length()
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<Word>] {
        &self.slots
    }

    #[must_use]
    pub fn start(&self) -> &Word {
        &self.solution.words()[0]
    }

    #[must_use]
    pub fn end(&self) -> &Word {
        &self.solution.words()[self.last_index()]
    }

    /// The generated shortest ladder
    #[must_use]
    pub const fn solution(&self) -> &Ladder {
        &self.solution
    }

    /// Accepted submissions plus successful undos
    #[must_use]
    pub const fn moves(&self) -> usize {
        self.moves
    }

    /// Slots as display strings, blanks shown as underscores
    #[must_use]
    pub fn render_slots(&self) -> Vec<String> {
        let blank: String = std::iter::repeat_n(BLANK_CHAR, self.word_length()).collect();
        self.slots
            .iter()
            .map(|slot| slot.as_ref().map_or_else(|| blank.clone(), |w| w.text().to_string()))
            .collect()
    }

    /// Fill the cursor slot with `input`
    ///
    /// The input is trimmed and lowercased before lookup.
    ///
    /// # Errors
    /// Returns the `Rejection` reason; the session is left unchanged.
    pub fn submit(&mut self, input: &str) -> Result<SessionState, Rejection> {
        if self.state() == SessionState::Completed {
            return Err(Rejection::AlreadyComplete);
        }

        let guess = input.trim().to_lowercase();
        let guess_len = guess.chars().count();
        let word_length = self.word_length();

        if guess_len > word_length {
            return Err(Rejection::TooLong);
        }

        let Some(id) = self.words.find(&guess) else {
            return Err(if guess_len < word_length {
                Rejection::TooShort
            } else {
                Rejection::NotInDictionary(guess)
            });
        };

        let word = self.words.word(id);
        let adjacent = self.slots[self.cursor - 1]
            .as_ref()
            .is_some_and(|previous| word.is_adjacent(previous));
        if !adjacent {
            return Err(Rejection::InvalidMove);
        }

        self.slots[self.cursor] = Some(word.clone());
        self.cursor += 1;
        self.moves += 1;
        Ok(self.state())
    }

    /// Undo the last entry and the one before it
    ///
    /// Clears the most recent confirmed slot and rewinds the cursor by two,
    /// clearing the slot it lands on too. The cursor never moves below 1, so
    /// with a single confirmed entry only that entry is cleared.
    ///
    /// # Errors
    /// Returns `Rejection::NothingToUndo` when no interior slot is filled.
    pub fn undo(&mut self) -> Result<SessionState, Rejection> {
        if self.cursor <= 1 {
            return Err(Rejection::NothingToUndo);
        }

        let target = self.cursor.saturating_sub(2).max(1);
        for slot in &mut self.slots[target..self.cursor] {
            *slot = None;
        }
        self.cursor = target;
        self.moves += 1;
        Ok(self.state())
    }

    /// Handle one line of player input, treating [`UNDO_COMMAND`] as undo
    ///
    /// # Errors
    /// Propagates the rejection from `submit` or `undo`.
    pub fn apply(&mut self, input: &str) -> Result<SessionState, Rejection> {
        if input.trim() == UNDO_COMMAND {
            self.undo()
        } else {
            self.submit(input)
        }
    }

    /// Result of a completed session, `None` while still filling
    ///
    /// Wins when the last interior word is adjacent to the fixed end word.
    #[must_use]
    pub fn finish(&self) -> Option<Outcome> {
        if self.state() != SessionState::Completed {
            return None;
        }

        let last = self.last_index();
        match (&self.slots[last - 1], &self.slots[last]) {
            (Some(before), Some(end)) if before.is_adjacent(end) => Some(Outcome::Win),
            _ => Some(Outcome::Lose),
        }
    }

    fn last_index(&self) -> usize {
        self.slots.len() - 1
    }
}
