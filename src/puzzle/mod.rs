//! Ladder fill-in puzzle
//!
//! Configuration and the session state machine shared by the line-based and
//! TUI front ends.

mod config;
mod session;

pub use config::{ConfigError, DEFAULT_WORD_LENGTH, PuzzleConfig};
pub use session::{
    BLANK_CHAR, Outcome, PuzzleSession, Rejection, SessionError, SessionState, UNDO_COMMAND,
};
