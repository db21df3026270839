//! Interactive TUI puzzle
//!
//! ratatui front end for the ladder fill-in game.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Statistics, run_tui};
