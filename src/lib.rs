//! Word Ladder
//!
//! Shortest word ladders between equal-length words, and an interactive puzzle
//! that hides the middle of a random ladder for the player to fill in.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::core::WordSet;
//! use word_ladder::solver::shortest_path;
//!
//! let words = WordSet::build(["cold", "cord", "core", "code"], 4);
//! let ladder = shortest_path(&words, "cold", "code").unwrap();
//! assert_eq!(ladder.to_string(), "cold -> cord -> core -> code");
//! ```

// Core domain types
pub mod core;

// Search algorithms
pub mod solver;

// Fill-in puzzle state machine
pub mod puzzle;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
