//! Core domain types for word ladders
//!
//! Words, the adjacency oracle and the fixed-length dictionary that forms the
//! node set of the ladder graph.

mod word;
mod word_set;

pub use word::{Word, WordError, are_adjacent, hamming_distance};
pub use word_set::{MIN_WORD_LENGTH, NodeId, WordSet, WordSetError};
