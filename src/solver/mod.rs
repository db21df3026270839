//! Ladder search algorithms
//!
//! Breadth-first shortest-ladder search and random solvable-ladder generation.

mod generator;
mod ladder;
mod search;

pub use generator::{
    DEFAULT_MIN_LADDER_LEN, GenerateError, LadderGenerator, MIN_LADDER_LEN,
};
pub use ladder::Ladder;
pub use search::{LadderSearch, SearchState, SearchStats, shortest_path};
