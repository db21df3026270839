//! Command implementations
//!
//! Each command is a function that can be called from the CLI.

pub mod benchmark;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use simple::{play_session, run_simple};
pub use solve::{SolveConfig, SolveError, SolveResult, solve_ladder};
