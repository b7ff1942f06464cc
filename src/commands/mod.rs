//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use simple::{run_simple, run_simple_with};
pub use solve::{SolveConfig, SolveResult, solve_word_list};
