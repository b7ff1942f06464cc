//! Spelling Bee solving
//!
//! The plain filter (`solve`) and a precomputed index for repeated solves over
//! one dictionary. Both return the same `SolutionList`.

mod engine;
mod index;

pub use engine::{SolutionList, solve, solve_puzzle};
pub use index::DictionaryIndex;
