//! Spelling Bee Solver
//!
//! Finds every dictionary word of four or more letters that uses only the
//! puzzle's letters and contains its mandatory center letter.
//!
//! # Quick Start
//!
//! ```rust
//! use spellbee_solver::solver::solve;
//! use spellbee_solver::wordlists::loader::load_from_reader;
//!
//! // Load a dictionary (any BufRead; files via `load_from_file`)
//! let dictionary = load_from_reader("Abet\nbeet\ntabbed\nbead\n".as_bytes(), "inline").unwrap();
//!
//! // The capital letter is the mandatory one
//! let solutions = solve("aBet", &dictionary).unwrap();
//! assert_eq!(solutions.as_slice(), ["abet", "beet"]);
//! ```

// Core domain types
pub mod core;

// Qualification engine
pub mod solver;

// Dictionaries and loaders
pub mod wordlists;

// Dictionary lifecycle for front-ends
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use crate::core::{Error, Result};
