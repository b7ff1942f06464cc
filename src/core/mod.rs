//! Core domain types for Spelling Bee
//!
//! This module contains the puzzle type and the error type. Everything here is
//! pure and free of I/O.

mod error;
mod puzzle;

pub use error::{Error, Result};
pub use puzzle::{MIN_WORD_LENGTH, Puzzle};
