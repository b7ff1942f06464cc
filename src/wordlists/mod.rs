//! Dictionaries for Spelling Bee solving
//!
//! Provides the `Dictionary` type, loaders for word-list files and readers,
//! and a sample list embedded in the binary.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{SAMPLE_WORDS, SAMPLE_WORDS_COUNT};
