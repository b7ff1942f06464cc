//! Puzzle solving command
//!
//! Solves one puzzle and returns the solutions with timing.

use crate::core::{Puzzle, Result};
use crate::solver::{DictionaryIndex, SolutionList, solve_puzzle};
use crate::wordlists::Dictionary;
use std::time::{Duration, Instant};

/// Configuration for solving a puzzle
pub struct SolveConfig {
    pub puzzle: String,
    /// Build a `DictionaryIndex` first instead of scanning the dictionary
    pub indexed: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(puzzle: String) -> Self {
        Self {
            puzzle,
            indexed: false,
        }
    }

    #[must_use]
    pub const fn indexed(mut self, indexed: bool) -> Self {
        self.indexed = indexed;
        self
    }
}

/// Result of solving a puzzle
pub struct SolveResult {
    /// The raw input as typed
    pub input: String,
    /// Normalised rendering of the puzzle letters
    pub letters: String,
    pub mandatory: char,
    pub solutions: SolutionList,
    pub dictionary_size: usize,
    pub duration: Duration,
}

/// Solve the configured puzzle against a dictionary
///
/// # Errors
///
/// Returns `Error::InvalidPuzzleInput` if the puzzle has no capital letter.
pub fn solve_word_list(config: SolveConfig, dictionary: &Dictionary) -> Result<SolveResult> {
    let start = Instant::now();
    let puzzle = Puzzle::parse(&config.puzzle)?;

    let solutions = if config.indexed {
        DictionaryIndex::build(dictionary).solve_puzzle(&puzzle)
    } else {
        solve_puzzle(&puzzle, dictionary)
    };

    Ok(SolveResult {
        letters: puzzle.to_string(),
        mandatory: puzzle.mandatory_letter(),
        input: config.puzzle,
        solutions,
        dictionary_size: dictionary.len(),
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::builtin;

    #[test]
    fn solve_records_puzzle_details() {
        let dictionary = Dictionary::from_words(["abet", "beet", "tabbed", "bead"]);
        let result = solve_word_list(SolveConfig::new("aBet".to_string()), &dictionary).unwrap();

        assert_eq!(result.input, "aBet");
        assert_eq!(result.letters, "aBet");
        assert_eq!(result.mandatory, 'b');
        assert_eq!(result.dictionary_size, 4);
        assert_eq!(result.solutions.as_slice(), ["abet", "beet"]);
    }

    #[test]
    fn indexed_and_plain_agree() {
        let dictionary = builtin();
        let plain = solve_word_list(SolveConfig::new("traMple".to_string()), &dictionary).unwrap();
        let indexed = solve_word_list(
            SolveConfig::new("traMple".to_string()).indexed(true),
            &dictionary,
        )
        .unwrap();

        assert_eq!(plain.solutions, indexed.solutions);
        assert!(plain.solutions.iter().all(|w| w.contains('m')));
    }

    #[test]
    fn invalid_puzzle_returns_error() {
        let dictionary = builtin();
        let result = solve_word_list(SolveConfig::new("trample".to_string()), &dictionary);
        assert!(result.is_err());
    }
}
