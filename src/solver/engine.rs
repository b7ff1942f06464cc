//! Qualification engine
//!
//! Filters a dictionary down to the words that qualify for a puzzle.

use crate::core::{Puzzle, Result};
use crate::wordlists::Dictionary;
use std::fmt;

/// Qualifying words for one puzzle, in ascending codepoint order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionList {
    words: Vec<String>,
}

impl SolutionList {
    /// Sort the words and wrap them
    pub(crate) fn from_unsorted(mut words: Vec<String>) -> Self {
        words.sort_unstable();
        Self { words }
    }

    /// Wrap words that are already strictly ascending
    pub(crate) fn from_sorted(words: Vec<String>) -> Self {
        debug_assert!(words.windows(2).all(|w| w[0] < w[1]));
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words as a slice
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.words
    }
}

impl<'a> IntoIterator for &'a SolutionList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl IntoIterator for SolutionList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl fmt::Display for SolutionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(", "))
    }
}

/// Solve a puzzle given as raw input against a dictionary
///
/// # Errors
/// Returns `Error::InvalidPuzzleInput` if the input has no capital letter.
///
/// # Examples
/// ```
/// use spellbee_solver::solver::solve;
/// use spellbee_solver::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_words(["abet", "beet", "tabbed", "bead"]);
/// let solutions = solve("aBet", &dictionary).unwrap();
/// assert_eq!(solutions.as_slice(), ["abet", "beet"]);
/// ```
pub fn solve(raw_input: &str, dictionary: &Dictionary) -> Result<SolutionList> {
    let puzzle = Puzzle::parse(raw_input)?;
    Ok(solve_puzzle(&puzzle, dictionary))
}

/// Filter and sort a dictionary for an already parsed puzzle
#[must_use]
pub fn solve_puzzle(puzzle: &Puzzle, dictionary: &Dictionary) -> SolutionList {
    let words = dictionary
        .iter()
        .filter(|word| puzzle.qualifies(word))
        .map(str::to_string)
        .collect();
    SolutionList::from_unsorted(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words.iter().copied())
    }

    #[test]
    fn solve_rejects_short_and_foreign_words() {
        let dict = dictionary(&["bee", "tree", "flee", "bent", "tent"]);
        let solutions = solve("Beret", &dict).unwrap();
        assert!(solutions.is_empty());
    }

    #[test]
    fn solve_keeps_qualifying_words() {
        let dict = dictionary(&["abet", "beet", "tabbed", "bead"]);
        let solutions = solve("aBet", &dict).unwrap();
        assert_eq!(solutions.as_slice(), ["abet", "beet"]);
    }

    #[test]
    fn solve_output_is_sorted() {
        let dict = dictionary(&["tramp", "ample", "trample", "maple", "lamp", "palm"]);
        let solutions = solve("traMple", &dict).unwrap();
        assert_eq!(
            solutions.into_vec(),
            vec!["ample", "lamp", "maple", "palm", "tramp", "trample"]
        );
    }

    #[test]
    fn solve_without_capital_fails() {
        let dict = dictionary(&["abet"]);
        let err = solve("abcdefg", &dict).unwrap_err();
        assert!(err.is_invalid_puzzle());
    }

    #[test]
    fn solve_empty_dictionary() {
        let solutions = solve("aBcdefg", &Dictionary::default()).unwrap();
        assert!(solutions.is_empty());
    }

    #[test]
    fn solve_is_case_insensitive_via_dictionary() {
        let dict = dictionary(&["ABET", "Beet"]);
        let solutions = solve("aBet", &dict).unwrap();
        assert_eq!(solutions.len(), 2);
    }

    #[test]
    fn solve_is_idempotent() {
        let dict = dictionary(&["abet", "beet", "abate", "babe", "tete"]);
        let first = solve("aBet", &dict).unwrap();
        let second = solve("aBet", &dict).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn solve_puzzle_matches_solve() {
        let dict = dictionary(&["abet", "beet", "abate"]);
        let puzzle = Puzzle::parse("aBet").unwrap();
        assert_eq!(solve_puzzle(&puzzle, &dict), solve("aBet", &dict).unwrap());
    }

    #[test]
    fn solution_list_display() {
        let list = SolutionList::from_unsorted(vec!["beet".to_string(), "abet".to_string()]);
        assert_eq!(list.to_string(), "abet, beet");
    }
}
