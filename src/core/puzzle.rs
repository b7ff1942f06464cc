//! Puzzle representation
//!
//! A Puzzle is parsed from raw user input such as `"traMple"`: the first
//! capital letter is the mandatory letter, every letter is allowed.

use super::error::{Error, Result};
use rustc_hash::FxHashSet;
use std::fmt;

/// Minimum length (in characters) of a qualifying word
pub const MIN_WORD_LENGTH: usize = 4;

const MISSING_MANDATORY: &str =
    "Input must contain one capital letter as the mandatory center letter.";

/// A parsed Spelling Bee puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    mandatory: char,
    allowed: FxHashSet<char>,
}

impl Puzzle {
    /// Parse a puzzle from raw input
    ///
    /// The input length is not checked: any string containing at least one
    /// upper-case character is accepted. When several characters are upper
    /// case, only the first one is mandatory.
    ///
    /// # Errors
    /// Returns `Error::InvalidPuzzleInput` if no character is upper case.
    ///
    /// # Examples
    /// ```
    /// use spellbee_solver::core::Puzzle;
    ///
    /// let puzzle = Puzzle::parse("aBet").unwrap();
    /// assert_eq!(puzzle.mandatory_letter(), 'b');
    /// assert!(puzzle.qualifies("abet"));
    /// assert!(!puzzle.qualifies("bead"));
    ///
    /// assert!(Puzzle::parse("abcdefg").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let mandatory = raw
            .chars()
            .find(|c| c.is_uppercase())
            .and_then(|c| c.to_lowercase().next())
            .ok_or_else(|| Error::InvalidPuzzleInput(MISSING_MANDATORY.to_string()))?;

        let allowed: FxHashSet<char> = raw.chars().flat_map(char::to_lowercase).collect();

        Ok(Self { mandatory, allowed })
    }

    /// The letter every qualifying word must contain
    #[inline]
    #[must_use]
    pub const fn mandatory_letter(&self) -> char {
        self.mandatory
    }

    /// The letters a qualifying word may be spelled from
    #[inline]
    #[must_use]
    pub const fn allowed_letters(&self) -> &FxHashSet<char> {
        &self.allowed
    }

    /// Check if a letter may appear in a qualifying word
    #[inline]
    #[must_use]
    pub fn allows(&self, letter: char) -> bool {
        self.allowed.contains(&letter)
    }

    /// Check a (lowercase) dictionary word against the puzzle
    ///
    /// A word qualifies when it has at least four characters, contains the
    /// mandatory letter and uses allowed letters only.
    #[must_use]
    pub fn qualifies(&self, word: &str) -> bool {
        word.chars().count() >= MIN_WORD_LENGTH
            && word.contains(self.mandatory)
            && word.chars().all(|c| self.allows(c))
    }
}

impl fmt::Display for Puzzle {
    /// Renders the allowed letters in sorted order with the mandatory one upper-cased
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters: Vec<char> = self.allowed.iter().copied().collect();
        letters.sort_unstable();
        for letter in letters {
            if letter == self.mandatory {
                write!(f, "{}", letter.to_uppercase())?;
            } else {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}
