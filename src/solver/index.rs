//! Precomputed dictionary index for repeated solves
//!
//! Words too short to ever qualify are dropped up front. Each remaining word
//! stores a bitmask of the ASCII letters it uses, so the common case is a couple
//! of integer operations per word. Words with any other character keep no mask
//! and go through `Puzzle::qualifies`.

use super::engine::SolutionList;
use crate::core::{MIN_WORD_LENGTH, Puzzle, Result};
use crate::wordlists::Dictionary;
use log::debug;
use rayon::prelude::*;

/// Bitmask over `a..=z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct LetterMask(u32);

impl LetterMask {
    #[inline]
    fn bit(letter: char) -> Option<u32> {
        letter
            .is_ascii_lowercase()
            .then(|| 1 << (letter as u32 - 'a' as u32))
    }

    /// Mask of a word, or `None` if it uses anything outside `a..=z`
    fn of_word(word: &str) -> Option<Self> {
        word.chars()
            .try_fold(0u32, |mask, c| Self::bit(c).map(|bit| mask | bit))
            .map(Self)
    }

    /// Mask of the ASCII letters of a puzzle; other allowed characters are ignored
    fn of_puzzle(puzzle: &Puzzle) -> Self {
        Self(
            puzzle
                .allowed_letters()
                .iter()
                .filter_map(|&c| Self::bit(c))
                .fold(0, |mask, bit| mask | bit),
        )
    }

    #[inline]
    const fn is_subset_of(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }
}

#[derive(Debug, Clone)]
struct Entry {
    word: String,
    mask: Option<LetterMask>,
}

impl Entry {
    fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
            mask: LetterMask::of_word(word),
        }
    }
}

/// A dictionary prepared for many solves
///
/// Results are identical to `solve` on the source dictionary.
#[derive(Debug, Clone)]
pub struct DictionaryIndex {
    entries: Vec<Entry>,
}

impl DictionaryIndex {
    /// Precompute per-word letter sets, in parallel
    ///
    /// # Examples
    /// ```
    /// use spellbee_solver::solver::DictionaryIndex;
    /// use spellbee_solver::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["abet", "beet", "tabbed", "bead"]);
    /// let index = DictionaryIndex::build(&dictionary);
    /// assert_eq!(index.solve("aBet").unwrap().as_slice(), ["abet", "beet"]);
    /// ```
    #[must_use]
    pub fn build(dictionary: &Dictionary) -> Self {
        let mut entries: Vec<Entry> = dictionary
            .as_set()
            .par_iter()
            .filter(|word| word.chars().count() >= MIN_WORD_LENGTH)
            .map(|word| Entry::new(word))
            .collect();

        // Sorted once here so every solve is already in order
        entries.par_sort_unstable_by(|a, b| a.word.cmp(&b.word));

        let fallback = entries.iter().filter(|e| e.mask.is_none()).count();
        debug!(
            "Indexed {} of {} words ({fallback} without ASCII mask)",
            entries.len(),
            dictionary.len()
        );

        Self { entries }
    }

    /// Number of indexed words (those long enough to ever qualify)
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Solve a puzzle given as raw input
    ///
    /// # Errors
    /// Returns `Error::InvalidPuzzleInput` if the input has no capital letter.
    pub fn solve(&self, raw_input: &str) -> Result<SolutionList> {
        let puzzle = Puzzle::parse(raw_input)?;
        Ok(self.solve_puzzle(&puzzle))
    }

    /// Solve an already parsed puzzle
    #[must_use]
    pub fn solve_puzzle(&self, puzzle: &Puzzle) -> SolutionList {
        let allowed = LetterMask::of_puzzle(puzzle);
        let mandatory = LetterMask::bit(puzzle.mandatory_letter());

        let words = self
            .entries
            .iter()
            .filter(|entry| match (entry.mask, mandatory) {
                (Some(mask), Some(bit)) => mask.0 & bit != 0 && mask.is_subset_of(allowed),
                // An all-ASCII word cannot contain a non-ASCII mandatory letter
                (Some(_), None) => false,
                (None, _) => puzzle.qualifies(&entry.word),
            })
            .map(|entry| entry.word.clone())
            .collect();

        SolutionList::from_sorted(words)
    }
}
