//! Dictionary representation
//!
//! A Dictionary is a set of normalised words: trimmed, lowercase, non-empty.

use rustc_hash::FxHashSet;

/// An immutable set of lowercase dictionary words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Each entry is trimmed and lowercased; empty entries are dropped and
    /// duplicates collapse.
    ///
    /// # Examples
    /// ```
    /// use spellbee_solver::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["  Abet ", "abet", "", "BEET"]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("beet"));
    /// ```
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = entries
            .into_iter()
            .filter_map(|entry| normalize(entry.as_ref()))
            .collect();
        Self { words }
    }

    /// Wrap a set whose entries are already normalised
    pub(crate) const fn from_normalized(words: FxHashSet<String>) -> Self {
        Self { words }
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the dictionary holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check membership of an already-normalised word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterate over the words in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// The underlying set
    #[inline]
    #[must_use]
    pub const fn as_set(&self) -> &FxHashSet<String> {
        &self.words
    }
}

/// Trim and lowercase one entry, or `None` if nothing is left
pub(crate) fn normalize(entry: &str) -> Option<String> {
    let trimmed = entry.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
