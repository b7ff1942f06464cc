//! Host-side dictionary lifecycle
//!
//! A Session owns the active dictionary. Reloads build the replacement fully
//! before swapping it in, so a failed reload leaves the previous dictionary
//! active and solves never see a half-loaded one.

use crate::core::Result;
use crate::solver::{SolutionList, solve};
use crate::wordlists::{Dictionary, loader};
use log::{info, warn};
use std::path::Path;
use std::sync::Arc;

/// Label used for the embedded sample dictionary
pub const BUILTIN_LABEL: &str = "built-in sample";

/// The active dictionary plus a label describing where it came from
#[derive(Debug, Clone)]
pub struct Session {
    dictionary: Arc<Dictionary>,
    label: String,
}

impl Session {
    #[must_use]
    pub fn new(dictionary: Dictionary, label: impl Into<String>) -> Self {
        Self {
            dictionary: Arc::new(dictionary),
            label: label.into(),
        }
    }

    /// Session over the embedded sample dictionary
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(loader::builtin(), BUILTIN_LABEL)
    }

    /// Session over a dictionary file
    ///
    /// # Errors
    /// Returns `Error::SourceUnavailable` if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let dictionary = loader::load_from_file(path)?;
        Ok(Self::new(dictionary, file_label(path)))
    }

    /// Replace the dictionary with the contents of `path`
    ///
    /// # Errors
    /// Returns `Error::SourceUnavailable` if the file cannot be read; the
    /// current dictionary and label are kept in that case.
    pub fn reload<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let dictionary = loader::load_from_file(path).inspect_err(|e| {
            warn!("Keeping {} after failed reload: {e}", self.label);
        })?;

        self.dictionary = Arc::new(dictionary);
        self.label = file_label(path);
        info!("Switched to {} ({} words)", self.label, self.dictionary.len());
        Ok(())
    }

    /// Solve a puzzle against the active dictionary
    ///
    /// # Errors
    /// Returns `Error::InvalidPuzzleInput` if the input has no capital letter.
    pub fn solve(&self, raw_input: &str) -> Result<SolutionList> {
        solve(raw_input, &self.dictionary)
    }

    /// Shared handle to the active dictionary
    ///
    /// Handles taken before a reload keep pointing at the old dictionary.
    #[must_use]
    pub fn dictionary(&self) -> Arc<Dictionary> {
        Arc::clone(&self.dictionary)
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Status line, e.g. `Dictionary loaded: words.txt (1234 words)`
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "Dictionary loaded: {} ({} words)",
            self.label,
            self.dictionary.len()
        )
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}
