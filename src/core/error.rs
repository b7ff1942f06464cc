//! Error type shared by the loader and the qualification engine

use std::io;
use thiserror::Error;

/// Failure of a load or solve request
///
/// Both kinds are terminal for the request that raised them. Neither carries a
/// partial result.
#[derive(Debug, Error)]
pub enum Error {
    /// The dictionary source could not be opened or read
    #[error("Dictionary source unavailable: {source_name}: {source}")]
    SourceUnavailable {
        source_name: String,
        #[source]
        source: io::Error,
    },

    /// The puzzle string has no capitalised mandatory letter
    #[error("{0}")]
    InvalidPuzzleInput(String),
}

impl Error {
    pub(crate) fn source_unavailable(source_name: impl Into<String>, source: io::Error) -> Self {
        Self::SourceUnavailable {
            source_name: source_name.into(),
            source,
        }
    }

    /// True for `SourceUnavailable`
    #[must_use]
    pub const fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. })
    }

    /// True for `InvalidPuzzleInput`
    #[must_use]
    pub const fn is_invalid_puzzle(&self) -> bool {
        matches!(self, Self::InvalidPuzzleInput(_))
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, Error>;
