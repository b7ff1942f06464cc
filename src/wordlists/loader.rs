//! Dictionary loading utilities
//!
//! Reads newline-delimited word lists from files, readers, or the embedded
//! sample list.

use super::dictionary::{Dictionary, normalize};
use super::embedded::SAMPLE_WORDS;
use crate::core::{Error, Result};
use log::{debug, info};
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load a dictionary from a file
///
/// The file handle is closed before this returns.
///
/// # Errors
///
/// Returns `Error::SourceUnavailable` if the file cannot be opened or read,
/// including when it is not valid UTF-8. No partial dictionary is returned.
///
/// # Examples
/// ```no_run
/// use spellbee_solver::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let source_name = path.display().to_string();
    debug!("Opening dictionary {source_name}");

    let file = File::open(path).map_err(|e| Error::source_unavailable(&source_name, e))?;
    let dictionary = load_from_reader(BufReader::new(file), &source_name)?;

    info!("Loaded {} words from {source_name}", dictionary.len());
    Ok(dictionary)
}

/// Load a dictionary from any buffered reader
///
/// `source_name` only labels errors.
///
/// # Errors
///
/// Returns `Error::SourceUnavailable` on the first read failure.
///
/// # Examples
/// ```
/// use spellbee_solver::wordlists::loader::load_from_reader;
///
/// let text = "Abet\n\n  beet  \nabet\n";
/// let dictionary = load_from_reader(text.as_bytes(), "inline").unwrap();
/// assert_eq!(dictionary.len(), 2);
/// ```
pub fn load_from_reader<R: BufRead>(reader: R, source_name: &str) -> Result<Dictionary> {
    let mut words = FxHashSet::default();
    let mut lines = 0usize;

    for line in reader.lines() {
        let line = line.map_err(|e| Error::source_unavailable(source_name, e))?;
        // A bare '\r' also ends a line (classic Mac word lists)
        for part in line.split('\r') {
            lines += 1;
            if let Some(word) = normalize(part) {
                words.insert(word);
            }
        }
    }

    debug!(
        "{source_name}: {lines} lines, {} distinct words",
        words.len()
    );
    Ok(Dictionary::from_normalized(words))
}

/// The sample dictionary compiled into the binary
///
/// # Examples
/// ```
/// use spellbee_solver::wordlists::loader::builtin;
///
/// assert!(builtin().contains("trample"));
/// ```
#[must_use]
pub fn builtin() -> Dictionary {
    Dictionary::from_words(SAMPLE_WORDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Read};

    #[test]
    fn reader_trims_and_lowercases() {
        let dictionary = load_from_reader("  Tree \r\nFLEE\n".as_bytes(), "test").unwrap();
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("tree"));
        assert!(dictionary.contains("flee"));
    }

    #[test]
    fn reader_skips_blank_lines() {
        let dictionary = load_from_reader("\n\n   \nbent\n\n".as_bytes(), "test").unwrap();
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn reader_deduplicates() {
        let dictionary = load_from_reader("tent\nTent\nTENT\n".as_bytes(), "test").unwrap();
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn reader_splits_on_bare_carriage_return() {
        let dictionary = load_from_reader("abet\rbeet\r".as_bytes(), "cr").unwrap();
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("abet"));
        assert!(dictionary.contains("beet"));
    }

    #[test]
    fn reader_handles_mixed_line_endings() {
        let text = "abet\r\nbeet\rtent\n\r\rbent";
        let dictionary = load_from_reader(text.as_bytes(), "mixed").unwrap();
        assert_eq!(dictionary.len(), 4);
        assert!(dictionary.iter().all(|w| !w.contains('\r')));
    }

    #[test]
    fn reader_empty_source() {
        let dictionary = load_from_reader(io::empty(), "empty").unwrap();
        assert!(dictionary.is_empty());
    }

    #[test]
    fn reader_rejects_invalid_utf8() {
        let bytes: &[u8] = b"good\n\xff\xfe\n";
        let err = load_from_reader(bytes, "binary").unwrap_err();
        assert!(err.is_source_unavailable());
        assert!(err.to_string().contains("binary"));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("device gone"))
        }
    }

    #[test]
    fn reader_error_is_source_unavailable() {
        let err = load_from_reader(BufReader::new(FailingReader), "device").unwrap_err();
        assert!(err.is_source_unavailable());
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let err = load_from_file("definitely/not/here.txt").unwrap_err();
        assert!(err.is_source_unavailable());
        assert!(err.to_string().contains("here.txt"));
    }

    #[test]
    fn builtin_matches_embedded_list() {
        let dictionary = builtin();
        assert_eq!(dictionary.len(), SAMPLE_WORDS.len());
        assert!(dictionary.contains("blanket"));
    }
}
