use spellbee_solver::session::Session;
use spellbee_solver::solver::solve;
use spellbee_solver::wordlists::loader::load_from_file;
use std::fs;
use std::io::Write;
use std::sync::Arc;
use tempfile::{NamedTempFile, TempDir};

fn word_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn load_file_trims_lowercases_and_deduplicates() {
    let file = word_file(b"Abet\r\n\n   beet  \nABET\n\ttabbed\n");
    let dictionary = load_from_file(file.path()).unwrap();

    assert_eq!(dictionary.len(), 3);
    assert!(dictionary.contains("abet"));
    assert!(dictionary.contains("beet"));
    assert!(dictionary.contains("tabbed"));
}

#[test]
fn load_file_with_carriage_return_line_endings() {
    let file = word_file(b"abet\rbeet\r");
    let dictionary = load_from_file(file.path()).unwrap();

    assert_eq!(dictionary.len(), 2);
    assert_eq!(solve("aBet", &dictionary).unwrap().as_slice(), ["abet", "beet"]);
}

#[test]
fn load_empty_file() {
    let file = word_file(b"");
    assert!(load_from_file(file.path()).unwrap().is_empty());
}

#[test]
fn load_missing_file_is_source_unavailable() {
    let dir = TempDir::new().unwrap();
    let err = load_from_file(dir.path().join("absent.txt")).unwrap_err();
    assert!(err.is_source_unavailable());
}

#[test]
fn load_directory_is_source_unavailable() {
    let dir = TempDir::new().unwrap();
    let err = load_from_file(dir.path()).unwrap_err();
    assert!(err.is_source_unavailable());
}

#[test]
fn load_invalid_utf8_is_source_unavailable() {
    let file = word_file(b"abet\n\xc3\x28\n");
    let err = load_from_file(file.path()).unwrap_err();
    assert!(err.is_source_unavailable());
}

#[test]
fn session_reload_swaps_dictionary() {
    let first = word_file(b"abet\n");
    let dir = TempDir::new().unwrap();
    let second_path = dir.path().join("second.txt");
    fs::write(&second_path, "beet\nabet\n").unwrap();

    let mut session = Session::from_file(first.path()).unwrap();
    let old = session.dictionary();
    assert_eq!(session.solve("aBet").unwrap().as_slice(), ["abet"]);

    session.reload(&second_path).unwrap();

    assert_eq!(session.label(), "second.txt");
    assert_eq!(session.solve("aBet").unwrap().as_slice(), ["abet", "beet"]);
    // Handles taken before the swap still see the old dictionary
    assert_eq!(old.len(), 1);
    assert!(!Arc::ptr_eq(&old, &session.dictionary()));
}

#[test]
fn session_failed_reload_keeps_previous_dictionary() {
    let first = word_file(b"abet\nbeet\n");
    let mut session = Session::from_file(first.path()).unwrap();
    let label = session.label().to_string();
    let before = session.dictionary();

    let dir = TempDir::new().unwrap();
    assert!(session.reload(dir.path().join("missing.txt")).is_err());

    assert_eq!(session.label(), label);
    assert!(Arc::ptr_eq(&before, &session.dictionary()));
    assert_eq!(session.solve("aBet").unwrap().len(), 2);
}

#[test]
fn session_describe_mentions_file_and_count() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(&path, "abet\nbeet\nbead\n").unwrap();

    let session = Session::from_file(&path).unwrap();
    assert_eq!(session.describe(), "Dictionary loaded: words.txt (3 words)");
}
