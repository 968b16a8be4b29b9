use std::fs;

use word_bench::exit_code::ExitCode;
use word_bench::{Input, WordBenchError};

#[test]
fn test_default_path() {
    assert_eq!(Input::default().path().to_str(), Some("book.txt"));
    assert_eq!(Input::DEFAULT_PATH, "book.txt");
}

#[test]
fn test_read_lowercase() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.txt");
    fs::write(&path, "Dear CLARISSA,\nVirtue!").unwrap();

    let text = Input::new(&path).read_lowercase().unwrap();

    assert_eq!(text, "dear clarissa,\nvirtue!");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = Input::new(dir.path().join("missing.txt"));

    let err = input.read_lowercase().unwrap_err();

    assert!(matches!(err, WordBenchError::Io { .. }));
    assert!(err.to_string().contains("missing.txt"));
    assert_eq!(ExitCode::from(&err), ExitCode::InputNotFound);
}

#[test]
fn test_invalid_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.txt");
    fs::write(&path, [b'o', b'k', b' ', 0xc3, 0x28]).unwrap();

    let err = Input::new(&path).read_lowercase().unwrap_err();

    assert!(matches!(err, WordBenchError::Utf8 { byte: 3, .. }));
    assert_eq!(ExitCode::from(&err), ExitCode::DataFormat);
}

#[test]
fn test_decode() {
    assert_eq!(Input::decode("lovelace".as_bytes()).unwrap(), "lovelace");
    assert!(Input::decode(&[0xff]).is_err());
}

#[test]
fn test_source() {
    assert_eq!(Input::new("some/book.txt").source(), "some/book.txt");
}
