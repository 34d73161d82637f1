//! Validates word list parsing, normalization, and load failures

use wordweave::PlacementError;
use wordweave::io::wordlist::{load_word_list, parse_word_list};

#[test]
fn test_parse_normalizes_and_deduplicates() {
    let content = "# breakfast words\nTea\n\n  seat  \nEAT\ntea\n";
    let Ok(vocabulary) = parse_word_list(content) else {
        unreachable!("content is a valid word list");
    };

    assert_eq!(vocabulary.words(), ["tea", "seat", "eat"]);
    assert!(vocabulary.contains("TEA"));
    assert!(vocabulary.contains_letters(b"seat"));
    assert!(!vocabulary.contains("coffee"));
}

#[test]
fn test_parse_rejects_non_letter_characters() {
    let result = parse_word_list("tea\nse4t\n");
    assert!(matches!(
        result,
        Err(PlacementError::InvalidWord { word, .. }) if word == "se4t"
    ));
}

#[test]
fn test_load_from_file() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("temp directory creation");
    };
    let path = dir.path().join("words.txt");
    if std::fs::write(&path, "seat\ntea\n").is_err() {
        unreachable!("temp file write");
    }

    let Ok(vocabulary) = load_word_list(&path) else {
        unreachable!("file exists and is valid");
    };
    assert_eq!(vocabulary.len(), 2);
}

#[test]
fn test_missing_file_reports_path() {
    let result = load_word_list(std::path::Path::new("/nonexistent/words.txt"));
    assert!(matches!(
        result,
        Err(PlacementError::WordListLoad { path, .. })
            if path == std::path::Path::new("/nonexistent/words.txt")
    ));
}

#[test]
fn test_empty_file_yields_empty_vocabulary() {
    let Ok(vocabulary) = parse_word_list("# only comments\n\n") else {
        unreachable!("comments and blanks are a valid word list");
    };
    assert!(vocabulary.is_empty());
}
