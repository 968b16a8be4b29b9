use word_bench::{WordBenchError, WordList};

#[test]
fn test_default_vocabulary() {
    let words = WordList::default();
    let list: Vec<&str> = words.iter().map(AsRef::as_ref).collect();

    assert_eq!(
        list,
        ["clarissa", "lovelace", "letter", "dear", "miss", "virtue"]
    );
    assert!(!words.is_empty());
}

#[test]
fn test_new_keeps_order() {
    let words = WordList::new(["virtue", "dear"]).unwrap();
    assert_eq!(words.to_string(), "virtue,dear");
    assert_eq!(words.len(), 2);
}

#[test]
fn test_rejects_uppercase() {
    let err = WordList::new(["Dear"]).unwrap_err();
    assert!(matches!(err, WordBenchError::Config(_)));
}

#[test]
fn test_rejects_empty_word() {
    let err = WordList::new(["dear", ""]).unwrap_err();
    assert!(matches!(err, WordBenchError::Config(_)));
}

#[test]
fn test_empty_list() {
    let words = WordList::new(Vec::<String>::new()).unwrap();
    assert!(words.is_empty());
}
