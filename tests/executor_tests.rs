//! Tests for thread- and process-isolated parallel counting.

use std::io::Cursor;
use std::num::NonZeroUsize;

use word_bench::counter::count;
use word_bench::executor::process::run_worker;
use word_bench::{
    Isolation, ProcessExecutor, TaskExecutor, ThreadExecutor, WordBenchError, WordList,
    count_parallel,
};

const WORKER_PROGRAM: &str = env!("CARGO_BIN_EXE_word-count-par");

const TEXT: &str = "my dear miss howe, your letter reached me. clarissa speaks of virtue; \
                    lovelace of nothing but clarissa. dear, dear letter. the newsletter is late.";

fn workers(count: usize) -> NonZeroUsize {
    NonZeroUsize::new(count).unwrap()
}

fn process_executor(count: usize) -> ProcessExecutor {
    ProcessExecutor::with_program(workers(count), WORKER_PROGRAM).unwrap()
}

#[test]
fn test_thread_matches_sequential() {
    let words = WordList::default();
    let expected = count(TEXT, words.as_slice()).unwrap();

    for pool in [1, 2, 4, 16] {
        let executor = ThreadExecutor::new(workers(pool)).unwrap();
        assert_eq!(executor.execute(TEXT, words.as_slice()).unwrap(), expected);
    }
}

#[test]
fn test_process_matches_sequential() {
    let words = WordList::default();
    let expected = count(TEXT, words.as_slice()).unwrap();

    for pool in [1, 3] {
        let executor = process_executor(pool);
        assert_eq!(executor.execute(TEXT, words.as_slice()).unwrap(), expected);
    }
}

#[test]
fn test_count_parallel_matches_sequential_for_every_isolation() {
    let text = "dear clarissa, dear reader, virtue";
    let words = WordList::new(["clarissa", "dear", "virtue"]).unwrap();
    let expected = count(text, words.as_slice()).unwrap();

    for isolation in Isolation::ALL {
        let tally = count_parallel(text, words.as_slice(), workers(2), isolation).unwrap();
        assert_eq!(tally, expected, "{isolation}");
    }
}

#[test]
fn test_default_worker_is_parallel_counter() {
    let executor = ProcessExecutor::new(workers(2)).unwrap();

    assert_eq!(
        executor.program().file_stem().and_then(|stem| stem.to_str()),
        Some("word-count-par")
    );
    assert!(executor.program().is_file());
}

#[test]
fn test_fewer_workers_than_words() {
    let words = WordList::default();
    let executor = ThreadExecutor::new(workers(1)).unwrap();
    let tally = executor.execute(TEXT, words.as_slice()).unwrap();

    assert_eq!(tally.len(), words.len());
    assert_eq!(tally[3], ("dear".into(), 3));
    assert_eq!(tally[2], ("letter".into(), 2));
}

#[test]
fn test_result_order_follows_words() {
    let words = WordList::new(["virtue", "clarissa", "miss"]).unwrap();
    let executor = process_executor(2);
    let tally = executor.execute(TEXT, words.as_slice()).unwrap();

    assert_eq!(tally[0], ("virtue".into(), 1));
    assert_eq!(tally[1], ("clarissa".into(), 2));
    assert_eq!(tally[2], ("miss".into(), 1));
}

#[test]
fn test_empty_word_list() {
    let words = WordList::new(Vec::<String>::new()).unwrap();
    let tally = count_parallel(TEXT, words.as_slice(), workers(2), Isolation::Thread).unwrap();

    assert!(tally.is_empty());
}

#[test]
fn test_count_parallel_thread() {
    let text = "Dear Clarissa, dear reader, virtue is its own reward.".to_lowercase();
    let words = WordList::new(["clarissa", "dear", "virtue"]).unwrap();
    let tally = count_parallel(&text, words.as_slice(), workers(2), Isolation::Thread).unwrap();

    assert_eq!(tally, count(&text, words.as_slice()).unwrap());
    assert_eq!(tally[1], ("dear".into(), 2));
}

#[test]
fn test_executor_properties() {
    let thread = ThreadExecutor::new(workers(3)).unwrap();
    assert_eq!(thread.workers(), 3);
    assert_eq!(thread.isolation(), Isolation::Thread);

    let process = process_executor(2);
    assert_eq!(process.workers(), 2);
    assert_eq!(process.isolation(), Isolation::Process);
    assert_eq!(process.program().to_str(), Some(WORKER_PROGRAM));
}

#[test]
fn test_missing_worker_program_fails() {
    let executor =
        ProcessExecutor::with_program(workers(2), "/nonexistent/word-count-par").unwrap();
    let err = executor
        .execute(TEXT, WordList::default().as_slice())
        .unwrap_err();

    assert!(matches!(err, WordBenchError::Launch { .. }));
}

#[test]
fn test_failing_worker_fails_whole_tally() {
    // The sequential program rejects `--worker`, so every task exits non-zero.
    let executor =
        ProcessExecutor::with_program(workers(2), env!("CARGO_BIN_EXE_word-count")).unwrap();
    let err = executor
        .execute(TEXT, WordList::default().as_slice())
        .unwrap_err();

    assert!(matches!(err, WordBenchError::Task { .. }));
}

#[test]
fn test_run_worker() {
    let mut output = Vec::new();
    run_worker("dear", Cursor::new("dear reader, my dear"), &mut output).unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), "2\n");
}

#[test]
fn test_run_worker_rejects_invalid_utf8() {
    let mut output = Vec::new();
    let err = run_worker("dear", Cursor::new(vec![b'd', 0xff, b'r']), &mut output).unwrap_err();

    assert!(matches!(err, WordBenchError::Utf8 { byte: 1, .. }));
    assert!(output.is_empty());
}
