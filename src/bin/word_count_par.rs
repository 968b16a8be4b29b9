//! `word-count-par` counts the vocabulary with one task per word on a worker pool.

use anyhow::Result;
use clap::Parser;
use core::num::NonZeroUsize;
use std::io;
use std::process;
use word_bench::exit_code::ExitCode;
use word_bench::executor::{self, process::run_worker};
use word_bench::{Input, Isolation, Output, TaskExecutor, WordBenchError, WordList};

/// Count each word of the vocabulary in the input file, one task per word.
///
/// Reads `book.txt` (or `$WORD_BENCH_INPUT`) and prints `word: count` lines.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Number of workers in the pool.
    #[arg(value_name = "WORKERS", required_unless_present = "worker")]
    workers: Option<NonZeroUsize>,

    /// Isolate tasks by process or by thread.
    #[arg(
        default_value_t,
        value_enum,
        ignore_case = true,
        value_name = "ISOLATION"
    )]
    isolation: Isolation,

    /// Count WORD in text read from stdin and print the count.
    #[arg(long, hide = true, value_name = "WORD", conflicts_with = "workers")]
    worker: Option<String>,
}

fn main() -> process::ExitCode {
    match run() {
        Ok(()) => ExitCode::Success.into(),
        Err(err) => ExitCode::report(&err).into(),
    }
}

fn run() -> Result<()> {
    let args = Args::try_parse()?;

    if let Some(word) = &args.worker {
        run_worker(word, io::stdin().lock(), io::stdout().lock())?;
        return Ok(());
    }

    let workers = args
        .workers
        .ok_or_else(|| WordBenchError::Usage("WORKERS is required".to_string()))?;

    let text = Input::from_env().read_lowercase()?;
    let words = WordList::default();
    let executor: Box<dyn TaskExecutor> = executor::executor(args.isolation, workers)?;
    let tally = executor.execute(&text, words.as_slice())?;

    Output::stdout().write_tally(&tally)
}
