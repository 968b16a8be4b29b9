//! `word-count` counts the vocabulary in the input file sequentially.

use anyhow::Result;
use clap::Parser;
use std::process;
use word_bench::exit_code::ExitCode;
use word_bench::{Input, Output, WordList, counter};

/// Count each word of the vocabulary in the input file, one word after another.
///
/// Reads `book.txt` (or `$WORD_BENCH_INPUT`) and prints `word: count` lines.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {}

fn main() -> process::ExitCode {
    match run() {
        Ok(()) => ExitCode::Success.into(),
        Err(err) => ExitCode::report(&err).into(),
    }
}

fn run() -> Result<()> {
    Args::try_parse()?;

    let text = Input::from_env().read_lowercase()?;
    let words = WordList::default();
    let tally = counter::count(&text, words.as_slice())?;

    Output::stdout().write_tally(&tally)
}
