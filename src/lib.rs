//! Count a fixed vocabulary in a text file, and benchmark how fast that goes.
//!
//! `word-bench` ships three programs built on this library:
//!
//! - `word-count` counts each word of a [`WordList`] sequentially.
//! - `word-count-par` counts the same words with one task per word on a pool of
//!   workers, isolated either by process or by thread ([`Isolation`]).
//! - `word-bench` launches both programs repeatedly over a matrix of pool sizes
//!   and isolations, filters warmups and outliers from the timings and writes a
//!   CSV report headed by host information.
//!
//! Words are matched whole, with a `\b<word>\b` regular expression over text
//! that has been lowercased on load.
//!
//! ## Module structure
//!
//! - `bench.rs`: Configuration matrix and repeated timing runs
//! - `counter.rs`: Whole-word regex counting
//! - `error.rs`: Structured error types
//! - `executor/`: Parallel counting strategies
//!   - `executor/process.rs`: One child process per task
//!   - `executor/thread.rs`: One pool thread per task
//! - `exit_code.rs`: Exit code definitions and handling
//! - `input.rs`: Loading the input text
//! - `isolation.rs`: Process or thread isolation
//! - `output.rs`: Output to stdout and stderr
//! - `report.rs`: CSV and JSON report serialization
//! - `runner.rs`: Timing external programs
//! - `stats.rs`: Warmup and IQR outlier classification
//! - `system.rs`: Host metadata
//! - `words.rs`: The vocabulary
//!
//! # Examples
//!
//! ```
//! use std::num::NonZeroUsize;
//! use word_bench::{Isolation, WordList, counter, executor};
//!
//! # fn example() -> Result<(), word_bench::WordBenchError> {
//! let text = "Dear Clarissa, dear reader, virtue is its own reward.".to_lowercase();
//! let words = WordList::new(["clarissa", "dear", "virtue"])?;
//!
//! let sequential = counter::count(&text, words.as_slice())?;
//! let workers = NonZeroUsize::new(2).unwrap();
//! let parallel = executor::count_parallel(&text, words.as_slice(), workers, Isolation::Thread)?;
//!
//! assert_eq!(sequential, parallel);
//! assert_eq!(sequential[1], ("dear".into(), 2));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! Timings are classified with the interquartile-range rule:
//!
//! ```
//! use word_bench::stats::{SampleState, classify};
//!
//! let classification = classify(&[9.0, 1.0, 1.0, 1.0, 1.0, 1.0], 1);
//! assert_eq!(classification.states[0], SampleState::Warmup);
//! assert_eq!(classification.mean, Some(1.0));
//! ```

pub mod bench;
pub mod counter;
pub mod error;
pub mod executor;
pub mod exit_code;
pub mod input;
pub mod isolation;
pub mod output;
pub mod report;
pub mod runner;
pub mod stats;
pub mod system;
pub mod words;

pub use bench::{BenchConfig, Benchmark, BenchmarkReport, Configuration, Programs, RunRecord};
pub use error::Error as WordBenchError;
pub use executor::{ProcessExecutor, TaskExecutor, ThreadExecutor, count_parallel};
pub use input::Input;
pub use isolation::Isolation;
pub use output::Output;
pub use report::{Format, ReportWriter};
pub use runner::{CommandRunner, Runner};
pub use stats::{Classification, SampleState, classify};
pub use system::SystemInfo;
pub use words::WordList;

pub type Count = usize;
pub type Word = Box<str>;
pub type Tally = Box<[(Word, Count)]>;
