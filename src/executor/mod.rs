//! Parallel counting over a bounded worker pool.
//!
//! Every word becomes one independent task. A [`TaskExecutor`] decides where
//! the task runs: on a pool thread ([`ThreadExecutor`]) or in a child process
//! ([`ProcessExecutor`]). In both cases a rayon pool of `workers` threads bounds
//! how many tasks are in flight, and results are collected in word order.

pub mod process;
pub mod thread;

use core::fmt::Debug;
use core::num::NonZeroUsize;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

pub use process::ProcessExecutor;
pub use thread::ThreadExecutor;

use crate::{Count, Isolation, Tally, Word, WordBenchError};

/// A strategy for running one counting task per word.
pub trait TaskExecutor: Debug + Send + Sync {
    /// Counts each of `words` in `text` as a separate task.
    ///
    /// # Errors
    ///
    /// Fails as soon as any task fails; no partial tally is returned.
    fn execute(&self, text: &str, words: &[Word]) -> Result<Tally, WordBenchError>;

    /// Maximum number of tasks in flight.
    fn workers(&self) -> usize;

    /// The isolation this executor provides.
    fn isolation(&self) -> Isolation;
}

/// Creates the executor for `isolation` with a pool of `workers`.
///
/// # Errors
///
/// Returns an error if the pool cannot be built or, for process isolation,
/// the current executable cannot be located.
pub fn executor(
    isolation: Isolation,
    workers: NonZeroUsize,
) -> Result<Box<dyn TaskExecutor>, WordBenchError> {
    Ok(match isolation {
        Isolation::Process => Box::new(ProcessExecutor::new(workers)?),
        Isolation::Thread => Box::new(ThreadExecutor::new(workers)?),
    })
}

/// Counts `words` in `text` with one task per word on a pool of `workers`.
///
/// The result equals [`crate::counter::count`] for the same input.
///
/// # Errors
///
/// Returns an error if the pool cannot be set up or any task fails.
pub fn count_parallel(
    text: &str,
    words: &[Word],
    workers: NonZeroUsize,
    isolation: Isolation,
) -> Result<Tally, WordBenchError> {
    executor(isolation, workers)?.execute(text, words)
}

/// Builds a dedicated pool with exactly `workers` threads.
pub(crate) fn build_pool(workers: NonZeroUsize) -> Result<ThreadPool, WordBenchError> {
    ThreadPoolBuilder::new()
        .num_threads(workers.get())
        .thread_name(|index| format!("word-bench-worker-{index}"))
        .build()
        .map_err(|e| {
            WordBenchError::Config(format!(
                "failed to configure thread pool with {workers} threads: {e}"
            ))
        })
}

/// Runs `task` once per word inside `pool`, one word per rayon job.
pub(crate) fn dispatch<F>(
    pool: &ThreadPool,
    words: &[Word],
    task: F,
) -> Result<Tally, WordBenchError>
where
    F: Fn(&str) -> Result<Count, WordBenchError> + Sync,
{
    pool.install(|| {
        words
            .par_iter()
            .with_max_len(1)
            .map(|word| task(word.as_ref()).map(|count| (word.clone(), count)))
            .collect::<Result<Vec<_>, _>>()
    })
    .map(Vec::into_boxed_slice)
}
