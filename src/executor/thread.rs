//! Thread-isolated counting tasks.

use core::num::NonZeroUsize;

use rayon::ThreadPool;

use super::{TaskExecutor, build_pool, dispatch};
use crate::counter::count_word;
use crate::{Isolation, Tally, Word, WordBenchError};

/// Runs each counting task on a thread of a dedicated rayon pool.
///
/// Tasks borrow the text; the matcher only reads it, so nothing needs locking.
#[derive(Debug)]
pub struct ThreadExecutor {
    pool: ThreadPool,
}

impl ThreadExecutor {
    /// Creates an executor backed by `workers` threads.
    ///
    /// # Errors
    ///
    /// Returns `WordBenchError::Config` if the thread pool cannot be built.
    pub fn new(workers: NonZeroUsize) -> Result<Self, WordBenchError> {
        Ok(Self {
            pool: build_pool(workers)?,
        })
    }
}

impl TaskExecutor for ThreadExecutor {
    fn execute(&self, text: &str, words: &[Word]) -> Result<Tally, WordBenchError> {
        dispatch(&self.pool, words, |word| count_word(text, word))
    }

    fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    fn isolation(&self) -> Isolation {
        Isolation::Thread
    }
}
