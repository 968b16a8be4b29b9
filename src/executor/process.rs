//! Process-isolated counting tasks.
//!
//! A task launches a worker process, writes the text to its stdin and reads the
//! count back from its stdout. By default the worker is `word-count-par` invoked
//! with [`ProcessExecutor::WORKER_FLAG`], which it serves with [`run_worker`].

use core::num::NonZeroUsize;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use rayon::ThreadPool;

use super::{TaskExecutor, build_pool, dispatch};
use crate::bench::PARALLEL_PROGRAM;
use crate::counter::count_word;
use crate::input::Input;
use crate::runner::locate_program;
use crate::{Count, Isolation, Tally, Word, WordBenchError};

/// Runs each counting task in its own child process.
///
/// The rayon pool only waits on children, so at most `workers` of them are alive
/// at any time.
#[derive(Debug)]
pub struct ProcessExecutor {
    pool: ThreadPool,
    program: PathBuf,
}

impl ProcessExecutor {
    /// Argument that switches a worker-capable program into single-word mode.
    pub const WORKER_FLAG: &'static str = "--worker";

    /// Creates an executor whose workers are `word-count-par`.
    ///
    /// That is the running executable when it is `word-count-par`, otherwise
    /// the `word-count-par` binary built alongside it.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot be built or the current executable
    /// cannot be located.
    pub fn new(workers: NonZeroUsize) -> Result<Self, WordBenchError> {
        Self::with_program(workers, locate_program(PARALLEL_PROGRAM)?)
    }

    /// Creates an executor whose workers are `program --worker <WORD>`.
    ///
    /// # Errors
    ///
    /// Returns `WordBenchError::Config` if the pool cannot be built.
    pub fn with_program<P: Into<PathBuf>>(
        workers: NonZeroUsize,
        program: P,
    ) -> Result<Self, WordBenchError> {
        Ok(Self {
            pool: build_pool(workers)?,
            program: program.into(),
        })
    }

    /// Gets the worker program.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Counts `word` in `text` inside one worker process.
    fn run_task(&self, text: &str, word: &str) -> Result<Count, WordBenchError> {
        let task_error = |message: String| WordBenchError::Task {
            word: word.to_string(),
            message,
        };

        let mut child = Command::new(&self.program)
            .arg(Self::WORKER_FLAG)
            .arg(word)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| WordBenchError::Launch {
                program: self.program.display().to_string(),
                source,
            })?;

        // Dropping stdin closes the pipe so the worker sees end of input.
        let sent = child
            .stdin
            .take()
            .map_or(Ok(()), |mut stdin| stdin.write_all(text.as_bytes()));

        let output = child
            .wait_with_output()
            .map_err(|e| task_error(format!("failed to wait for worker: {e}")))?;

        if !output.status.success() {
            return Err(task_error(format!(
                "worker exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        sent.map_err(|e| task_error(format!("failed to send text to worker: {e}")))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout
            .trim()
            .parse::<Count>()
            .map_err(|e| task_error(format!("unexpected worker output {:?}: {e}", stdout.trim())))
    }
}

impl TaskExecutor for ProcessExecutor {
    fn execute(&self, text: &str, words: &[Word]) -> Result<Tally, WordBenchError> {
        dispatch(&self.pool, words, |word| self.run_task(text, word))
    }

    fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    fn isolation(&self) -> Isolation {
        Isolation::Process
    }
}

/// Serves one worker task: reads text from `input`, writes the count of `word` to `output`.
///
/// # Errors
///
/// Returns an error if reading, decoding or writing fails.
pub fn run_worker<R: Read, W: Write>(
    word: &str,
    mut input: R,
    mut output: W,
) -> Result<(), WordBenchError> {
    let io_error = |message: &str, source| WordBenchError::Io {
        path: "<worker pipe>".to_string(),
        message: message.to_string(),
        source,
    };

    let mut bytes = Vec::new();
    input
        .read_to_end(&mut bytes)
        .map_err(|source| io_error("failed to read worker input", source))?;

    let count = count_word(Input::decode(&bytes)?, word)?;

    writeln!(output, "{count}")
        .and_then(|()| output.flush())
        .map_err(|source| io_error("failed to write worker output", source))
}
