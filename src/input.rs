//! Loading the text file the counting programs search.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::WordBenchError;

/// `Input` is the text file read once per counting run.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Input {
    path: PathBuf,
}

impl Default for Input {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATH)
    }
}

impl Input {
    /// Input file read when no override is given.
    pub const DEFAULT_PATH: &'static str = "book.txt";

    /// Environment variable overriding the input path.
    pub const ENV_INPUT: &'static str = "WORD_BENCH_INPUT";

    /// Constructs an `Input` from a file path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Constructs an `Input` from `WORD_BENCH_INPUT`, or the default path.
    pub fn from_env() -> Self {
        env::var_os(Self::ENV_INPUT)
            .filter(|path| !path.is_empty())
            .map_or_else(Self::default, Self::new)
    }

    /// Gets the path of the input file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the path of the input for display.
    pub fn source(&self) -> String {
        self.path.display().to_string()
    }

    /// Reads the whole file and lowercases it.
    ///
    /// # Errors
    ///
    /// Returns `WordBenchError::Io` if the file cannot be read and
    /// `WordBenchError::Utf8` if it is not valid UTF-8.
    pub fn read_lowercase(&self) -> Result<String, WordBenchError> {
        let bytes = fs::read(&self.path).map_err(|source| WordBenchError::Io {
            path: self.source(),
            message: "failed to read input file".to_string(),
            source,
        })?;

        Ok(Self::decode(&bytes)?.to_lowercase())
    }

    /// Validates `bytes` as UTF-8, reporting the first invalid byte position.
    ///
    /// # Errors
    ///
    /// Returns `WordBenchError::Utf8` if `bytes` is not valid UTF-8.
    pub fn decode(bytes: &[u8]) -> Result<&str, WordBenchError> {
        simdutf8::compat::from_utf8(bytes).map_err(|e| WordBenchError::Utf8 {
            byte: e.valid_up_to(),
            message: "invalid UTF-8 sequence".to_string(),
        })
    }
}
