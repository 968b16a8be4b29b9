//! Error types for word-bench.

use std::io;
use thiserror::Error;

/// Structured error types for word-bench
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid command-line usage.
    #[error("usage: {0}")]
    Usage(String),

    /// UTF-8 decoding error.
    #[error("invalid UTF-8 at byte {byte}: {message}")]
    Utf8 {
        /// Byte position of invalid UTF-8.
        byte: usize,
        /// Error message.
        message: String,
    },

    /// Invalid regex pattern.
    #[error("invalid pattern for word {word:?}: {message}")]
    Pattern {
        /// Word the pattern was built from.
        word: String,
        /// Error message.
        message: String,
    },

    /// A counting task failed, failing the whole tally.
    #[error("counting task for {word:?} failed: {message}")]
    Task {
        /// Word the task was counting.
        word: String,
        /// Error message.
        message: String,
    },

    /// A benchmarked program could not be started.
    #[error("failed to launch {program}")]
    Launch {
        /// Program that failed to spawn.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// JSON serialization error.
    #[error("JSON serialization failed")]
    JsonSerialization(#[from] serde_json::Error),

    /// CSV serialization error.
    #[error("CSV serialization failed")]
    CsvSerialization(#[from] csv::Error),

    /// I/O error with context.
    #[error("{message}: {path}")]
    Io {
        /// File path where error occurred.
        path: String,
        /// Error description.
        message: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Configuration error.
    #[error("invalid configuration: {0}")]
    Config(String),
}
