//! Exit codes following Unix sysexits.h conventions.

use std::{io, process};

use clap::error::ErrorKind as ClapErrorKind;

use crate::error::Error as WordBenchError;

/// Exit codes following Unix sysexits.h convention
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ExitCode {
    /// Successful termination
    Success = 0,
    /// General failure
    Failure = 1,
    /// Command line usage error
    UsageError = 64,
    /// Data format error
    DataFormat = 65,
    /// Cannot open input
    InputNotFound = 66,
    /// A benchmarked program is unavailable
    Unavailable = 69,
    /// Internal software error
    InternalError = 70,
    /// Cannot create output
    OutputFailed = 73,
    /// I/O error
    IoError = 74,
    /// Permission denied
    PermissionDenied = 77,
}

impl ExitCode {
    /// Whether this code reports a usage error rather than a runtime failure.
    pub const fn is_usage(self) -> bool {
        matches!(self, Self::UsageError)
    }

    /// Prints `err` for the user and returns the matching exit code.
    ///
    /// Clap errors print their own usage or help text; everything else is
    /// printed to stderr with its cause chain.
    pub fn report(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<clap::Error>() {
            Some(clap_err) => {
                // Nothing left to report to if the terminal is gone.
                clap_err.print().ok();
            }
            None => eprintln!("Error: {err:#}"),
        }

        Self::from(err)
    }
}

impl From<&io::Error> for ExitCode {
    fn from(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::InputNotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::AlreadyExists => Self::OutputFailed,
            _ => Self::IoError,
        }
    }
}

impl From<&clap::Error> for ExitCode {
    fn from(err: &clap::Error) -> Self {
        match err.kind() {
            // Successful `--help` or `--version` display
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => Self::Success,
            // Clap usage errors
            _ => Self::UsageError,
        }
    }
}

impl From<&WordBenchError> for ExitCode {
    fn from(err: &WordBenchError) -> Self {
        match err {
            WordBenchError::Usage(_) | WordBenchError::Config(_) => Self::UsageError,
            WordBenchError::Utf8 { .. }
            | WordBenchError::Pattern { .. }
            | WordBenchError::JsonSerialization(_)
            | WordBenchError::CsvSerialization(_) => Self::DataFormat,
            WordBenchError::Launch { .. } => Self::Unavailable,
            WordBenchError::Task { .. } => Self::InternalError,
            WordBenchError::Io { source, .. } => Self::from(source),
        }
    }
}

impl From<&anyhow::Error> for ExitCode {
    fn from(err: &anyhow::Error) -> Self {
        err.downcast_ref::<WordBenchError>()
            .map(Self::from)
            .or_else(|| err.downcast_ref::<clap::Error>().map(Self::from))
            .or_else(|| err.downcast_ref::<io::Error>().map(Self::from))
            .unwrap_or(Self::Failure)
    }
}

impl From<ExitCode> for process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}
