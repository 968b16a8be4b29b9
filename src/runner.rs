//! Timing external programs.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command as Process, Stdio};
use std::time::{Duration, Instant};

use crate::WordBenchError;

/// A program and its arguments, launched once per benchmark sample.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Command {
    program: PathBuf,
    args: Vec<OsString>,
}

impl Command {
    /// Creates a command for `program` with no arguments.
    pub fn new<P: Into<PathBuf>>(program: P) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Appends an argument.
    pub fn arg<S: Into<OsString>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Gets the program.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Gets the arguments.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }
}

/// Runs a command to completion and reports how long it took.
pub trait Runner {
    /// Runs `command` once and returns the elapsed wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns `WordBenchError::Launch` if the command cannot be started.
    fn run(&mut self, command: &Command) -> Result<Duration, WordBenchError>;
}

/// Launches real child processes with all standard streams discarded.
///
/// The exit status is ignored: a run counts as long as the process started
/// and was waited on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommandRunner;

impl Runner for CommandRunner {
    fn run(&mut self, command: &Command) -> Result<Duration, WordBenchError> {
        let launch_error = |source| WordBenchError::Launch {
            program: command.program.display().to_string(),
            source,
        };

        let start = Instant::now();
        let mut child = Process::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(launch_error)?;
        child.wait().map_err(launch_error)?;

        Ok(start.elapsed())
    }
}

/// Locates the `name` binary built alongside the running executable.
///
/// Returns the running executable itself when it is `name`. Otherwise looks in
/// its directory, then in the parent of a `deps` directory (where test
/// binaries live). Falls back to the sibling path, which fails to launch if
/// nothing is there.
///
/// # Errors
///
/// Returns `WordBenchError::Io` if the current executable cannot be located.
pub fn locate_program(name: &str) -> Result<PathBuf, WordBenchError> {
    let exe = env::current_exe().map_err(|source| WordBenchError::Io {
        path: "<current executable>".to_string(),
        message: format!("failed to locate {name}"),
        source,
    })?;

    if exe.file_stem().is_some_and(|stem| stem == name) {
        return Ok(exe);
    }

    let file_name = format!("{name}{}", env::consts::EXE_SUFFIX);
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    let sibling = dir.join(&file_name);

    let beside_deps = dir
        .file_name()
        .is_some_and(|dir_name| dir_name == "deps")
        .then(|| dir.parent().map(|parent| parent.join(&file_name)))
        .flatten();

    Ok(core::iter::once(sibling.clone())
        .chain(beside_deps)
        .find(|candidate| candidate.is_file())
        .unwrap_or(sibling))
}
