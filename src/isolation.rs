//! Worker isolation for parallel counting.

use clap::ValueEnum;
use core::fmt::{self, Display, Formatter};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::WordBenchError;

/// Determines how parallel counting tasks are isolated from each other.
///
/// Performance characteristics:
/// - **Process**: Each task runs in its own OS process. Nothing is shared, at the
///   cost of a process launch and a copy of the text per task.
///
/// - **Thread**: Each task runs on a pool thread sharing the text in memory.
///   Much cheaper to start.
///
/// Both produce identical counts.
///
/// # Examples
///
/// ```
/// use word_bench::Isolation;
///
/// assert_eq!(Isolation::default(), Isolation::Process);
/// assert_eq!(Isolation::Thread.to_string(), "thread");
/// assert_eq!("THREAD".parse::<Isolation>().unwrap(), Isolation::Thread);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Isolation {
    /// One OS process per task.
    #[default]
    Process,

    /// One pool thread per task.
    Thread,
}

impl Isolation {
    /// Every isolation mode, in benchmark order.
    pub const ALL: [Self; 2] = [Self::Process, Self::Thread];

    /// Title-cased name used in benchmark labels.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Process => "Process",
            Self::Thread => "Thread",
        }
    }
}

impl Display for Isolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Process => write!(f, "process"),
            Self::Thread => write!(f, "thread"),
        }
    }
}

impl FromStr for Isolation {
    type Err = WordBenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            s if s.eq_ignore_ascii_case("process") => Ok(Self::Process),
            s if s.eq_ignore_ascii_case("thread") => Ok(Self::Thread),
            other => Err(WordBenchError::Usage(format!(
                "isolation must be 'process' or 'thread', got {other:?}"
            ))),
        }
    }
}
