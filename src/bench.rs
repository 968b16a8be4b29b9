//! Benchmark orchestration: the configuration matrix and repeated timing runs.
//!
//! Every configuration is run `repeats` times, one process after another, and
//! configurations never overlap so runs don't compete for CPU. The samples of
//! each configuration are then classified by [`crate::stats::classify`].

use core::num::NonZeroUsize;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::runner::{self, Command, Runner};
use crate::stats::{self, Classification, SampleState};
use crate::system::SystemInfo;
use crate::{Isolation, WordBenchError};

/// Binary name of the sequential counting program.
pub const SEQUENTIAL_PROGRAM: &str = "word-count";

/// Binary name of the parallel counting program.
pub const PARALLEL_PROGRAM: &str = "word-count-par";

/// Locations of the two counting programs.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Programs {
    pub sequential: PathBuf,
    pub parallel: PathBuf,
}

impl Programs {
    /// Creates program locations from explicit paths.
    pub fn new<S: Into<PathBuf>, P: Into<PathBuf>>(sequential: S, parallel: P) -> Self {
        Self {
            sequential: sequential.into(),
            parallel: parallel.into(),
        }
    }

    /// Resolves both programs next to the running executable.
    ///
    /// # Errors
    ///
    /// Returns `WordBenchError::Io` if the current executable cannot be located.
    pub fn beside_current_exe() -> Result<Self, WordBenchError> {
        Ok(Self::new(
            runner::locate_program(SEQUENTIAL_PROGRAM)?,
            runner::locate_program(PARALLEL_PROGRAM)?,
        ))
    }
}

/// Sampling settings and the configuration matrix.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchConfig {
    /// Runs per configuration.
    pub repeats: usize,

    /// Leading runs per configuration classified as warmups.
    pub warmups: usize,

    /// Pool sizes for the parallel program.
    pub thread_counts: Vec<NonZeroUsize>,

    /// Isolation modes for the parallel program.
    pub isolations: Vec<Isolation>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            repeats: Self::REPEATS,
            warmups: Self::WARMUPS,
            thread_counts: Self::THREAD_COUNTS
                .iter()
                .filter_map(|&count| NonZeroUsize::new(count))
                .collect(),
            isolations: Isolation::ALL.to_vec(),
        }
    }
}

impl BenchConfig {
    /// Runs per configuration is 30.
    const REPEATS: usize = 30;
    /// First 3 runs are warmups.
    const WARMUPS: usize = 3;
    /// Parallel pool sizes.
    const THREAD_COUNTS: [usize; 4] = [2, 4, 8, 16];

    // Environment variable names for configuration.
    const ENV_REPEATS: &'static str = "WORD_BENCH_REPEATS";
    const ENV_WARMUPS: &'static str = "WORD_BENCH_WARMUPS";

    /// Create a configuration from environment variables if present.
    pub fn from_env() -> Self {
        // Parse environment variables only once and cache the result
        static CONFIG: OnceLock<BenchConfig> = OnceLock::new();

        CONFIG
            .get_or_init(|| Self {
                repeats: Self::parse_env_var(Self::ENV_REPEATS, Self::REPEATS),
                warmups: Self::parse_env_var(Self::ENV_WARMUPS, Self::WARMUPS),
                ..Self::default()
            })
            .clone()
    }

    fn parse_env_var(name: &str, default: usize) -> usize {
        env::var(name)
            .ok()
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(default)
    }

    /// Set the runs per configuration.
    #[must_use]
    pub const fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    /// Set the warmup runs per configuration.
    #[must_use]
    pub const fn with_warmups(mut self, warmups: usize) -> Self {
        self.warmups = warmups;
        self
    }

    /// Set the parallel pool sizes.
    #[must_use]
    pub fn with_thread_counts(mut self, thread_counts: Vec<NonZeroUsize>) -> Self {
        self.thread_counts = thread_counts;
        self
    }

    /// Set the parallel isolation modes.
    #[must_use]
    pub fn with_isolations(mut self, isolations: Vec<Isolation>) -> Self {
        self.isolations = isolations;
        self
    }

    /// Checks that at least one sample is taken per configuration.
    ///
    /// # Errors
    ///
    /// Returns `WordBenchError::Config` if `repeats` is zero.
    pub fn validate(&self) -> Result<(), WordBenchError> {
        if self.repeats == 0 {
            return Err(WordBenchError::Config(
                "repeats must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// One row of the configuration matrix.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Configuration {
    /// Stable label identifying the program and its settings.
    pub label: String,

    /// What to launch for each sample.
    pub command: Command,
}

impl Configuration {
    /// The sequential program.
    pub fn sequential(program: &Path) -> Self {
        Self {
            label: SEQUENTIAL_PROGRAM.to_string(),
            command: Command::new(program),
        }
    }

    /// The parallel program with a pool of `threads` and the given isolation.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::num::NonZeroUsize;
    /// use std::path::Path;
    /// use word_bench::{Isolation, bench::Configuration};
    ///
    /// let threads = NonZeroUsize::new(4).unwrap();
    /// let config = Configuration::parallel(Path::new("word-count-par"), threads, Isolation::Thread);
    /// assert_eq!(config.label, "word-count-par - 4 threads - Thread");
    /// ```
    pub fn parallel(program: &Path, threads: NonZeroUsize, isolation: Isolation) -> Self {
        Self {
            label: format!("{PARALLEL_PROGRAM} - {threads} threads - {}", isolation.title()),
            command: Command::new(program)
                .arg(threads.to_string())
                .arg(isolation.to_string()),
        }
    }

    /// The full matrix: the sequential row, then each thread count with each isolation.
    pub fn matrix(config: &BenchConfig, programs: &Programs) -> Vec<Self> {
        let parallel = config.thread_counts.iter().flat_map(|&threads| {
            config
                .isolations
                .iter()
                .map(move |&isolation| Self::parallel(&programs.parallel, threads, isolation))
        });

        core::iter::once(Self::sequential(&programs.sequential))
            .chain(parallel)
            .collect()
    }
}

/// The samples and classification of one configuration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunRecord {
    label: String,
    times: Vec<f64>,
    #[serde(flatten)]
    classification: Classification,
}

impl RunRecord {
    /// Classifies `times` and records the result under `label`.
    pub fn new(label: impl Into<String>, times: Vec<f64>, warmups: usize) -> Self {
        let classification = stats::classify(&times, warmups);

        Self {
            label: label.into(),
            times,
            classification,
        }
    }

    /// Gets the label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Gets the samples in seconds, in run order.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Gets the classification of the samples.
    pub const fn classification(&self) -> &Classification {
        &self.classification
    }

    /// Gets one state per sample.
    pub fn states(&self) -> &[SampleState] {
        &self.classification.states
    }

    /// Gets the mean of valid samples, `None` when there are none.
    pub const fn mean(&self) -> Option<f64> {
        self.classification.mean
    }

    /// Iterates over `(time, state)` pairs in run order.
    pub fn samples(&self) -> impl Iterator<Item = (f64, SampleState)> {
        self.times
            .iter()
            .copied()
            .zip(self.classification.states.iter().copied())
    }

    /// Number of samples in `state`.
    pub fn count(&self, state: SampleState) -> usize {
        self.classification.count(state)
    }
}

/// System metadata plus one record per configuration, in matrix order.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkReport {
    pub system: SystemInfo,
    pub runs: Vec<RunRecord>,
}

/// Drives a [`Runner`] through the configuration matrix.
#[derive(Clone, Debug)]
pub struct Benchmark {
    config: BenchConfig,
    configurations: Vec<Configuration>,
}

impl Benchmark {
    /// Plans a benchmark of `programs` under `config`.
    pub fn new(config: BenchConfig, programs: &Programs) -> Self {
        let configurations = Configuration::matrix(&config, programs);
        Self {
            config,
            configurations,
        }
    }

    /// Gets the sampling configuration.
    pub const fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Gets the planned configurations in run order.
    pub fn configurations(&self) -> &[Configuration] {
        &self.configurations
    }

    /// Samples one configuration `repeats` times.
    ///
    /// # Errors
    ///
    /// Propagates the first launch failure.
    pub fn sample<R: Runner>(
        &self,
        runner: &mut R,
        configuration: &Configuration,
    ) -> Result<RunRecord, WordBenchError> {
        let times = (0..self.config.repeats)
            .map(|_| {
                runner
                    .run(&configuration.command)
                    .map(|elapsed| elapsed.as_secs_f64())
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RunRecord::new(
            configuration.label.clone(),
            times,
            self.config.warmups,
        ))
    }

    /// Runs every configuration and assembles the report.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or any launch fails;
    /// completed records are discarded.
    pub fn run<R: Runner>(
        &self,
        runner: &mut R,
        system: SystemInfo,
    ) -> Result<BenchmarkReport, WordBenchError> {
        self.run_with(runner, system, |_| Ok(()))
    }

    /// Like [`Benchmark::run`], calling `on_record` after each configuration completes.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, any launch fails, or
    /// `on_record` fails.
    pub fn run_with<R, F, E>(
        &self,
        runner: &mut R,
        system: SystemInfo,
        mut on_record: F,
    ) -> Result<BenchmarkReport, E>
    where
        R: Runner,
        F: FnMut(&RunRecord) -> Result<(), E>,
        E: From<WordBenchError>,
    {
        self.config.validate()?;

        let mut runs = Vec::with_capacity(self.configurations.len());
        for configuration in &self.configurations {
            let record = self.sample(runner, configuration)?;
            on_record(&record)?;
            runs.push(record);
        }

        Ok(BenchmarkReport { system, runs })
    }
}
