use clap::Parser;
use core::num::NonZeroUsize;
use std::path::PathBuf;
use word_bench::{BenchConfig, Format};

#[derive(Debug, Parser)]
#[command(about, version)]
pub(crate) struct Args {
    /// Report file [default: benchmark_results.csv, or .json with --format json].
    #[arg(short, long, value_name = "PATH")]
    pub(crate) output: Option<PathBuf>,

    /// Report format.
    #[arg(short, long, default_value_t, value_enum, value_name = "FORMAT")]
    pub(crate) format: Format,

    /// Runs per configuration [env: WORD_BENCH_REPEATS, default: 30].
    #[arg(short, long, value_name = "COUNT")]
    pub(crate) repeats: Option<usize>,

    /// Leading runs treated as warmups [env: WORD_BENCH_WARMUPS, default: 3].
    #[arg(short, long, value_name = "COUNT")]
    pub(crate) warmups: Option<usize>,

    /// Comma-delimited pool sizes for the parallel program [default: 2,4,8,16].
    #[arg(short, long, use_value_delimiter = true, value_name = "COUNTS")]
    pub(crate) threads: Option<Vec<NonZeroUsize>>,

    /// Sequential counting program [default: word-count beside this executable].
    #[arg(long, value_name = "PATH")]
    pub(crate) sequential: Option<PathBuf>,

    /// Parallel counting program [default: word-count-par beside this executable].
    #[arg(long, value_name = "PATH")]
    pub(crate) parallel: Option<PathBuf>,

    /// Print progress to stderr.
    #[arg(short = 'v', long)]
    pub(crate) verbose: bool,
}

impl Args {
    /// Environment defaults overridden by any flags given.
    pub(crate) fn bench_config(&self) -> BenchConfig {
        let mut config = BenchConfig::from_env();

        if let Some(repeats) = self.repeats {
            config = config.with_repeats(repeats);
        }
        if let Some(warmups) = self.warmups {
            config = config.with_warmups(warmups);
        }
        if let Some(threads) = &self.threads {
            config = config.with_thread_counts(threads.clone());
        }

        config
    }

    /// Report path, defaulting by format.
    pub(crate) fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.format.default_path()))
    }
}
