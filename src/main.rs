//! `word-bench` times the word-count programs across pool sizes and isolations.

pub(crate) mod args;
pub(crate) mod verbose;

use anyhow::Result;
use args::Args;
use clap::Parser;
use std::process;
use verbose::Verbose;
use word_bench::exit_code::ExitCode;
use word_bench::{Benchmark, CommandRunner, Output, Programs, ReportWriter, SystemInfo};

fn main() -> process::ExitCode {
    match run() {
        Ok(()) => ExitCode::Success.into(),
        Err(err) => ExitCode::report(&err).into(),
    }
}

fn run() -> Result<()> {
    let args = Args::try_parse()?;
    let config = args.bench_config();

    let defaults = Programs::beside_current_exe()?;
    let programs = Programs::new(
        args.sequential.clone().unwrap_or(defaults.sequential),
        args.parallel.clone().unwrap_or(defaults.parallel),
    );

    let benchmark = Benchmark::new(config, &programs);
    let system = SystemInfo::collect();

    let mut verbose = args.verbose.then(Verbose::default);
    if let Some(verbose) = verbose.as_mut() {
        verbose.write_plan(&system, &benchmark)?;
    }

    let report = benchmark.run_with(&mut CommandRunner, system, |record| {
        verbose
            .as_mut()
            .map_or(Ok(()), |verbose| verbose.write_record(record))
    })?;

    let path = args.output_path();
    ReportWriter::new(args.format).write_file(&report, &path)?;

    let mut stdout = Output::stdout();
    stdout.write_line(&format!(
        "Benchmark completed. Results saved to '{}'\n",
        path.display()
    ))?;
    stdout.flush()
}
