//! Verbose progress reporting for benchmark runs.

use anyhow::Result;
use word_bench::report::format_mean;
use word_bench::{Benchmark, Output, RunRecord, SampleState, SystemInfo};

/// Writes benchmark progress as `key value` lines.
#[derive(Debug)]
pub(crate) struct Verbose {
    output: Output,
}

impl Default for Verbose {
    /// Default verbose logger writes to stderr.
    fn default() -> Self {
        Self {
            output: Output::stderr(),
        }
    }
}

impl Verbose {
    /// Writes the host and the planned matrix before any run starts.
    pub(crate) fn write_plan(
        &mut self,
        system: &SystemInfo,
        benchmark: &Benchmark,
    ) -> Result<()> {
        for (key, value) in system.field_pairs() {
            let key = key.to_lowercase().replace(['(', ')'], "").replace(' ', "-");
            self.output.write_line(&format!("{key} {value}\n"))?;
        }

        let config = benchmark.config();
        self.output
            .write_line(&format!("repeats {}\n", config.repeats))?;
        self.output
            .write_line(&format!("warmups {}\n", config.warmups))?;
        self.output.write_line(&format!(
            "configurations {}\n\n",
            benchmark.configurations().len()
        ))?;

        self.output.flush()
    }

    /// Writes the outcome of one completed configuration.
    pub(crate) fn write_record(&mut self, record: &RunRecord) -> Result<()> {
        self.output.write_line(&format!(
            "{} valid={} outlier={} warmup={} mean={}\n",
            record.label(),
            record.count(SampleState::Valid),
            record.count(SampleState::Outlier),
            record.count(SampleState::Warmup),
            format_mean(record.mean()),
        ))?;

        self.output.flush()
    }
}
