//! Serializing benchmark reports.
//!
//! The CSV layout is two blocks separated by a blank line:
//!
//! ```text
//! SYSTEM INFORMATION
//! Processor,<brand>
//! ...
//!
//! BENCHMARK RESULTS
//! Label,Execution,Time (s),Status
//! <label>,run_1,<seconds>,<state>
//! ...
//! <label>,mean_filtered,<seconds|undefined>,computed
//! ```
//!
//! Runs appear in matrix order, each run's samples in run order followed
//! directly by its summary row.

use clap::ValueEnum;
use core::fmt::{self, Display, Formatter};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::WordBenchError;
use crate::bench::{BenchmarkReport, RunRecord};
use crate::system::SystemInfo;

/// Written in place of a mean when no sample was valid.
pub const UNDEFINED_MEAN: &str = "undefined";

/// Report output format.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum Format {
    /// System block and result rows as CSV.
    #[default]
    Csv,

    /// The whole report as one JSON document.
    Json,
}

impl Format {
    /// Report file name used when no output path is given.
    pub const fn default_path(self) -> &'static str {
        match self {
            Self::Csv => "benchmark_results.csv",
            Self::Json => "benchmark_results.json",
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Writes a [`BenchmarkReport`] in a chosen format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReportWriter {
    format: Format,
}

impl ReportWriter {
    /// Creates a writer for `format`.
    pub const fn new(format: Format) -> Self {
        Self { format }
    }

    /// Gets the format.
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Writes `report` to a newly created file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn write_file(
        &self,
        report: &BenchmarkReport,
        path: &Path,
    ) -> Result<(), WordBenchError> {
        let io_error = |message: &str, source| WordBenchError::Io {
            path: path.display().to_string(),
            message: message.to_string(),
            source,
        };

        let file = File::create(path)
            .map_err(|source| io_error("failed to create report file", source))?;
        let mut writer = BufWriter::new(file);
        self.write(&report.system, &report.runs, &mut writer)?;
        writer
            .flush()
            .map_err(|source| io_error("failed to write report file", source))
    }

    /// Writes the system information and run records to `destination`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write<W: Write>(
        &self,
        system: &SystemInfo,
        runs: &[RunRecord],
        destination: W,
    ) -> Result<(), WordBenchError> {
        match self.format {
            Format::Csv => write_csv(system, runs, destination),
            Format::Json => write_json(system, runs, destination),
        }
    }

    /// Renders the report to a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render(
        &self,
        system: &SystemInfo,
        runs: &[RunRecord],
    ) -> Result<String, WordBenchError> {
        let mut buffer = Vec::new();
        self.write(system, runs, &mut buffer)?;

        String::from_utf8(buffer).map_err(|e| WordBenchError::Utf8 {
            byte: e.utf8_error().valid_up_to(),
            message: "report is not valid UTF-8".to_string(),
        })
    }
}

/// Formats a mean, or the undefined marker.
pub fn format_mean(mean: Option<f64>) -> String {
    mean.map_or_else(|| UNDEFINED_MEAN.to_string(), |mean| mean.to_string())
}

fn csv_writer<W: Write>(destination: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(destination)
}

fn write_csv<W: Write>(
    system: &SystemInfo,
    runs: &[RunRecord],
    destination: W,
) -> Result<(), WordBenchError> {
    let mut wtr = csv_writer(destination);

    wtr.write_record(["SYSTEM INFORMATION"])?;
    for (key, value) in system.field_pairs() {
        wtr.write_record([key, value.as_str()])?;
    }

    // A zero-field record would be written as `""`, so the separator goes
    // straight to the underlying writer.
    let mut inner = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    inner.write_all(b"\n").map_err(csv::Error::from)?;
    let mut wtr = csv_writer(inner);

    wtr.write_record(["BENCHMARK RESULTS"])?;
    wtr.write_record(["Label", "Execution", "Time (s)", "Status"])?;
    for run in runs {
        for (index, (time, state)) in run.samples().enumerate() {
            wtr.write_record([
                run.label(),
                format!("run_{}", index + 1).as_str(),
                time.to_string().as_str(),
                state.to_string().as_str(),
            ])?;
        }
        wtr.write_record([
            run.label(),
            "mean_filtered",
            format_mean(run.mean()).as_str(),
            "computed",
        ])?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    system: &'a SystemInfo,
    runs: &'a [RunRecord],
}

fn write_json<W: Write>(
    system: &SystemInfo,
    runs: &[RunRecord],
    mut destination: W,
) -> Result<(), WordBenchError> {
    serde_json::to_writer_pretty(&mut destination, &JsonReport { system, runs })?;
    destination
        .write_all(b"\n")
        .map_err(serde_json::Error::io)?;
    Ok(())
}
