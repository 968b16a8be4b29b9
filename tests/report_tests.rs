//! Tests for CSV and JSON report serialization.

use word_bench::report::{Format, ReportWriter, UNDEFINED_MEAN, format_mean};
use word_bench::{BenchmarkReport, RunRecord, SystemInfo};

fn system() -> SystemInfo {
    SystemInfo {
        processor: "AMD Ryzen 7 5700X 8-Core Processor".to_string(),
        physical_cores: Some(8),
        total_threads: 16,
        ram_gb: 31.27,
        operating_system: "Linux 6.1.0".to_string(),
    }
}

fn render_csv(runs: &[RunRecord]) -> String {
    ReportWriter::new(Format::Csv)
        .render(&system(), runs)
        .unwrap()
}

fn result_lines(csv: &str) -> Vec<&str> {
    let (_, results) = csv.split_once("\n\n").unwrap();
    results.lines().skip(2).collect()
}

#[test]
fn test_system_block() {
    let csv = render_csv(&[]);
    let (system_block, _) = csv.split_once("\n\n").unwrap();

    assert_eq!(
        system_block,
        "SYSTEM INFORMATION\n\
         Processor,AMD Ryzen 7 5700X 8-Core Processor\n\
         Physical Cores,8\n\
         Total Threads,16\n\
         RAM (GB),31.27\n\
         Operating System,Linux 6.1.0"
    );
}

#[test]
fn test_single_blank_line_between_blocks() {
    let run = RunRecord::new("word-count", vec![1.0], 0);
    let csv = render_csv(&[run]);

    assert!(csv.contains("Operating System,Linux 6.1.0\n\nBENCHMARK RESULTS\n"));
    assert!(!csv.contains("\n\n\n"));
    assert!(!csv.contains("\"\""));
    assert_eq!(csv.matches("\n\n").count(), 1);
}

#[test]
fn test_results_header() {
    let csv = render_csv(&[]);
    let (_, results) = csv.split_once("\n\n").unwrap();

    assert_eq!(
        results,
        "BENCHMARK RESULTS\nLabel,Execution,Time (s),Status\n"
    );
}

#[test]
fn test_five_samples_two_warmups_gives_six_rows() {
    let run = RunRecord::new("word-count", vec![3.0, 2.0, 1.0, 1.0, 1.0], 2);
    let csv = render_csv(&[run]);

    assert_eq!(
        result_lines(&csv),
        [
            "word-count,run_1,3,warmup",
            "word-count,run_2,2,warmup",
            "word-count,run_3,1,valid",
            "word-count,run_4,1,valid",
            "word-count,run_5,1,valid",
            "word-count,mean_filtered,1,computed",
        ]
    );
}

#[test]
fn test_summary_follows_each_run() {
    let first = RunRecord::new("word-count", vec![0.5, 0.25], 0);
    let second = RunRecord::new("word-count-par - 2 threads - Thread", vec![0.125], 0);
    let csv = render_csv(&[first, second]);

    assert_eq!(
        result_lines(&csv),
        [
            "word-count,run_1,0.5,valid",
            "word-count,run_2,0.25,valid",
            "word-count,mean_filtered,0.375,computed",
            "word-count-par - 2 threads - Thread,run_1,0.125,valid",
            "word-count-par - 2 threads - Thread,mean_filtered,0.125,computed",
        ]
    );
}

#[test]
fn test_undefined_mean() {
    let run = RunRecord::new("word-count", vec![1.0, 2.0], 2);
    let csv = render_csv(&[run]);
    let lines = result_lines(&csv);

    assert_eq!(lines[2], "word-count,mean_filtered,undefined,computed");
    assert_eq!(format_mean(None), UNDEFINED_MEAN);
    assert_eq!(format_mean(Some(0.75)), "0.75");
}

#[test]
fn test_outlier_state_written() {
    let mut times = vec![1.0; 9];
    times.push(100.0);
    let run = RunRecord::new("word-count", times, 0);
    let csv = render_csv(&[run]);

    assert!(csv.contains("word-count,run_10,100,outlier\n"));
    assert!(csv.contains("word-count,mean_filtered,1,computed\n"));
}

#[test]
fn test_unknown_physical_cores() {
    let info = SystemInfo {
        physical_cores: None,
        ..system()
    };
    let csv = ReportWriter::default().render(&info, &[]).unwrap();

    assert!(csv.contains("Physical Cores,unknown\n"));
}

#[test]
fn test_label_with_comma_is_quoted() {
    let run = RunRecord::new("a,b", vec![1.0], 0);
    let csv = render_csv(&[run]);

    assert!(csv.contains("\"a,b\",run_1,1,valid\n"));
}

#[test]
fn test_json_report() {
    let run = RunRecord::new("word-count", vec![1.0, 2.0], 2);
    let json = ReportWriter::new(Format::Json)
        .render(&system(), &[run])
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["system"]["totalThreads"], 16);
    assert_eq!(value["runs"][0]["label"], "word-count");
    assert_eq!(value["runs"][0]["states"][1], "warmup");
    assert!(value["runs"][0]["mean"].is_null());
    assert_eq!(value["runs"][0]["quartiles"]["median"], 1.5);
}

#[test]
fn test_write_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.csv");
    let report = BenchmarkReport {
        system: system(),
        runs: vec![RunRecord::new("word-count", vec![0.5], 0)],
    };

    ReportWriter::new(Format::Csv)
        .write_file(&report, &path)
        .unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("SYSTEM INFORMATION\n"));
    assert!(contents.ends_with("word-count,mean_filtered,0.5,computed\n"));
}

#[test]
fn test_format_default_paths() {
    assert_eq!(Format::default(), Format::Csv);
    assert_eq!(Format::Csv.default_path(), "benchmark_results.csv");
    assert_eq!(Format::Json.default_path(), "benchmark_results.json");
}
