//! Extracts per-job counters from Hadoop job logs.
//!
//! A log holds one block per job, each opened by a marker line:
//!
//! ```ignore
//! >>> Starting Job: Data Cleaning
//! ...
//!         Map input records=1000000
//!         Map output records=998811
//!         Reduce shuffle bytes=80123456
//!         CPU time spent (ms)=51230
//! ```

use errors::*;
use filename::parse_log_filename;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use summary::JobRecord;

/// Opens a job block.
pub const JOB_MARKER: &str = ">>> Starting Job:";

/// The counters copied into the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    MapInput,
    MapOutput,
    CombineOutput,
    ShuffleBytes,
    CpuTime,
    TotalTime,
}

impl Metric {
    /// All metrics, in summary column order.
    pub fn all() -> [Metric; 6] {
        [
            Metric::MapInput,
            Metric::MapOutput,
            Metric::CombineOutput,
            Metric::ShuffleBytes,
            Metric::CpuTime,
            Metric::TotalTime,
        ]
    }

    /// Regex with a single capture group around the value.
    pub fn pattern(&self) -> &'static str {
        match *self {
            Metric::MapInput => r"Map input records=(\d+)",
            Metric::MapOutput => r"Map output records=(\d+)",
            Metric::CombineOutput => r"Combine output records=(\d+)",
            Metric::ShuffleBytes => r"Reduce shuffle bytes=(\d+)",
            Metric::CpuTime => r"CPU time spent \(ms\)=(\d+)",
            Metric::TotalTime => r"Total time spent by all maps in occupied slots \(ms\)=(\d+)",
        }
    }
}

/// Compiled metric patterns, built once per run.
pub struct Extractor {
    patterns: Vec<(Metric, Regex)>,
}

impl Extractor {
    /// Compiles every metric pattern.
    pub fn new() -> Result<Extractor> {
        let mut patterns = Vec::new();
        for metric in Metric::all().iter() {
            patterns.push((*metric, Regex::new(metric.pattern())?));
        }
        Ok(Extractor { patterns: patterns })
    }

    /// Value of `metric` in `text`, `0` when absent.
    pub fn metric(&self, text: &str, metric: Metric) -> u64 {
        self.patterns
            .iter()
            .find(|p| p.0 == metric)
            .map(|p| extract_metric(text, &p.1))
            .unwrap_or(0)
    }

    /// Builds one summary row per job block of a log file.
    pub fn parse_log(&self, file_name: &str, content: &str) -> Vec<JobRecord> {
        let meta = parse_log_filename(file_name);
        split_jobs(content)
            .into_iter()
            .map(|job| {
                trace!("{}: job '{}'", file_name, job.name);
                JobRecord {
                    log_file: file_name.to_string(),
                    dataset: meta.dataset.clone(),
                    min_size: meta.min_size,
                    combiner: meta.combiner,
                    job_name: job.name.to_string(),
                    map_input: self.metric(job.body, Metric::MapInput),
                    map_output: self.metric(job.body, Metric::MapOutput),
                    combine_output: self.metric(job.body, Metric::CombineOutput),
                    shuffle_bytes: self.metric(job.body, Metric::ShuffleBytes),
                    cpu_time_ms: self.metric(job.body, Metric::CpuTime),
                    total_time_ms: self.metric(job.body, Metric::TotalTime),
                }
            })
            .collect()
    }

    /// Reads and parses a log file. The summary keys rows by the file's base
    /// name.
    pub fn parse_log_file<P: AsRef<Path>>(&self, path: P) -> Result<(String, Vec<JobRecord>)> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).chain_err(|| format!("failed to read {:?}", path))?;
        let file_name = path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let records = self.parse_log(&file_name, &content);
        debug!("{}: {} jobs", file_name, records.len());
        Ok((file_name, records))
    }
}

/// A job block: the name from the marker line and everything up to the next
/// marker.
#[derive(Debug, PartialEq, Eq)]
pub struct JobBlock<'a> {
    pub name: &'a str,
    pub body: &'a str,
}

/// Splits a log into job blocks; text before the first marker is dropped.
/// The job name is the first non-blank line after the marker.
pub fn split_jobs(content: &str) -> Vec<JobBlock> {
    content
        .split(JOB_MARKER)
        .skip(1)
        .map(|body| {
            let name = body.trim_start().lines().next().unwrap_or("").trim();
            JobBlock {
                name: if name.is_empty() { "Unknown" } else { name },
                body: body,
            }
        })
        .collect()
}

/// First capture of `pattern` in `text` as an integer, or `0`.
pub fn extract_metric(text: &str, pattern: &Regex) -> u64 {
    let caps = match pattern.captures(text) {
        Some(c) => c,
        None => return 0,
    };
    let value = caps.get(1).map(|m| m.as_str()).unwrap_or("");
    match value.parse() {
        Ok(v) => v,
        Err(_) => {
            warn!("'{}' does not fit a counter, using 0", value);
            0
        }
    }
}

/// Lists the logs to process: every `*.log` directly inside a directory
/// (sorted by name), or the path itself when it is a file.
pub fn find_logs<P: AsRef<Path>>(path: P) -> Result<Vec<PathBuf>> {
    let path = path.as_ref();
    if !path.is_dir() {
        return Ok(if path.exists() { vec![path.to_path_buf()] } else { Vec::new() });
    }

    let mut logs = Vec::new();
    for entry in fs::read_dir(path).chain_err(|| format!("failed to list {:?}", path))? {
        let entry = entry?;
        let p = entry.path();
        if p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("log") {
            logs.push(p);
        }
    }
    logs.sort();
    Ok(logs)
}
