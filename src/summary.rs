//! The benchmark summary: one row per job found in the logs.

use csv;
use errors::*;
use std::fmt;
use std::io::{Read, Write};
use std::path::Path;

/// Column names of the summary file, in order.
pub const HEADERS: [&str; 11] = [
    "Log File",
    "Dataset",
    "MinSize",
    "Combiner",
    "Job Name",
    "Map Input",
    "Map Output",
    "Combine Output",
    "Shuffle Bytes",
    "CPU Time (ms)",
    "Total Time (ms)",
];

/// Whether the measured job ran with a combiner. Orders like its text,
/// `OFF` before `ON`.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Combiner {
    /// Combiner disabled (`_noCombine` logs).
    #[serde(rename = "OFF")]
    Off,

    /// Combiner enabled.
    #[serde(rename = "ON")]
    On,
}

impl Default for Combiner {
    fn default() -> Self {
        Combiner::On
    }
}

impl Combiner {
    /// The text used in the summary file.
    pub fn as_str(&self) -> &'static str {
        match *self {
            Combiner::On => "ON",
            Combiner::Off => "OFF",
        }
    }
}

impl fmt::Display for Combiner {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row of the summary.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    #[serde(rename = "Log File")]
    pub log_file: String,

    #[serde(rename = "Dataset")]
    pub dataset: String,

    #[serde(rename = "MinSize")]
    pub min_size: i64,

    #[serde(rename = "Combiner")]
    pub combiner: Combiner,

    #[serde(rename = "Job Name")]
    pub job_name: String,

    #[serde(rename = "Map Input")]
    pub map_input: u64,

    #[serde(rename = "Map Output")]
    pub map_output: u64,

    #[serde(rename = "Combine Output")]
    pub combine_output: u64,

    #[serde(rename = "Shuffle Bytes")]
    pub shuffle_bytes: u64,

    #[serde(rename = "CPU Time (ms)")]
    pub cpu_time_ms: u64,

    #[serde(rename = "Total Time (ms)")]
    pub total_time_ms: u64,
}

/// All rows of a summary file.
#[derive(Debug, Default, Clone)]
pub struct Summary {
    records: Vec<JobRecord>,
}

impl Summary {
    /// Creates a summary holding `records` as is.
    pub fn from_records(records: Vec<JobRecord>) -> Summary {
        Summary { records: records }
    }

    /// Reads a `;` delimited summary with a header row.
    pub fn from_reader<R: Read>(rdr: R) -> Result<Summary> {
        let mut reader = csv::ReaderBuilder::new().delimiter(b';').from_reader(rdr);
        let mut records = Vec::new();
        for (i, record) in reader.deserialize().enumerate() {
            let record: JobRecord = record.chain_err(|| ErrorKind::MalformedSummary(i + 1))?;
            records.push(record);
        }
        Ok(Summary { records: records })
    }

    /// Opens an existing summary file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Summary> {
        let file = ::std::fs::File::open(path.as_ref())
            .chain_err(|| format!("no summary file {:?}", path.as_ref()))?;
        Summary::from_reader(file)
    }

    /// Opens a summary file, or starts an empty summary when there is none.
    pub fn open_or_empty<P: AsRef<Path>>(path: P) -> Result<Summary> {
        if path.as_ref().exists() {
            Summary::open(path)
        } else {
            debug!("no summary at {:?}, starting empty", path.as_ref());
            Ok(Summary::default())
        }
    }

    /// Drops every row that came from `log_file` and appends `records` in
    /// their place. Returns the number of dropped rows.
    pub fn replace_file(&mut self, log_file: &str, records: Vec<JobRecord>) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.log_file != log_file);
        let dropped = before - self.records.len();
        if dropped > 0 {
            debug!("replacing {} rows of {}", dropped, log_file);
        }
        self.records.extend(records);
        dropped
    }

    /// Orders rows by dataset, combiner, min size and job name.
    pub fn sort(&mut self) {
        self.records.sort_by(|a, b| {
            (&a.dataset, a.combiner, a.min_size, &a.job_name)
                .cmp(&(&b.dataset, b.combiner, b.min_size, &b.job_name))
        });
    }

    /// Writes the summary, `;` delimited, header first. An empty summary
    /// still gets its header.
    pub fn to_writer<W: Write>(&self, w: W) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b';')
            .has_headers(!self.records.is_empty())
            .from_writer(w);
        if self.records.is_empty() {
            writer.write_record(&HEADERS)?;
        }
        for record in &self.records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Writes the summary to `path`, replacing the file.
    pub fn to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = ::std::fs::File::create(path.as_ref())
            .chain_err(|| format!("failed to create {:?}", path.as_ref()))?;
        self.to_writer(file)
    }

    /// All rows.
    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when there is no row.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// A compact view of the summary for the terminal.
    pub fn overview(&self) -> Overview {
        Overview(self)
    }
}

/// Fixed-width table of the columns that matter when eyeballing a run:
/// log file, combiner, job name, shuffle bytes and CPU time.
pub struct Overview<'a>(&'a Summary);

impl<'a> fmt::Display for Overview<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let header = ["Log File", "Combiner", "Job Name", "Shuffle Bytes", "CPU Time (ms)"];
        let rows = self.0
            .records
            .iter()
            .map(|r| {
                [
                    r.log_file.clone(),
                    r.combiner.to_string(),
                    r.job_name.clone(),
                    r.shuffle_bytes.to_string(),
                    r.cpu_time_ms.to_string(),
                ]
            })
            .collect::<Vec<_>>();

        let mut widths = header.iter().map(|h| h.len()).collect::<Vec<_>>();
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row.iter()) {
                *w = ::std::cmp::max(*w, cell.chars().count());
            }
        }

        for (i, h) in header.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:>width$}", h, width = widths[i])?;
        }
        f.write_str("\n")?;
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:>width$}", cell, width = widths[i])?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
