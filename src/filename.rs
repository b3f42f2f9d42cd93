//! Run metadata encoded in benchmark log filenames:
//! `bench_<Dataset>_<MinSize>[_noCombine].log`.

use summary::Combiner;

/// Metadata recovered from a log filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMeta {
    /// Dataset label, e.g. `100k` or `1M`.
    pub dataset: String,

    /// Minimum archetype size the job ran with.
    pub min_size: i64,

    /// `OFF` only when the name carries the `noCombine` flag.
    pub combiner: Combiner,
}

impl Default for LogMeta {
    fn default() -> Self {
        LogMeta {
            dataset: "Unknown".to_string(),
            min_size: 0,
            combiner: Combiner::On,
        }
    }
}

/// Parses a log file's base name. Names with fewer than three `_` separated
/// parts are reported and get the default metadata; an unparsable size
/// becomes `0`.
pub fn parse_log_filename(name: &str) -> LogMeta {
    let clean = name.replace(".log", "");
    let parts = clean.split('_').collect::<Vec<_>>();

    let mut meta = LogMeta::default();
    if parts.len() < 3 {
        warn!(
            "log file '{}' does not follow 'bench_DATASET_MINSIZE[_noCombine].log'",
            name
        );
        return meta;
    }

    meta.dataset = parts[1].to_string();
    meta.min_size = parts[2].trim().parse().unwrap_or(0);
    if parts.len() >= 4 && parts[3].to_lowercase().contains("nocombine") {
        meta.combiner = Combiner::Off;
    }
    meta
}
