//! Row selection rules shared by the charts.

use itertools::Itertools;
use std::fmt;
use summary::{Combiner, JobRecord};

/// Plain substring match on the job name.
pub fn job_matches(record: &JobRecord, keyword: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        record.job_name.contains(keyword)
    } else {
        record.job_name.to_lowercase().contains(&keyword.to_lowercase())
    }
}

/// Records sent over the network between map and reduce. With an active
/// combiner that is what the combiner emitted, otherwise the raw map output.
pub fn shuffle_lines(record: &JobRecord) -> u64 {
    if record.combiner == Combiner::On && record.combine_output > 0 {
        record.combine_output
    } else {
        record.map_output
    }
}

/// The two archetype generator implementations being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    Mask,
    Recurcif,
}

impl Variant {
    /// Classifies a run by its log file name; `None` for other runs.
    pub fn from_log_file(name: &str) -> Option<Variant> {
        let name = name.to_lowercase();
        if name.contains("mask") {
            Some(Variant::Mask)
        } else if name.contains("recurcif") {
            Some(Variant::Recurcif)
        } else {
            None
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Variant::Mask => f.write_str("Mask"),
            Variant::Recurcif => f.write_str("Recurcif"),
        }
    }
}

/// Numeric value of a dataset label: `100k`, `1M`, `2.5m` or plain digits.
pub fn dataset_size(label: &str) -> Option<u64> {
    let label = label.trim().to_lowercase();
    let (number, scale) = if label.contains('m') {
        (label.replace('m', ""), 1_000_000.0)
    } else if label.contains('k') {
        (label.replace('k', ""), 1_000.0)
    } else {
        return label.parse().ok();
    };
    match number.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some((v * scale) as u64),
        _ => None,
    }
}

/// File name friendly form of a job keyword: `Nodes & Edges` becomes
/// `nodes_edges`.
pub fn slug(keyword: &str) -> String {
    keyword
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase())
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use summary::tests::record;

    #[test]
    fn shuffle_lines_uses_combiner_output_when_active() {
        let mut r = record("a.log", "1M", Combiner::On, "Stats");
        r.map_output = 400;
        r.combine_output = 50;
        assert_eq!(shuffle_lines(&r), 50);
    }

    #[test]
    fn shuffle_lines_falls_back_to_map_output() {
        // combiner on but idle
        let mut r = record("a.log", "1M", Combiner::On, "Stats");
        r.map_output = 400;
        r.combine_output = 0;
        assert_eq!(shuffle_lines(&r), 400);

        // combiner off, stray combine counter ignored
        r.combiner = Combiner::Off;
        r.combine_output = 50;
        assert_eq!(shuffle_lines(&r), 400);
    }

    #[test]
    fn job_keyword_is_plain_text() {
        let r = record("a.log", "1M", Combiner::On, "Nodes & Edges [Combiner=ON, MinSize=8]");
        assert!(job_matches(&r, "Nodes & Edges", true));
        assert!(!job_matches(&r, "nodes & edges", true));
        assert!(job_matches(&r, "nodes & edges", false));
        assert!(job_matches(&r, "[Combiner=ON", false));
        assert!(!job_matches(&r, "Nodes.*", false));
    }

    #[test]
    fn variant_from_log_file() {
        assert_eq!(Variant::from_log_file("bench_MASK1M_6.log"), Some(Variant::Mask));
        assert_eq!(Variant::from_log_file("bench_recurcif1M_6.log"), Some(Variant::Recurcif));
        assert_eq!(Variant::from_log_file("bench_1M_6.log"), None);
    }

    #[test]
    fn dataset_sizes() {
        assert_eq!(dataset_size("100k"), Some(100_000));
        assert_eq!(dataset_size("1M"), Some(1_000_000));
        assert_eq!(dataset_size("2.5m"), Some(2_500_000));
        assert_eq!(dataset_size("500"), Some(500));
        assert_eq!(dataset_size("Unknown"), None);
        assert_eq!(dataset_size("mask1M"), None);
    }

    #[test]
    fn slugs() {
        assert_eq!(slug("Nodes & Edges"), "nodes_edges");
        assert_eq!(slug("Data Cleaning"), "data_cleaning");
        assert_eq!(slug("Stats"), "stats");
    }
}
