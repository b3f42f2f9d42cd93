//! Pivots behind each comparison chart.

use pivot::{DatasetKey, Pivot};
use select::{job_matches, shuffle_lines, Variant};
use summary::{Combiner, JobRecord};

/// Mean `Total Time (ms)` by `Map Input` (rows) and generator variant
/// (columns). Keeps rows of the `job` keyword (case-sensitive) with the given
/// `MinSize` and an active combiner whose log file names a variant.
pub fn archetype_time(records: &[JobRecord], job: &str, min_size: i64) -> Pivot<u64> {
    Pivot::from_triples(
        records
            .iter()
            .filter(|r| job_matches(r, job, true))
            .filter(|r| r.min_size == min_size && r.combiner == Combiner::On)
            .filter_map(|r| {
                Variant::from_log_file(&r.log_file)
                    .map(|v| (r.map_input, v.to_string(), r.total_time_ms as f64))
            }),
    )
}

/// Mean `Total Time (ms)` by dataset size (rows, numeric order) and combiner
/// (columns) for rows of the `job` keyword (case-insensitive) with the given
/// `MinSize`. Rows whose dataset label is not a size are skipped.
pub fn combiner_time(records: &[JobRecord], job: &str, min_size: i64) -> Pivot<DatasetKey> {
    Pivot::from_triples(
        records
            .iter()
            .filter(|r| job_matches(r, job, false) && r.min_size == min_size)
            .filter_map(|r| match DatasetKey::new(&r.dataset) {
                Some(k) => Some((k, r.combiner.to_string(), r.total_time_ms as f64)),
                None => {
                    warn!("dataset '{}' of {} is not a size, skipped", r.dataset, r.log_file);
                    None
                }
            }),
    )
}

/// Mean shuffle lines by `Map Input` (rows) and combiner (columns) for rows of
/// the `job` keyword (case-insensitive) with the given `MinSize`.
pub fn combiner_network(records: &[JobRecord], job: &str, min_size: i64) -> Pivot<u64> {
    Pivot::from_triples(
        records
            .iter()
            .filter(|r| job_matches(r, job, false) && r.min_size == min_size)
            .map(|r| (r.map_input, r.combiner.to_string(), shuffle_lines(r) as f64)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pivot::IndexKey;
    use summary::tests::record;

    fn run(log_file: &str, dataset: &str, combiner: Combiner, job: &str, input: u64, time: u64) -> JobRecord {
        let mut r = record(log_file, dataset, combiner, job);
        r.map_input = input;
        r.total_time_ms = time;
        r
    }

    #[test]
    fn archetype_time_keeps_variants() {
        let mut records = vec![
            run("bench_mask100k_6.log", "mask100k", Combiner::On, "Nodes & Edges [Combiner=ON, MinSize=6]", 100, 10),
            run("bench_recurcif100k_6.log", "recurcif100k", Combiner::On, "Nodes & Edges [Combiner=ON, MinSize=6]", 100, 30),
            run("bench_mask1M_6.log", "mask1M", Combiner::On, "Nodes & Edges [Combiner=ON, MinSize=6]", 1000, 50),
            // no variant in the name
            run("bench_1M_6.log", "1M", Combiner::On, "Nodes & Edges [Combiner=ON, MinSize=6]", 1000, 99),
            // combiner off
            run("bench_mask1M_6_noCombine.log", "mask1M", Combiner::Off, "Nodes & Edges [Combiner=OFF, MinSize=6]", 1000, 99),
            // wrong job
            run("bench_mask1M_6.log", "mask1M", Combiner::On, "Data Cleaning", 1000, 99),
            // wrong case
            run("bench_mask1M_6.log", "mask1M", Combiner::On, "nodes & edges", 1000, 99),
        ];
        for r in records.iter_mut() {
            r.min_size = 6;
        }
        let mut other_size = run("bench_mask1M_8.log", "mask1M", Combiner::On, "Nodes & Edges", 1000, 99);
        other_size.min_size = 8;
        records.push(other_size);

        let pivot = archetype_time(&records, "Nodes & Edges", 6);
        assert_eq!(pivot.columns(), vec!["Mask", "Recurcif"]);
        assert_eq!(pivot.index(), vec![&100u64, &1000u64]);
        assert_eq!(pivot.get(&100, "Mask"), Some(10.0));
        assert_eq!(pivot.get(&100, "Recurcif"), Some(30.0));
        assert_eq!(pivot.get(&1000, "Mask"), Some(50.0));
        assert_eq!(pivot.get(&1000, "Recurcif"), None);
    }

    #[test]
    fn archetype_time_empty_selection() {
        let records = vec![run("bench_1M_6.log", "1M", Combiner::On, "Nodes & Edges", 1, 1)];
        assert!(archetype_time(&records, "Nodes & Edges", 6).is_empty());
    }

    #[test]
    fn combiner_time_sorts_datasets_by_size() {
        let records = vec![
            run("bench_1M_8.log", "1M", Combiner::On, "Data Cleaning", 0, 40),
            run("bench_1M_8_noCombine.log", "1M", Combiner::Off, "Data Cleaning", 0, 60),
            run("bench_100k_8.log", "100k", Combiner::On, "Data Cleaning", 0, 4),
            run("bench_200k_8.log", "200k", Combiner::On, "data cleaning", 0, 8),
            run("bench_Unknown_8.log", "Unknown", Combiner::On, "Data Cleaning", 0, 1),
            run("bench_100k_8.log", "100k", Combiner::On, "Stats", 0, 1),
        ];
        let pivot = combiner_time(&records, "Data Cleaning", 8);
        let labels = pivot.index().iter().map(|k| k.label()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["100k", "200k", "1M"]);
        assert_eq!(pivot.columns(), vec!["OFF", "ON"]);

        let one_m = DatasetKey::new("1M").unwrap();
        assert_eq!(pivot.get(&one_m, "ON"), Some(40.0));
        assert_eq!(pivot.get(&one_m, "OFF"), Some(60.0));
    }

    #[test]
    fn combiner_network_uses_shuffle_lines_and_mean() {
        let mut on = run("bench_1M_8.log", "1M", Combiner::On, "Nodes & Edges [Combiner=ON, MinSize=8]", 1000, 0);
        on.map_output = 9000;
        on.combine_output = 300;
        let mut on_again = on.clone();
        on_again.combine_output = 500;
        let mut off = run("bench_1M_8_noCombine.log", "1M", Combiner::Off, "Nodes & Edges [Combiner=OFF, MinSize=8]", 1000, 0);
        off.map_output = 9000;

        let pivot = combiner_network(&[on, on_again, off], "nodes & edges", 8);
        assert_eq!(pivot.get(&1000, "ON"), Some(400.0));
        assert_eq!(pivot.get(&1000, "OFF"), Some(9000.0));
    }
}
