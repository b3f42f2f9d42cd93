//! Pivot tables: rows keyed by an ordered index, one column per series, cells
//! holding the mean of every value that landed in them.

use average::{Estimate, Mean};
use select::dataset_size;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// How an index is laid out on the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Placed at its numeric value.
    Numeric,

    /// Placed at evenly spaced positions, in index order.
    Categorical,
}

/// A pivot index.
pub trait IndexKey: Ord + Clone {
    /// Axis layout of this kind of index.
    fn axis() -> Axis;

    /// Numeric value (used for numeric axes).
    fn value(&self) -> f64;

    /// Text shown for this row.
    fn label(&self) -> String;
}

impl IndexKey for u64 {
    fn axis() -> Axis {
        Axis::Numeric
    }

    fn value(&self) -> f64 {
        *self as f64
    }

    fn label(&self) -> String {
        self.to_string()
    }
}

/// Dataset label ordered by the size it stands for, so `100k` sorts before
/// `1M`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetKey {
    size: u64,
    label: String,
}

impl DatasetKey {
    /// Returns `None` when the label is not a size.
    pub fn new(label: &str) -> Option<DatasetKey> {
        dataset_size(label).map(|size| {
            DatasetKey {
                size: size,
                label: label.to_string(),
            }
        })
    }

    /// The size the label stands for.
    pub fn size(&self) -> u64 {
        self.size
    }
}

impl Ord for DatasetKey {
    fn cmp(&self, other: &DatasetKey) -> Ordering {
        self.size.cmp(&other.size).then_with(|| self.label.cmp(&other.label))
    }
}

impl PartialOrd for DatasetKey {
    fn partial_cmp(&self, other: &DatasetKey) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for DatasetKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl IndexKey for DatasetKey {
    fn axis() -> Axis {
        Axis::Categorical
    }

    fn value(&self) -> f64 {
        self.size as f64
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}

/// A pivot table with mean aggregation.
#[derive(Debug, Clone)]
pub struct Pivot<K: Ord> {
    columns: BTreeSet<String>,
    rows: BTreeMap<K, BTreeMap<String, Mean>>,
}

impl<K: Ord> Default for Pivot<K> {
    fn default() -> Pivot<K> {
        Pivot {
            columns: BTreeSet::new(),
            rows: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Clone> Pivot<K> {
    /// Builds a pivot from `(index, column, value)` triples.
    pub fn from_triples<I, S>(triples: I) -> Pivot<K>
    where
        I: IntoIterator<Item = (K, S, f64)>,
        S: Into<String>,
    {
        let mut pivot = Pivot::default();
        for (k, c, v) in triples {
            pivot.add(k, c, v);
        }
        pivot
    }

    /// Adds a value to the cell at (`index`, `column`).
    pub fn add<S: Into<String>>(&mut self, index: K, column: S, value: f64) {
        let column = column.into();
        self.columns.insert(column.clone());
        self.rows
            .entry(index)
            .or_insert_with(BTreeMap::new)
            .entry(column)
            .or_insert_with(Mean::new)
            .add(value);
    }

    /// Column labels, sorted.
    pub fn columns(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.as_str()).collect()
    }

    /// Row indices, sorted.
    pub fn index(&self) -> Vec<&K> {
        self.rows.keys().collect()
    }

    /// Mean of the cell, `None` if nothing landed in it.
    pub fn get(&self, index: &K, column: &str) -> Option<f64> {
        self.rows
            .get(index)
            .and_then(|row| row.get(column))
            .filter(|m| !m.is_empty())
            .map(|m| m.mean())
    }

    /// Filled cells of one column as `(row position, index, mean)`, in index
    /// order.
    pub fn series(&self, column: &str) -> Vec<(usize, &K, f64)> {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(i, (k, row))| row.get(column).map(|m| (i, k, m.mean())))
            .collect()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no value was added.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Largest cell value, `None` for an empty pivot.
    pub fn max_value(&self) -> Option<f64> {
        self.rows
            .values()
            .flat_map(|row| row.values().map(|m| m.mean()))
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
    }
}

impl<K: IndexKey> fmt::Display for Pivot<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:>12}", "")?;
        for c in &self.columns {
            write!(f, " {:>12}", c)?;
        }
        writeln!(f)?;
        for (k, row) in &self.rows {
            write!(f, "{:>12}", k.label())?;
            for c in &self.columns {
                match row.get(c) {
                    Some(m) => write!(f, " {:>12.1}", m.mean())?,
                    None => write!(f, " {:>12}", "NaN")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_index_sorts_by_size() {
        let pivot = Pivot::from_triples(vec![
            (DatasetKey::new("1M").unwrap(), "ON", 10.0),
            (DatasetKey::new("100k").unwrap(), "ON", 1.0),
            (DatasetKey::new("500k").unwrap(), "OFF", 6.0),
            (DatasetKey::new("10M").unwrap(), "OFF", 90.0),
        ]);

        let labels = pivot.index().iter().map(|k| k.label()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["100k", "500k", "1M", "10M"]);
    }

    #[test]
    fn cells_hold_the_mean() {
        let pivot = Pivot::from_triples(vec![
            (100u64, "ON", 10.0),
            (100u64, "ON", 20.0),
            (100u64, "OFF", 7.0),
            (50u64, "OFF", 1.0),
        ]);
        assert_eq!(pivot.get(&100, "ON"), Some(15.0));
        assert_eq!(pivot.get(&100, "OFF"), Some(7.0));
        assert_eq!(pivot.get(&50, "ON"), None);
        assert_eq!(pivot.columns(), vec!["OFF", "ON"]);
        assert_eq!(pivot.index(), vec![&50u64, &100u64]);
        assert_eq!(pivot.max_value(), Some(15.0));
    }

    #[test]
    fn running_mean_over_many_values() {
        let mut pivot = Pivot::default();
        for v in &[1.0, 2.0, 4.0] {
            pivot.add(7u64, "ON", *v);
        }
        let mean = pivot.get(&7, "ON").unwrap();
        assert!((mean - 7.0 / 3.0).abs() < 1e-12);
        assert_eq!(pivot.get(&7, "OFF"), None);
        assert_eq!(pivot.get(&8, "ON"), None);
    }

    #[test]
    fn series_skips_empty_cells() {
        let pivot = Pivot::from_triples(vec![
            (1u64, "Mask", 3.0),
            (2u64, "Recurcif", 4.0),
            (3u64, "Mask", 5.0),
        ]);
        let mask = pivot.series("Mask");
        assert_eq!(mask, vec![(0, &1u64, 3.0), (2, &3u64, 5.0)]);
        assert!(pivot.series("Other").is_empty());
    }

    #[test]
    fn empty_pivot() {
        let pivot: Pivot<u64> = Pivot::default();
        assert!(pivot.is_empty());
        assert_eq!(pivot.max_value(), None);
    }

    #[test]
    fn display_marks_missing_cells() {
        let pivot = Pivot::from_triples(vec![(1u64, "A", 2.0), (2u64, "B", 3.0)]);
        let text = pivot.to_string();
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("NaN"));
    }
}
