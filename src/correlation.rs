//! Predicted vs observed edge counts between archetypes.

use average::{Covariance, Estimate, Variance};
use csv;
use errors::*;
use std::io::Read;
use std::path::Path;

/// One row of the stats job output:
/// `ArchSource;ArchTarget;Count;Win;CountSrc;CountTgt;Prediction`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct EdgeStat {
    pub arch_source: String,
    pub arch_target: String,
    pub count: u64,
    pub win: u64,
    pub count_src: u64,
    pub count_tgt: u64,
    pub prediction: f64,
}

impl EdgeStat {
    /// Reads headerless, `;` delimited rows.
    pub fn from_reader<R: Read>(rdr: R) -> Result<Vec<EdgeStat>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(b';')
            .from_reader(rdr);
        let mut stats = Vec::new();
        for (i, record) in reader.deserialize().enumerate() {
            let stat: EdgeStat = record.chain_err(|| ErrorKind::MalformedCorrelation(i + 1))?;
            stats.push(stat);
        }
        Ok(stats)
    }

    /// Reads a stats file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<EdgeStat>> {
        let file = ::std::fs::File::open(path.as_ref())
            .chain_err(|| format!("no input file {:?}", path.as_ref()))?;
        EdgeStat::from_reader(file)
    }
}

/// A least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Evaluates the line at `x`.
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

// running variance of each side and their covariance over the paired prefix
fn accumulate(xs: &[f64], ys: &[f64]) -> Option<(Variance, Variance, Covariance)> {
    if ::std::cmp::min(xs.len(), ys.len()) < 2 {
        return None;
    }
    let mut vx = Variance::new();
    let mut vy = Variance::new();
    let mut cov = Covariance::new();
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        vx.add(x);
        vy.add(y);
        cov.add(x, y);
    }
    Some((vx, vy, cov))
}

/// Pearson correlation coefficient. `None` with fewer than two points or when
/// either side is constant.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let (vx, vy, cov) = accumulate(xs, ys)?;
    let var_x = vx.population_variance();
    let var_y = vy.population_variance();
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov.population_covariance() / (var_x * var_y).sqrt())
}

/// Least-squares fit of `ys` against `xs`. `None` with fewer than two points
/// or when every `x` is the same.
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> Option<LinearFit> {
    let (vx, vy, cov) = accumulate(xs, ys)?;
    let var_x = vx.population_variance();
    if var_x == 0.0 {
        return None;
    }
    let slope = cov.population_covariance() / var_x;
    Some(LinearFit {
        slope: slope,
        intercept: vy.mean() - slope * vx.mean(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn read_stats_output() {
        let text = "0102;0203;42;7;120;300;35.50\n0102;0304;10;1;120;80;9.60\n";
        let stats = EdgeStat::from_reader(text.as_bytes()).unwrap();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].arch_source, "0102");
        assert_eq!(stats[0].count, 42);
        assert_eq!(stats[0].count_tgt, 300);
        assert!(close(stats[1].prediction, 9.6));
    }

    #[test]
    fn malformed_stats_row() {
        let text = "0102;0203;42;7;120;300;35.50\n0102;0304;many;1;120;80;9.60\n";
        let err = EdgeStat::from_reader(text.as_bytes()).unwrap_err();
        match *err.kind() {
            ErrorKind::MalformedCorrelation(row) => assert_eq!(row, 2),
            ref other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn perfect_correlation() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [3.0, 5.0, 7.0, 9.0];
        assert!(close(pearson(&xs, &ys).unwrap(), 1.0));

        let fit = linear_fit(&xs, &ys).unwrap();
        assert!(close(fit.slope, 2.0));
        assert!(close(fit.intercept, 1.0));
        assert!(close(fit.at(10.0), 21.0));
    }

    #[test]
    fn negative_correlation() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [3.0, 2.0, 1.0];
        assert!(close(pearson(&xs, &ys).unwrap(), -1.0));
    }

    #[test]
    fn known_coefficient() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [2.0, 4.0, 5.0, 4.0, 5.0];
        // sxy = 6, sxx = 10, syy = 6
        assert!(close(pearson(&xs, &ys).unwrap(), 6.0 / 60.0f64.sqrt()));
        let fit = linear_fit(&xs, &ys).unwrap();
        assert!(close(fit.slope, 0.6));
        assert!(close(fit.intercept, 2.2));
    }

    #[test]
    fn extra_points_on_one_side_are_ignored() {
        let xs = [1.0, 2.0, 3.0, 4.0, 100.0];
        let ys = [3.0, 5.0, 7.0, 9.0];
        let fit = linear_fit(&xs, &ys).unwrap();
        assert!(close(fit.slope, 2.0));
        assert!(close(fit.intercept, 1.0));
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(pearson(&[1.0], &[2.0]), None);
        assert_eq!(pearson(&[1.0, 1.0], &[2.0, 3.0]), None);
        assert_eq!(pearson(&[1.0, 2.0], &[3.0, 3.0]), None);
        assert_eq!(linear_fit(&[2.0, 2.0], &[1.0, 5.0]), None);
        assert!(linear_fit(&[1.0, 2.0], &[3.0, 3.0]).is_some());
    }
}
