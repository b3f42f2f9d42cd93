//! Renders comparison charts as PNG files.

use correlation::LinearFit;
use errors::*;
use pivot::{Axis, IndexKey, Pivot};
use plotters::prelude::*;
use std::path::Path;

/// Title and axis descriptions of a chart.
#[derive(Debug, Clone, Copy)]
pub struct Labels<'a> {
    pub title: &'a str,
    pub x_desc: &'a str,
    pub y_desc: &'a str,
}

fn plot_err<E: ::std::fmt::Display>(e: E) -> Error {
    ErrorKind::Plot(e.to_string()).into()
}

/// Range covering `lo..hi` with a 5% margin on both sides.
pub fn padded(lo: f64, hi: f64) -> (f64, f64) {
    let span = hi - lo;
    if !(span > 1e-12) {
        let pad = if lo.abs() > 1.0 { lo.abs() * 0.05 } else { 1.0 };
        return (lo - pad, hi + pad);
    }
    (lo - span * 0.05, hi + span * 0.05)
}

/// X coordinate of the row at `position` with index `key`.
fn x_of<K: IndexKey>(position: usize, key: &K) -> f64 {
    match K::axis() {
        Axis::Numeric => key.value(),
        Axis::Categorical => position as f64,
    }
}

/// Draws one line (with point markers) per pivot column. `legend` turns a
/// column label into its legend entry.
pub fn line_chart<K, P, F>(
    path: P,
    size: (u32, u32),
    pivot: &Pivot<K>,
    labels: Labels,
    legend: F,
) -> Result<()>
where
    K: IndexKey,
    P: AsRef<Path>,
    F: Fn(&str) -> String,
{
    if pivot.is_empty() {
        bail!(ErrorKind::Plot("nothing to draw".to_string()));
    }

    let index = pivot.index();
    let (x_min, x_max) = match K::axis() {
        Axis::Numeric => padded(index[0].value(), index[index.len() - 1].value()),
        Axis::Categorical => (-0.5, index.len() as f64 - 0.5),
    };
    let columns = pivot.columns();
    let values = columns
        .iter()
        .flat_map(|c| pivot.series(c).into_iter().map(|s| s.2))
        .collect::<Vec<f64>>();
    let lo = values.iter().cloned().fold(::std::f64::INFINITY, f64::min);
    let hi = values.iter().cloned().fold(::std::f64::NEG_INFINITY, f64::max);
    let (y_min, y_max) = padded(lo, hi);

    let root = BitMapBackend::new(path.as_ref(), size).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(labels.title, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(plot_err)?;

    let names = index.iter().map(|k| k.label()).collect::<Vec<_>>();
    let axis = K::axis();
    let x_format = |x: &f64| match axis {
        Axis::Numeric => format!("{}", x),
        Axis::Categorical => {
            let i = x.round();
            if (x - i).abs() < 1e-6 && i >= 0.0 && (i as usize) < names.len() {
                names[i as usize].clone()
            } else {
                String::new()
            }
        }
    };
    let x_ticks = match axis {
        Axis::Numeric => 10,
        Axis::Categorical => names.len(),
    };

    chart
        .configure_mesh()
        .x_desc(labels.x_desc)
        .y_desc(labels.y_desc)
        .x_labels(x_ticks)
        .x_label_formatter(&x_format)
        .draw()
        .map_err(plot_err)?;

    for (ci, column) in columns.iter().enumerate() {
        let color = Palette99::pick(ci).mix(1.0);
        let points = pivot
            .series(*column)
            .into_iter()
            .map(|(i, k, v)| (x_of(i, k), v))
            .collect::<Vec<_>>();
        debug!("series {}: {:?}", column, points);

        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
            .map_err(plot_err)?
            .label(legend(*column))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        chart
            .draw_series(points.iter().map(|&p| Circle::new(p, 4, color.filled())))
            .map_err(plot_err)?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(plot_err)?;
    root.present().map_err(plot_err)?;
    Ok(())
}

// splits a segment into dashes, every other piece drawn
fn dashes(from: (f64, f64), to: (f64, f64), pieces: usize) -> Vec<((f64, f64), (f64, f64))> {
    let at = |t: f64| (from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t);
    (0..pieces)
        .filter(|i| i % 2 == 0)
        .map(|i| {
            let a = i as f64 / pieces as f64;
            let b = (i + 1) as f64 / pieces as f64;
            (at(a), at(b))
        })
        .collect()
}

/// Scatter of `(x, y)` points with the `y = x` reference (red, dashed) and,
/// when given, the regression line (blue).
pub fn scatter_chart<P: AsRef<Path>>(
    path: P,
    size: (u32, u32),
    points: &[(f64, f64)],
    fit: Option<LinearFit>,
    labels: Labels,
) -> Result<()> {
    if points.is_empty() {
        bail!(ErrorKind::Plot("nothing to draw".to_string()));
    }

    let max_val = points
        .iter()
        .fold(0.0f64, |m, &(x, y)| m.max(x).max(y));
    let min_x = points.iter().fold(0.0f64, |m, p| m.min(p.0));
    let min_y = points.iter().fold(0.0f64, |m, p| m.min(p.1));
    let (x_min, x_max) = padded(min_x, max_val);
    let mut y_lo = min_y;
    let mut y_hi = max_val;
    if let Some(f) = fit {
        y_lo = y_lo.min(f.at(0.0)).min(f.at(max_val));
        y_hi = y_hi.max(f.at(0.0)).max(f.at(max_val));
    }
    let (y_min, y_max) = padded(y_lo, y_hi);

    let root = BitMapBackend::new(path.as_ref(), size).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(labels.title, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc(labels.x_desc)
        .y_desc(labels.y_desc)
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(points.iter().map(|&p| Circle::new(p, 2, BLUE.mix(0.5).filled())))
        .map_err(plot_err)?;

    chart
        .draw_series(
            dashes((0.0, 0.0), (max_val, max_val), 60)
                .into_iter()
                .map(|(a, b)| PathElement::new(vec![a, b], RED.stroke_width(1))),
        )
        .map_err(plot_err)?
        .label("y=x")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(1)));

    if let Some(f) = fit {
        let line = (0..100)
            .map(|i| {
                let x = max_val * i as f64 / 99.0;
                (x, f.at(x))
            })
            .collect::<Vec<_>>();
        chart
            .draw_series(LineSeries::new(line, BLUE.stroke_width(2)))
            .map_err(plot_err)?
            .label(format!("Regression (y={:.2}x + {:.2})", f.slope, f.intercept))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(plot_err)?;
    root.present().map_err(plot_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_widens_range() {
        let (lo, hi) = padded(0.0, 100.0);
        assert!(lo < 0.0 && hi > 100.0);
        assert!((hi - 105.0).abs() < 1e-9);
    }

    #[test]
    fn padding_a_single_value() {
        let (lo, hi) = padded(5.0, 5.0);
        assert!(lo < 5.0 && hi > 5.0);
        let (lo, hi) = padded(0.0, 0.0);
        assert_eq!((lo, hi), (-1.0, 1.0));
    }

    #[test]
    fn dashes_cover_every_other_piece() {
        let d = dashes((0.0, 0.0), (10.0, 10.0), 10);
        assert_eq!(d.len(), 5);
        assert_eq!(d[0], ((0.0, 0.0), (1.0, 1.0)));
        assert_eq!(d[1], ((2.0, 2.0), (3.0, 3.0)));
    }

    #[test]
    fn categorical_rows_are_evenly_spaced() {
        use pivot::DatasetKey;
        let k = DatasetKey::new("10M").unwrap();
        assert_eq!(x_of(2, &k), 2.0);
        assert_eq!(x_of(2, &500u64), 500.0);
    }
}
