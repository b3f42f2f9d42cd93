//! Checks the archetype matchmaking model: observed edge counts against the
//! predicted ones, with the correlation coefficient and a regression line.
//!
//! Example rows of the input (stats job output):
//! ```ignore
//! 0102;0203;42;7;120;300;35.50
//! 0102;0304;10;1;120;80;9.60
//! ```

extern crate jobstat;
#[macro_use]
extern crate log;
#[macro_use]
extern crate structopt;

use jobstat::errors::*;
use jobstat::plot::{self, Labels};
use jobstat::{linear_fit, pearson, EdgeStat, Setting};
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "correlation")]
#[structopt(about = "Plot observed counts against predictions.")]
struct Opt {
    /// Headerless `;` delimited stats output.
    #[structopt(help = "Input CSV")]
    input: String,

    /// Where to write the chart.
    #[structopt(help = "Output image")]
    output: String,

    /// Setting file (TOML).
    #[structopt(short = "s", long = "setting")]
    #[structopt(help = "Path to the setting")]
    setting: Option<String>,
}

fn run(opt: Opt) -> Result<()> {
    let setting = Setting::init(opt.setting.as_ref().map(|s| s.as_str()))?;
    let stats = EdgeStat::from_path(&opt.input)?;
    info!("{} rows in {}", stats.len(), opt.input);

    let predictions = stats.iter().map(|s| s.prediction).collect::<Vec<_>>();
    let counts = stats.iter().map(|s| s.count as f64).collect::<Vec<_>>();

    let correlation = pearson(&counts, &predictions);
    match correlation {
        Some(r) => println!("Correlation Coefficient: {}", r),
        None => println!("Correlation Coefficient: NaN"),
    }

    if stats.is_empty() {
        warn!("{} has no row, no chart written", opt.input);
        return Ok(());
    }

    let fit = linear_fit(&predictions, &counts);
    if fit.is_none() {
        warn!("predictions are constant, no regression line");
    }

    let title = match correlation {
        Some(r) => format!("Verification of Matchmaking (Correlation: {:.4})", r),
        None => "Verification of Matchmaking (Correlation: NaN)".to_string(),
    };
    let labels = Labels {
        title: &title,
        x_desc: "Theory (Prediction)",
        y_desc: "Observed reality (Count)",
    };
    let points = predictions
        .iter()
        .cloned()
        .zip(counts.iter().cloned())
        .collect::<Vec<_>>();
    let size = (setting.plot.width, setting.plot.height);
    plot::scatter_chart(&opt.output, size, &points, fit, labels)?;

    println!("Graph saved as '{}'", opt.output);
    Ok(())
}

fn main() {
    jobstat::logging::init();
    let opt = Opt::from_args();
    debug!("{:?}", opt);

    if let Err(ref e) = run(opt) {
        report(e);
        ::std::process::exit(1);
    }
}
