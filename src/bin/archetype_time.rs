//! Execution time of the two archetype generators (Mask vs Recurcif) against
//! the job input size.

extern crate jobstat;
#[macro_use]
extern crate log;
#[macro_use]
extern crate structopt;

use jobstat::errors::*;
use jobstat::plot::{self, Labels};
use jobstat::{compare, slug, Setting, Summary};
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "archetype_time")]
#[structopt(about = "Chart execution time of Mask vs Recurcif archetype generation.")]
struct Opt {
    /// The summary written by `aggregate`.
    #[structopt(help = "Summary CSV, `benchmark_summary.csv` if empty")]
    summary: Option<String>,

    /// Where to write the chart.
    #[structopt(short = "o", long = "out")]
    #[structopt(help = "Output PNG")]
    output: Option<String>,

    /// Only runs with this minimum archetype size.
    #[structopt(short = "m", long = "min-size")]
    #[structopt(help = "MinSize to keep, 6 if empty")]
    min_size: Option<i64>,

    /// Job name keyword, matched case-sensitively.
    #[structopt(short = "j", long = "job")]
    #[structopt(help = "Job keyword, `Nodes & Edges` if empty")]
    job: Option<String>,

    /// Setting file (TOML).
    #[structopt(short = "s", long = "setting")]
    #[structopt(help = "Path to the setting")]
    setting: Option<String>,
}

fn run(opt: Opt) -> Result<()> {
    let setting = Setting::init(opt.setting.as_ref().map(|s| s.as_str()))?;
    let summary_path = opt.summary.unwrap_or(setting.summary);
    let min_size = opt.min_size.unwrap_or(setting.archetype.min_size);
    let job = opt.job.unwrap_or(setting.archetype.job);
    let output = opt.output.unwrap_or_else(|| {
        format!("graph_{}_mask_vs_recurcif_size{}.png", slug(&job), min_size)
    });

    let summary = Summary::open(&summary_path)?;
    let pivot = compare::archetype_time(summary.records(), &job, min_size);
    if pivot.is_empty() {
        warn!(
            "no data for MinSize={} (Mask/Recurcif) in {}, no chart written",
            min_size,
            summary_path
        );
        return Ok(());
    }
    debug!("pivot:\n{}", pivot);

    let title = format!("Execution time: Mask vs Recurcif, {} (MinSize={})", job, min_size);
    let labels = Labels {
        title: &title,
        x_desc: "Map Input (records)",
        y_desc: "Total Time (ms)",
    };
    let size = (setting.plot.width, setting.plot.height);
    plot::line_chart(&output, size, &pivot, labels, |c| format!("Version {}", c))?;

    println!("chart written to {}", output);
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
