//! Network load with and without combiner: records shuffled between map and
//! reduce against the job input size.

extern crate jobstat;
#[macro_use]
extern crate log;
#[macro_use]
extern crate structopt;

use jobstat::errors::*;
use jobstat::plot::{self, Labels};
use jobstat::{compare, slug, Setting, Summary};
use std::path::Path;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "combiner_network")]
#[structopt(about = "Chart shuffled records with and without combiner by input size.")]
struct Opt {
    /// The summary written by `aggregate`.
    #[structopt(help = "Summary CSV, `benchmark_summary.csv` if empty")]
    summary: Option<String>,

    /// Folder receiving one chart per job.
    #[structopt(short = "o", long = "out", default_value = ".")]
    #[structopt(help = "Output directory")]
    output_dir: String,

    /// Only runs with this minimum archetype size.
    #[structopt(short = "m", long = "min-size")]
    #[structopt(help = "MinSize to keep, 8 if empty")]
    min_size: Option<i64>,

    /// Job name keywords, matched case-insensitively. One chart each.
    #[structopt(short = "j", long = "job")]
    #[structopt(help = "Job keyword (repeatable), `Data Cleaning` and `Nodes & Edges` if empty")]
    jobs: Vec<String>,

    /// Setting file (TOML).
    #[structopt(short = "s", long = "setting")]
    #[structopt(help = "Path to the setting")]
    setting: Option<String>,
}

fn run(opt: Opt) -> Result<()> {
    let setting = Setting::init(opt.setting.as_ref().map(|s| s.as_str()))?;
    let summary_path = opt.summary.unwrap_or(setting.summary);
    let min_size = opt.min_size.unwrap_or(setting.combiner.min_size);
    let jobs = if opt.jobs.is_empty() {
        setting.combiner.jobs
    } else {
        opt.jobs
    };
    let size = (setting.plot.width, setting.plot.height);

    let summary = Summary::open(&summary_path)?;
    for job in &jobs {
        let pivot = compare::combiner_network(summary.records(), job, min_size);
        if pivot.is_empty() {
            warn!("no '{}' run with MinSize={}, no chart written", job, min_size);
            continue;
        }
        debug!("pivot for {}:\n{}", job, pivot);

        let output = Path::new(&opt.output_dir).join(format!("graph_network_{}.png", slug(job)));
        let title = format!("Network Load (Lines): {} (MinSize={})", job, min_size);
        let labels = Labels {
            title: &title,
            x_desc: "Map Input (Lines)",
            y_desc: "Shuffle Output (Lines)",
        };
        plot::line_chart(&output, size, &pivot, labels, |c| format!("Combiner {}", c))?;
        println!("chart written to {}", output.display());
    }
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
