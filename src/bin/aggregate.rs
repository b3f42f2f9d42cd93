//! Parses benchmark logs (`bench_<Dataset>_<MinSize>[_noCombine].log`) and
//! merges their per-job counters into the summary CSV. A log that is already
//! in the summary has its rows replaced.

extern crate jobstat;
#[macro_use]
extern crate log;
#[macro_use]
extern crate structopt;

use jobstat::errors::*;
use jobstat::{Extractor, Setting, Summary};
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "aggregate")]
#[structopt(about = "Merge per-job counters of benchmark logs into the summary CSV.")]
struct Opt {
    /// A log file, or a directory whose `*.log` files are all processed.
    #[structopt(help = "Log file or directory, `logs` if empty")]
    logs: Option<String>,

    /// The summary to update.
    #[structopt(short = "o", long = "out")]
    #[structopt(help = "Summary CSV, `benchmark_summary.csv` if empty")]
    summary: Option<String>,

    /// Start from an empty summary instead of merging.
    #[structopt(long = "fresh")]
    #[structopt(help = "Ignore the existing summary")]
    fresh: bool,

    /// Setting file (TOML).
    #[structopt(short = "s", long = "setting")]
    #[structopt(help = "Path to the setting")]
    setting: Option<String>,
}

fn run(opt: Opt) -> Result<()> {
    let setting = Setting::init(opt.setting.as_ref().map(|s| s.as_str()))?;
    let logs_path = opt.logs.unwrap_or(setting.log_dir);
    let summary_path = opt.summary.unwrap_or(setting.summary);

    let logs = jobstat::find_logs(&logs_path)?;
    if logs.is_empty() {
        warn!("no .log file found in {}", logs_path);
        return Ok(());
    }

    let mut summary = if opt.fresh {
        Summary::default()
    } else {
        Summary::open_or_empty(&summary_path)?
    };

    let extractor = Extractor::new()?;
    for path in &logs {
        let (name, records) = extractor.parse_log_file(path)?;
        info!("{}: {} jobs", name, records.len());
        summary.replace_file(&name, records);
    }
    summary.sort();
    summary.to_path(&summary_path)?;

    println!("merged {} logs into '{}'", logs.len(), summary_path);
    if !summary.is_empty() {
        print!("{}", summary.overview());
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
