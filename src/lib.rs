//! Library of functions and structs behind the jobstat tools: parsing Hadoop
//! benchmark logs into a summary table and charting it.
//!
//! The tools are independent batch binaries. `aggregate` turns logs into the
//! summary CSV; `archetype_time`, `combiner_time` and `combiner_network` chart
//! the summary; `correlation` charts the stats job output.

#![recursion_limit = "1024"]
#![deny(missing_docs)]

extern crate average;
extern crate chrono;
extern crate csv;
extern crate env_logger;
#[macro_use]
extern crate error_chain;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate plotters;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate toml;

#[allow(missing_docs)]
pub mod errors;
pub mod logging;

mod setting;
pub use setting::{ArchetypeSetting, CombinerSetting, PlotSetting, Setting};

#[allow(missing_docs)]
pub mod summary;
pub use summary::{Combiner, JobRecord, Summary};

mod filename;
pub use filename::{parse_log_filename, LogMeta};

#[allow(missing_docs)]
pub mod extract;
pub use extract::{extract_metric, find_logs, split_jobs, Extractor, Metric};

#[allow(missing_docs)]
pub mod select;
pub use select::{dataset_size, job_matches, shuffle_lines, slug, Variant};

pub mod pivot;
pub use pivot::{DatasetKey, Pivot};

pub mod compare;

#[allow(missing_docs)]
pub mod correlation;
pub use correlation::{linear_fit, pearson, EdgeStat, LinearFit};

#[allow(missing_docs)]
pub mod plot;
pub use plot::Labels;
