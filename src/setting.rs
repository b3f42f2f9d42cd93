//! A flexible analysis setting in TOML.

use errors::*;
use std::fs::File;
use std::io::Read;
use toml;

/// The analysis setting. Every field has a default, so an empty file (or no
/// file at all) is a valid setting.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Setting {
    /// Directory scanned for `*.log` files.
    pub log_dir: String,

    /// Path to the benchmark summary (CSV).
    pub summary: String,

    /// Image geometry.
    pub plot: PlotSetting,

    /// Filters for the Mask vs Recurcif comparison.
    pub archetype: ArchetypeSetting,

    /// Filters for the combiner comparisons.
    pub combiner: CombinerSetting,
}

/// Output image size in pixels.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PlotSetting {
    /// Width in pixels.
    pub width: u32,

    /// Height in pixels.
    pub height: u32,
}

/// Selects the rows compared between the two archetype generators.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ArchetypeSetting {
    /// Only rows with this `MinSize`.
    pub min_size: i64,

    /// Job name keyword (case-sensitive).
    pub job: String,
}

/// Selects the rows compared with and without combiner.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CombinerSetting {
    /// Only rows with this `MinSize`.
    pub min_size: i64,

    /// One chart per job name keyword (case-insensitive).
    pub jobs: Vec<String>,
}

impl Default for Setting {
    fn default() -> Self {
        Setting {
            log_dir: "logs".to_string(),
            summary: "benchmark_summary.csv".to_string(),
            plot: PlotSetting::default(),
            archetype: ArchetypeSetting::default(),
            combiner: CombinerSetting::default(),
        }
    }
}

impl Default for PlotSetting {
    fn default() -> Self {
        PlotSetting {
            width: 1000,
            height: 600,
        }
    }
}

impl Default for ArchetypeSetting {
    fn default() -> Self {
        ArchetypeSetting {
            min_size: 6,
            job: "Nodes & Edges".to_string(),
        }
    }
}

impl Default for CombinerSetting {
    fn default() -> Self {
        CombinerSetting {
            min_size: 8,
            jobs: vec!["Data Cleaning".to_string(), "Nodes & Edges".to_string()],
        }
    }
}

impl Setting {
    /// Initialize from a file, or use the defaults when no path is given.
    pub fn init(path: Option<&str>) -> Result<Setting> {
        let path = match path {
            Some(p) => p,
            None => return Ok(Setting::default()),
        };
        let mut file = File::open(path).chain_err(|| ErrorKind::Setting(path.to_string()))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        let setting = Setting::parse(&contents).chain_err(|| ErrorKind::Setting(path.to_string()))?;
        debug!("loaded setting from {}: {:?}", path, setting);
        Ok(setting)
    }

    /// Parses a setting from TOML text.
    pub fn parse(contents: &str) -> Result<Setting> {
        Ok(toml::from_str(contents)?)
    }
}
