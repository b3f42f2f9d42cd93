//! Logger setup shared by every binary.

use chrono;
use env_logger::{Builder, Env};
use std::io::Write;

/// Installs an `env_logger` that prefixes records with a UTC timestamp. The
/// filter comes from `RUST_LOG` and defaults to `info`.
pub fn init() {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.format(|buf, record| {
        let t = chrono::Utc::now();
        writeln!(
            buf,
            "{} {}:{}: {}",
            t.format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.module_path().unwrap_or("jobstat"),
            record.args()
        )
    });

    // a logger may already be installed (e.g. by a test harness)
    let _ = builder.try_init();
}
