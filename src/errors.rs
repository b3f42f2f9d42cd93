//! Error types for jobstat.

/// Creates the Error, ErrorKind, ResultExt, and Result types
error_chain!{
    errors {
        MalformedSummary(row: usize) {
            description("malformed summary row")
            display("malformed summary row {}", row)
        }
        MalformedCorrelation(row: usize) {
            description("malformed correlation row")
            display("malformed correlation row {}", row)
        }
        Plot(msg: String) {
            description("error in rendering the chart")
            display("failed to render chart: {}", msg)
        }
        Setting(path: String) {
            description("error in loading the setting")
            display("failed to load setting from {}", path)
        }
    }

    foreign_links {
        Io(::std::io::Error);
        Csv(::csv::Error);
        Regex(::regex::Error);
        Toml(::toml::de::Error);
    }
}

/// Logs the error together with its chain of causes.
pub fn report(e: &Error) {
    error!("{}", e);
    for cause in e.iter().skip(1) {
        error!("caused by: {}", cause);
    }
}
