//! Analyzer command-line arguments.

use crate::config::RunConfiguration;

/// Flags passed on every run, in order.
pub const BASE_FLAGS: [&str; 5] = [
    "--single-line",
    "--no-progress",
    "--no-empty-headings",
    "--format",
    "json",
];

pub const CONFIG_FLAG: &str = "--config";

/// Builds the ordered argument list for `config`. The target file is not included.
#[must_use]
pub fn build_args(config: &RunConfiguration) -> Vec<String> {
    let mut args: Vec<String> = BASE_FLAGS.iter().map(|s| (*s).to_string()).collect();

    if let Some(path) = config.explicit_config_file() {
        args.push(CONFIG_FLAG.to_string());
        args.push(path.to_string());
    }

    args
}
