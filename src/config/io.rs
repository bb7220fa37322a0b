// src/config/io.rs
use super::types::Config;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "reekrun.toml";

pub fn load_toml_config(dir: &Path) -> Config {
    let path = dir.join(CONFIG_FILE);
    let Ok(content) = fs::read_to_string(&path) else {
        return Config::default();
    };
    parse_toml(&content).unwrap_or_else(|e| {
        eprintln!(
            "{} {} is invalid, using defaults: {e}",
            "Warning:".yellow(),
            path.display()
        );
        Config::default()
    })
}

/// Parses a `reekrun.toml` document.
///
/// # Errors
/// Returns error if the document is not valid TOML for this schema.
pub fn parse_toml(content: &str) -> Result<Config> {
    toml::from_str(content).context("Failed to parse reekrun.toml")
}

/// Writes `config` to `reekrun.toml` inside `dir`.
///
/// # Errors
/// Returns error if serialization or the file write fails.
pub fn save_to_file(config: &Config, dir: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
    let path = dir.join(CONFIG_FILE);
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))
}

#[must_use]
pub fn generate_toml() -> String {
    r#"# reekrun.toml

[analyzer]
# Path to the reek executable. Leave empty to locate it through the Ruby environment.
executable = ""
# Reek configuration file passed as --config.
config = ""

[process]
# Seconds before a running analyzer is killed (0 = no limit).
timeout_secs = 30

[environment]
name = ""
# Ruby interpreter binary, or an installation root containing bin/ruby.
interpreter = ""
# Extra directories searched for gem executables.
gem_bin_dirs = []
"#
    .to_string()
}
