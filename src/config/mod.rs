// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::{generate_toml, CONFIG_FILE};
pub use self::types::{Config, EnvironmentConfig, ProcessSettings, RunConfiguration};
use anyhow::Result;
use std::path::Path;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `reekrun.toml` from the current directory, falling back to defaults.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Path::new("."))
    }

    #[must_use]
    pub fn load_from(dir: &Path) -> Self {
        io::load_toml_config(dir)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    /// Returns error if the text is not a valid config document.
    pub fn parse_toml(content: &str) -> Result<Self> {
        io::parse_toml(content)
    }

    /// Saves the configuration to `reekrun.toml` in `dir`.
    ///
    /// # Errors
    /// Returns error if the file write fails.
    pub fn save_to(&self, dir: &Path) -> Result<()> {
        io::save_to_file(self, dir)
    }
}
