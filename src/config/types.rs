use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Per-invocation analyzer settings.
///
/// Empty strings are treated exactly like absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfiguration {
    /// Explicit analyzer path. Wins over anything the environment offers.
    #[serde(default, rename = "executable")]
    pub explicit_executable_path: Option<String>,
    /// Analyzer config file passed through as `--config <path>`.
    #[serde(default, rename = "config")]
    pub explicit_config_file_path: Option<String>,
}

impl RunConfiguration {
    #[must_use]
    pub fn new(executable: Option<String>, config_file: Option<String>) -> Self {
        Self {
            explicit_executable_path: executable,
            explicit_config_file_path: config_file,
        }
    }

    #[must_use]
    pub fn explicit_executable(&self) -> Option<&str> {
        non_empty(self.explicit_executable_path.as_deref())
    }

    #[must_use]
    pub fn explicit_config_file(&self) -> Option<&str> {
        non_empty(self.explicit_config_file_path.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSettings {
    /// Seconds to wait for the analyzer before killing it. 0 waits forever.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProcessSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ProcessSettings {
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

const fn default_timeout_secs() -> u64 {
    30
}

/// Host description of the installed Ruby runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default)]
    pub name: Option<String>,
    /// Interpreter binary, or an installation root containing `bin/ruby`.
    #[serde(default)]
    pub interpreter: Option<PathBuf>,
    #[serde(default)]
    pub gem_bin_dirs: Vec<PathBuf>,
}

/// Top-level shape of `reekrun.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analyzer: RunConfiguration,
    #[serde(default)]
    pub process: ProcessSettings,
    #[serde(default)]
    pub environment: EnvironmentConfig,
}
