// src/environment.rs
//! Ruby runtime descriptor used by the command-line host.

use crate::config::EnvironmentConfig;
use crate::resolve::EnvironmentDescriptor;
use std::path::{Path, PathBuf};

const DEFAULT_NAME: &str = "ruby";

/// An installed Ruby interpreter and the places its gems put executables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RubySdk {
    name: String,
    interpreter: Option<PathBuf>,
    gem_bin_dirs: Vec<PathBuf>,
}

impl RubySdk {
    #[must_use]
    pub fn new(name: impl Into<String>, interpreter: Option<PathBuf>, gem_bin_dirs: Vec<PathBuf>) -> Self {
        Self {
            name: name.into(),
            interpreter: interpreter.filter(|p| !p.as_os_str().is_empty()),
            gem_bin_dirs,
        }
    }

    /// Builds a descriptor from configuration, detecting `ruby` on `PATH`
    /// when no interpreter is configured. Returns `None` when neither works.
    #[must_use]
    pub fn from_config(config: &EnvironmentConfig) -> Option<Self> {
        let name = config
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_NAME.to_string());
        let configured = config
            .interpreter
            .clone()
            .filter(|p| !p.as_os_str().is_empty());

        let interpreter = configured.or_else(|| which::which(DEFAULT_NAME).ok())?;
        Some(Self::new(name, Some(interpreter), config.gem_bin_dirs.clone()))
    }

    /// Directory holding the interpreter binary.
    fn interpreter_bin_dir(&self) -> Option<PathBuf> {
        let interpreter = self.interpreter.as_deref()?;
        if interpreter.is_dir() {
            Some(interpreter.join("bin"))
        } else {
            interpreter.parent().map(Path::to_path_buf)
        }
    }

    fn candidates(&self, tool: &str, module_root: &Path) -> Vec<PathBuf> {
        let mut dirs = vec![module_root.join("bin")];
        dirs.extend(self.gem_bin_dirs.iter().cloned());
        dirs.extend(self.interpreter_bin_dir());
        dirs.into_iter().map(|d| d.join(tool)).collect()
    }
}

impl EnvironmentDescriptor for RubySdk {
    fn name(&self) -> &str {
        &self.name
    }

    fn script_path(&self, tool: &str, module_root: &Path) -> Option<PathBuf> {
        self.candidates(tool, module_root)
            .into_iter()
            .find(|p| p.is_file())
    }

    fn home_path(&self) -> Option<PathBuf> {
        self.interpreter.clone()
    }
}
