//! Turns run configuration plus the host environment into a concrete command.

use crate::config::RunConfiguration;
use crate::error::{AnalysisError, Result};
use crate::types::CommandContext;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Name of the analyzer's gem executable.
pub const REEK_TOOL: &str = "reek";

/// The host's view of an installed language runtime. Read-only.
pub trait EnvironmentDescriptor {
    /// Human-readable name, used in diagnostics.
    fn name(&self) -> &str;

    /// Path of the script installed for `tool`, looked up for `module_root`.
    fn script_path(&self, tool: &str, module_root: &Path) -> Option<PathBuf>;

    /// Interpreter home (binary or installation root).
    fn home_path(&self) -> Option<PathBuf>;
}

pub trait CommandResolver {
    /// Resolves the command to run.
    ///
    /// # Errors
    /// Returns `EnvironmentUnavailable`, `ToolNotFound` or
    /// `InterpreterHomeUndefined` when no command can be derived.
    fn resolve(
        &self,
        config: &RunConfiguration,
        environment: Option<&dyn EnvironmentDescriptor>,
        module_root: &Path,
    ) -> Result<CommandContext>;
}

/// Explicit override first, then the gem installed in the environment.
#[derive(Debug, Clone)]
pub struct ReekResolver {
    tool: String,
}

impl Default for ReekResolver {
    fn default() -> Self {
        Self::for_tool(REEK_TOOL)
    }
}

impl ReekResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn for_tool(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }

    fn from_environment(
        &self,
        environment: Option<&dyn EnvironmentDescriptor>,
        module_root: &Path,
    ) -> Result<CommandContext> {
        let Some(env) = environment else {
            error!("no Ruby environment is attached to the current context");
            return Err(AnalysisError::EnvironmentUnavailable);
        };

        let Some(executable) = env.script_path(&self.tool, module_root) else {
            error!(
                environment = env.name(),
                tool = %self.tool,
                "failed to obtain the analyzer executable path"
            );
            return Err(AnalysisError::ToolNotFound {
                tool: self.tool.clone(),
                environment: env.name().to_string(),
            });
        };

        let Some(home) = env.home_path() else {
            error!(environment = env.name(), "interpreter home path is not defined");
            return Err(AnalysisError::InterpreterHomeUndefined {
                environment: env.name().to_string(),
            });
        };

        Ok(CommandContext::interpreted(executable, home))
    }
}

impl CommandResolver for ReekResolver {
    fn resolve(
        &self,
        config: &RunConfiguration,
        environment: Option<&dyn EnvironmentDescriptor>,
        module_root: &Path,
    ) -> Result<CommandContext> {
        if let Some(explicit) = config.explicit_executable() {
            debug!(executable = explicit, "using explicit analyzer override");
            return Ok(CommandContext::direct(explicit));
        }

        let ctx = self.from_environment(environment, module_root)?;
        debug!(command = %ctx, "resolved analyzer from environment");
        Ok(ctx)
    }
}
