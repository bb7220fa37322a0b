use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

mod command;
pub use command::ExecutionResult;

/// A fully resolved, ready-to-run analyzer command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext {
    executable: PathBuf,
    interpreter_home: Option<PathBuf>,
}

impl CommandContext {
    /// Command run directly, as for a user-supplied override.
    #[must_use]
    pub fn direct(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            interpreter_home: None,
        }
    }

    /// Script that must be run through an interpreter.
    #[must_use]
    pub fn interpreted(executable: impl Into<PathBuf>, interpreter_home: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            interpreter_home: Some(interpreter_home.into()),
        }
    }

    #[must_use]
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    #[must_use]
    pub fn interpreter_home(&self) -> Option<&Path> {
        self.interpreter_home.as_deref()
    }

    /// The interpreter binary to launch, if any.
    ///
    /// A home that is a directory is an installation root and resolves to
    /// `<home>/bin/ruby`; anything else is taken as the binary itself.
    #[must_use]
    pub fn interpreter_program(&self) -> Option<PathBuf> {
        let home = self.interpreter_home.as_deref()?;
        if home.is_dir() {
            Some(home.join("bin").join("ruby"))
        } else {
            Some(home.to_path_buf())
        }
    }
}

impl fmt::Display for CommandContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.interpreter_home {
            Some(home) => write!(f, "{} {}", home.display(), self.executable.display()),
            None => write!(f, "{}", self.executable.display()),
        }
    }
}

/// One code smell reported by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarningRecord {
    pub file_path: String,
    /// 1-based source line.
    pub line: u32,
    pub message: String,
    pub smell_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_link: Option<String>,
}

impl WarningRecord {
    #[must_use]
    pub fn new(
        file_path: impl Into<String>,
        line: u32,
        message: impl Into<String>,
        smell_type: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            line: line.max(1),
            message: message.into(),
            smell_type: smell_type.into(),
            context: None,
            documentation_link: None,
        }
    }
}
