//! Result of one analyzer process run.

use serde::Serialize;

/// Captured outcome of an analyzer process.
///
/// The exit status is recorded for diagnostics only. Whether the run
/// produced a usable report is decided by parsing `stdout`.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionResult {
    /// The command line that was executed (display form).
    command: String,
    /// Process exit code (`None` if killed by a signal).
    exit_code: Option<i32>,
    /// Standard output, lines concatenated without separators.
    stdout: String,
    /// Standard error, newline separated.
    stderr: String,
    /// Execution time in milliseconds.
    duration_ms: u64,
}

impl ExecutionResult {
    #[must_use]
    pub fn new(
        command: String,
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration_ms: u64,
    ) -> Self {
        Self {
            command,
            exit_code,
            stdout,
            stderr,
            duration_ms,
        }
    }

    /// Result carrying only captured stdout, for stub executors.
    #[must_use]
    pub fn from_stdout(command: impl Into<String>, stdout: impl Into<String>) -> Self {
        Self::new(command.into(), Some(0), stdout.into(), String::new(), 0)
    }

    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// `true` when stdout captured no characters at all.
    ///
    /// Whitespace-only output is not empty here; the parser still treats it
    /// as a clean report.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty()
    }

    /// Consumes the result, returning the raw report text.
    #[must_use]
    pub fn into_stdout(self) -> String {
        self.stdout
    }
}
