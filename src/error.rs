// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Message shown to users for any failure to run the analyzer.
pub const EXECUTION_FAILED: &str = "Execution failed.";

/// Message shown to users when the analyzer ran but its report was unreadable.
pub const OUTPUT_UNREADABLE: &str = "Analyzer output could not be read.";

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Ruby environment is not available in the current context")]
    EnvironmentUnavailable,

    #[error("failed to find the {tool} executable using environment `{environment}`")]
    ToolNotFound { tool: String, environment: String },

    #[error("interpreter home path is undefined for environment `{environment}`")]
    InterpreterHomeUndefined { environment: String },

    #[error("failed to launch `{program}`: {reason}")]
    ProcessLaunch { program: String, reason: String },

    #[error("`{program}` did not finish within {seconds}s and was killed")]
    Timeout { program: String, seconds: u64 },

    #[error("analyzer output is not valid JSON: {source}")]
    MalformedOutput {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("working file error: {source} (path: {path})")]
    WorkingFile {
        source: std::io::Error,
        path: PathBuf,
    },
}

/// Fieldless discriminant of [`AnalysisError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EnvironmentUnavailable,
    ToolNotFound,
    InterpreterHomeUndefined,
    ProcessLaunchFailure,
    Timeout,
    MalformedAnalyzerOutput,
    WorkingFile,
}

impl AnalysisError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EnvironmentUnavailable => ErrorKind::EnvironmentUnavailable,
            Self::ToolNotFound { .. } => ErrorKind::ToolNotFound,
            Self::InterpreterHomeUndefined { .. } => ErrorKind::InterpreterHomeUndefined,
            Self::ProcessLaunch { .. } => ErrorKind::ProcessLaunchFailure,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::MalformedOutput { .. } => ErrorKind::MalformedAnalyzerOutput,
            Self::WorkingFile { .. } => ErrorKind::WorkingFile,
        }
    }

    /// Short message for end users. Full context belongs in the logs.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MalformedOutput { .. } => OUTPUT_UNREADABLE,
            _ => EXECUTION_FAILED,
        }
    }

    /// Raw analyzer text carried by a malformed-output failure.
    #[must_use]
    pub fn raw_output(&self) -> Option<&str> {
        match self {
            Self::MalformedOutput { raw, .. } => Some(raw),
            _ => None,
        }
    }

    pub(crate) fn working_file(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::WorkingFile {
            source,
            path: path.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_and_process_failures_share_terse_message() {
        let errors = [
            AnalysisError::EnvironmentUnavailable,
            AnalysisError::ToolNotFound {
                tool: "reek".into(),
                environment: "ruby-3.2".into(),
            },
            AnalysisError::InterpreterHomeUndefined {
                environment: "ruby-3.2".into(),
            },
            AnalysisError::ProcessLaunch {
                program: "reek".into(),
                reason: "No such file or directory".into(),
            },
        ];
        for e in &errors {
            assert_eq!(e.user_message(), EXECUTION_FAILED);
        }
    }

    #[test]
    fn display_keeps_operator_context() {
        let e = AnalysisError::ToolNotFound {
            tool: "reek".into(),
            environment: "ruby-3.2".into(),
        };
        let text = e.to_string();
        assert!(text.contains("reek"));
        assert!(text.contains("ruby-3.2"));
    }

    #[test]
    fn malformed_output_keeps_raw_text() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let e = AnalysisError::MalformedOutput {
            raw: "{not json".into(),
            source,
        };
        assert_eq!(e.kind(), ErrorKind::MalformedAnalyzerOutput);
        assert_eq!(e.raw_output(), Some("{not json"));
        assert_eq!(e.user_message(), OUTPUT_UNREADABLE);
    }
}
