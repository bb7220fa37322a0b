//! Parsing of the analyzer's JSON report.

use crate::error::{AnalysisError, Result};
use crate::types::WarningRecord;
use serde::de::Error as _;
use serde::Deserialize;

pub trait OutputParser {
    /// Parses `raw` into warnings for `file_path`, in report order.
    ///
    /// # Errors
    /// Returns `MalformedOutput` if `raw` is not a valid report.
    fn parse(&self, raw: &str, file_path: &str) -> Result<Vec<WarningRecord>>;
}

/// One entry of `reek --format json`.
#[derive(Debug, Deserialize)]
struct ReekIssue {
    #[serde(alias = "category")]
    smell_type: String,
    message: String,
    #[serde(default)]
    line: Option<u32>,
    #[serde(default)]
    lines: Vec<u32>,
    #[serde(default)]
    context: Option<String>,
    #[serde(default, alias = "wiki_link")]
    documentation_link: Option<String>,
}

impl ReekIssue {
    fn first_line(&self) -> Option<u32> {
        self.line.or_else(|| self.lines.first().copied())
    }

    fn into_record(self, file_path: &str, line: u32) -> WarningRecord {
        let mut record = WarningRecord::new(file_path, line, self.message, self.smell_type);
        record.context = self.context;
        record.documentation_link = self.documentation_link;
        record
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReekJsonParser;

impl OutputParser for ReekJsonParser {
    fn parse(&self, raw: &str, file_path: &str) -> Result<Vec<WarningRecord>> {
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let malformed = |source: serde_json::Error| AnalysisError::MalformedOutput {
            raw: raw.to_string(),
            source,
        };

        let issues: Vec<ReekIssue> = serde_json::from_str(raw).map_err(malformed)?;

        issues
            .into_iter()
            .enumerate()
            .map(|(idx, issue)| match issue.first_line() {
                Some(line) => Ok(issue.into_record(file_path, line)),
                None => Err(malformed(serde_json::Error::custom(format!(
                    "issue {idx} has no line information"
                )))),
            })
            .collect()
    }
}
