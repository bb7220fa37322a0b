pub mod arguments;
pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod exit;
pub mod logging;
pub mod materialize;
pub mod parser;
pub mod pipeline;
pub mod reporting;
pub mod resolve;
pub mod runner;
pub mod types;

pub use error::{AnalysisError, ErrorKind, Result};
pub use pipeline::{execute_analysis, AnalyzeUsecase};
pub use types::{CommandContext, WarningRecord};
