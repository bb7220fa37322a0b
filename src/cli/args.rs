use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reekrun", version, about = "Run reek on a Ruby buffer and report code smells")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Show debug diagnostics on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Only show errors on stderr
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a Ruby file (or stdin with `-`)
    Check {
        /// File to analyze, `-` for stdin
        file: PathBuf,
        /// Print warnings as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        overrides: AnalyzerOverrides,
    },
    /// Print the resolved analyzer command line
    Command {
        #[command(flatten)]
        overrides: AnalyzerOverrides,
    },
    /// Write a starter reekrun.toml
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

/// Per-invocation overrides of `reekrun.toml`.
#[derive(Args, Debug, Clone, Default)]
pub struct AnalyzerOverrides {
    /// Path to the reek executable
    #[arg(long, value_name = "PATH")]
    pub executable: Option<String>,
    /// Reek configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,
    /// Ruby interpreter used to run the reek gem script
    #[arg(long, value_name = "PATH")]
    pub ruby: Option<PathBuf>,
    /// Seconds before the analyzer is killed (0 = no limit)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}
