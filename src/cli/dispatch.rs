//! Command dispatch logic extracted from binary to reduce main function size.

use super::{
    args::Commands,
    handlers::{handle_check, handle_command, handle_init},
};
use crate::exit::ReekrunExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<ReekrunExit> {
    match command {
        Commands::Check {
            file,
            json,
            overrides,
        } => handle_check(&file, json, &overrides),
        Commands::Command { overrides } => handle_command(&overrides),
        Commands::Init { force } => handle_init(force),
    }
}
