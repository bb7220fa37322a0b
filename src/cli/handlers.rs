// src/cli/handlers.rs
use crate::arguments::build_args;
use crate::cli::args::AnalyzerOverrides;
use crate::config::{Config, CONFIG_FILE};
use crate::environment::RubySdk;
use crate::exit::ReekrunExit;
use crate::pipeline::execute_with_settings;
use crate::reporting;
use crate::resolve::{CommandResolver, EnvironmentDescriptor, ReekResolver};
use crate::runner::command_line;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

fn get_working_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Loads `reekrun.toml` from `dir` and applies command-line overrides.
#[must_use]
pub fn effective_config(dir: &Path, overrides: &AnalyzerOverrides) -> Config {
    let mut config = Config::load_from(dir);
    if let Some(exe) = &overrides.executable {
        config.analyzer.explicit_executable_path = Some(exe.clone());
    }
    if let Some(cfg) = &overrides.config {
        config.analyzer.explicit_config_file_path = Some(cfg.clone());
    }
    if let Some(ruby) = &overrides.ruby {
        config.environment.interpreter = Some(ruby.clone());
    }
    if let Some(secs) = overrides.timeout {
        config.process.timeout_secs = secs;
    }
    config
}

fn read_document(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
}

/// Handles the check command.
///
/// # Errors
/// Returns error if printing the JSON report fails.
pub fn handle_check(file: &Path, json: bool, overrides: &AnalyzerOverrides) -> Result<ReekrunExit> {
    let document = match read_document(file) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            return Ok(ReekrunExit::InvalidInput);
        }
    };

    let working_dir = get_working_dir();
    let config = effective_config(&working_dir, overrides);
    let sdk = RubySdk::from_config(&config.environment);
    let environment = sdk.as_ref().map(|s| s as &dyn EnvironmentDescriptor);

    let outcome = execute_with_settings(
        &document,
        &config.analyzer,
        &config.process,
        environment,
        &working_dir,
    );

    let mut warnings = match outcome {
        Ok(w) => w,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e.user_message());
            return Ok(ReekrunExit::Error);
        }
    };

    let display = file.display().to_string();
    for w in &mut warnings {
        w.file_path.clone_from(&display);
    }

    if json {
        reporting::print_json(&warnings)?;
    } else {
        reporting::print_warnings(&warnings);
    }

    if warnings.is_empty() {
        Ok(ReekrunExit::Success)
    } else {
        Ok(ReekrunExit::SmellsFound)
    }
}

/// Handles the command subcommand: prints what `check` would launch.
///
/// # Errors
/// Returns error if the analyzer command cannot be resolved.
pub fn handle_command(overrides: &AnalyzerOverrides) -> Result<ReekrunExit> {
    let working_dir = get_working_dir();
    let config = effective_config(&working_dir, overrides);
    let sdk = RubySdk::from_config(&config.environment);
    let environment = sdk.as_ref().map(|s| s as &dyn EnvironmentDescriptor);

    let command = ReekResolver::new()
        .resolve(&config.analyzer, environment, &working_dir)
        .context("Failed to resolve the reek command")?;
    let args = build_args(&config.analyzer);
    let argv = command_line(&command, &args, Path::new("<file>.rb"));

    let line: Vec<_> = argv.iter().map(|a| a.to_string_lossy()).collect();
    println!("{}", line.join(" "));
    Ok(ReekrunExit::Success)
}

/// Handles the init command.
///
/// # Errors
/// Returns error if the file cannot be written.
pub fn handle_init(force: bool) -> Result<ReekrunExit> {
    let path = get_working_dir().join(CONFIG_FILE);
    if path.exists() && !force {
        eprintln!(
            "{} {} already exists (use --force to overwrite)",
            "Error:".red(),
            path.display()
        );
        return Ok(ReekrunExit::InvalidInput);
    }
    fs::write(&path, crate::config::generate_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("{} {}", "[OK] Wrote".green().bold(), path.display());
    Ok(ReekrunExit::Success)
}
