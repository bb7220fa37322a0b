//! Analysis usecase: materialize, resolve, build args, run, parse, clean up.

use crate::arguments::build_args;
use crate::config::{ProcessSettings, RunConfiguration};
use crate::error::Result;
use crate::materialize::{Materializer, TempFileMaterializer, WorkingFile, RUBY_EXTENSION};
use crate::parser::{OutputParser, ReekJsonParser};
use crate::resolve::{CommandResolver, EnvironmentDescriptor, ReekResolver};
use crate::runner::{ProcessExecutor, SubprocessRunner};
use crate::types::WarningRecord;
use std::path::Path;
use tracing::{error, info};

/// The collaborators of one analysis run.
pub struct AnalyzeUsecase<'a> {
    pub materializer: &'a dyn Materializer,
    pub resolver: &'a dyn CommandResolver,
    pub executor: &'a dyn ProcessExecutor,
    pub parser: &'a dyn OutputParser,
}

impl<'a> AnalyzeUsecase<'a> {
    /// Analyzes `document` and returns its warnings in analyzer order.
    ///
    /// The working file is removed before this returns, whatever the outcome.
    ///
    /// # Errors
    /// Propagates the failing step's error unchanged.
    pub fn run(
        &self,
        document: &str,
        config: &RunConfiguration,
        environment: Option<&dyn EnvironmentDescriptor>,
        working_dir: &Path,
    ) -> Result<Vec<WarningRecord>> {
        let file = WorkingFile::acquire(self.materializer, document, RUBY_EXTENSION)?;
        let outcome = self.analyze(&file, config, environment, working_dir);
        file.release();

        match &outcome {
            Ok(warnings) => info!(count = warnings.len(), "analysis complete"),
            Err(e) => error!(kind = ?e.kind(), error = %e, "analysis failed"),
        }
        outcome
    }

    fn analyze(
        &self,
        file: &WorkingFile<'_>,
        config: &RunConfiguration,
        environment: Option<&dyn EnvironmentDescriptor>,
        working_dir: &Path,
    ) -> Result<Vec<WarningRecord>> {
        let command = self.resolver.resolve(config, environment, working_dir)?;
        let args = build_args(config);
        let result = self.executor.run(&command, &args, file.path(), working_dir)?;
        let file_path = file.path().display().to_string();
        self.parser.parse(result.stdout(), &file_path)
    }
}

/// Runs reek on `document` with the default collaborators and process settings.
///
/// # Errors
/// See [`AnalyzeUsecase::run`].
pub fn execute_analysis(
    document: &str,
    config: &RunConfiguration,
    environment: Option<&dyn EnvironmentDescriptor>,
    working_dir: &Path,
) -> Result<Vec<WarningRecord>> {
    execute_with_settings(
        document,
        config,
        &ProcessSettings::default(),
        environment,
        working_dir,
    )
}

/// Like [`execute_analysis`], with explicit process settings.
///
/// # Errors
/// See [`AnalyzeUsecase::run`].
pub fn execute_with_settings(
    document: &str,
    config: &RunConfiguration,
    settings: &ProcessSettings,
    environment: Option<&dyn EnvironmentDescriptor>,
    working_dir: &Path,
) -> Result<Vec<WarningRecord>> {
    let materializer = TempFileMaterializer::new();
    let resolver = ReekResolver::new();
    let executor = SubprocessRunner::new(settings.timeout());
    let usecase = AnalyzeUsecase {
        materializer: &materializer,
        resolver: &resolver,
        executor: &executor,
        parser: &ReekJsonParser,
    };
    usecase.run(document, config, environment, working_dir)
}
