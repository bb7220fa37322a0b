// tests/integration_pipeline.rs - Orchestration and cleanup guarantees
use reekrun_core::config::RunConfiguration;
use reekrun_core::error::{AnalysisError, ErrorKind, Result};
use reekrun_core::materialize::{Materializer, TempFileMaterializer};
use reekrun_core::parser::{OutputParser, ReekJsonParser};
use reekrun_core::resolve::{CommandResolver, EnvironmentDescriptor};
use reekrun_core::runner::ProcessExecutor;
use reekrun_core::types::{CommandContext, ExecutionResult, WarningRecord};
use reekrun_core::AnalyzeUsecase;
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const TWO_WARNINGS: &str = r#"[{"context":"Greeter","lines":[1],"message":"has no descriptive comment","smell_type":"IrresponsibleModule"},{"context":"Greeter#greet","lines":[2],"message":"doesn't depend on instance state","smell_type":"UtilityFunction"}]"#;

const DOCUMENT: &str = "class Greeter\n  def greet(name) = \"hi #{name}\"\nend\n";

struct CountingMaterializer {
    inner: TempFileMaterializer,
    created: RefCell<Vec<PathBuf>>,
    removed: Cell<usize>,
}

impl CountingMaterializer {
    fn new(dir: &Path) -> Self {
        Self {
            inner: TempFileMaterializer::in_dir(dir),
            created: RefCell::new(Vec::new()),
            removed: Cell::new(0),
        }
    }

    fn only_path(&self) -> PathBuf {
        let created = self.created.borrow();
        assert_eq!(created.len(), 1, "exactly one working file per run");
        created[0].clone()
    }
}

impl Materializer for CountingMaterializer {
    fn create(&self, content: &str, extension: &str) -> Result<PathBuf> {
        let path = self.inner.create(content, extension)?;
        self.created.borrow_mut().push(path.clone());
        Ok(path)
    }

    fn remove(&self, path: &Path) -> std::io::Result<()> {
        self.removed.set(self.removed.get() + 1);
        self.inner.remove(path)
    }
}

struct StubResolver {
    fail_with: Option<fn() -> AnalysisError>,
}

impl CommandResolver for StubResolver {
    fn resolve(
        &self,
        _config: &RunConfiguration,
        _environment: Option<&dyn EnvironmentDescriptor>,
        _module_root: &Path,
    ) -> Result<CommandContext> {
        match self.fail_with {
            Some(make) => Err(make()),
            None => Ok(CommandContext::direct("/stub/reek")),
        }
    }
}

struct StubExecutor {
    payload: &'static str,
    launch_fails: bool,
    seen: RefCell<Option<(String, Vec<String>)>>,
}

impl StubExecutor {
    fn returning(payload: &'static str) -> Self {
        Self {
            payload,
            launch_fails: false,
            seen: RefCell::new(None),
        }
    }
}

impl ProcessExecutor for StubExecutor {
    fn run(
        &self,
        _command: &CommandContext,
        args: &[String],
        target: &Path,
        _working_dir: &Path,
    ) -> Result<ExecutionResult> {
        let content = fs::read_to_string(target).unwrap();
        *self.seen.borrow_mut() = Some((content, args.to_vec()));
        if self.launch_fails {
            return Err(AnalysisError::ProcessLaunch {
                program: "/stub/reek".into(),
                reason: "No such file or directory".into(),
            });
        }
        Ok(ExecutionResult::from_stdout("/stub/reek", self.payload))
    }
}

fn temp() -> TempDir {
    tempfile::tempdir().unwrap()
}

fn run(
    materializer: &CountingMaterializer,
    resolver: &StubResolver,
    executor: &StubExecutor,
    config: &RunConfiguration,
    cwd: &Path,
) -> Result<Vec<WarningRecord>> {
    let usecase = AnalyzeUsecase {
        materializer,
        resolver,
        executor,
        parser: &ReekJsonParser,
    };
    usecase.run(DOCUMENT, config, None, cwd)
}

#[test]
fn test_returns_stub_warnings_in_order_and_cleans_up() {
    let d = temp();
    let m = CountingMaterializer::new(d.path());
    let exec = StubExecutor::returning(TWO_WARNINGS);

    let warnings = run(
        &m,
        &StubResolver { fail_with: None },
        &exec,
        &RunConfiguration::default(),
        d.path(),
    )
    .unwrap();

    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].smell_type, "IrresponsibleModule");
    assert_eq!(warnings[0].line, 1);
    assert_eq!(warnings[1].smell_type, "UtilityFunction");
    assert_eq!(warnings[1].line, 2);

    let path = m.only_path();
    assert_eq!(warnings[0].file_path, path.display().to_string());
    assert!(!path.exists());
    assert_eq!(m.removed.get(), 1);
}

#[test]
fn test_executor_sees_document_and_args() {
    let d = temp();
    let m = CountingMaterializer::new(d.path());
    let exec = StubExecutor::returning("[]");
    let config = RunConfiguration::new(None, Some(".reek.yml".into()));

    run(&m, &StubResolver { fail_with: None }, &exec, &config, d.path()).unwrap();

    let (content, args) = exec.seen.borrow().clone().unwrap();
    assert_eq!(content, DOCUMENT);
    assert_eq!(
        args,
        vec![
            "--single-line",
            "--no-progress",
            "--no-empty-headings",
            "--format",
            "json",
            "--config",
            ".reek.yml"
        ]
    );
}

#[test]
fn test_empty_output_yields_no_warnings() {
    let d = temp();
    let m = CountingMaterializer::new(d.path());
    let exec = StubExecutor::returning("");

    let warnings = run(
        &m,
        &StubResolver { fail_with: None },
        &exec,
        &RunConfiguration::default(),
        d.path(),
    )
    .unwrap();

    assert!(warnings.is_empty());
    assert_eq!(m.removed.get(), 1);
}

#[test]
fn test_resolution_failure_still_cleans_up() {
    let resolution_failures: [fn() -> AnalysisError; 3] = [
        || AnalysisError::EnvironmentUnavailable,
        || AnalysisError::ToolNotFound {
            tool: "reek".into(),
            environment: "ruby-3.2".into(),
        },
        || AnalysisError::InterpreterHomeUndefined {
            environment: "ruby-3.2".into(),
        },
    ];
    let expected = [
        ErrorKind::EnvironmentUnavailable,
        ErrorKind::ToolNotFound,
        ErrorKind::InterpreterHomeUndefined,
    ];

    for (make, kind) in resolution_failures.into_iter().zip(expected) {
        let d = temp();
        let m = CountingMaterializer::new(d.path());
        let exec = StubExecutor::returning(TWO_WARNINGS);

        let err = run(
            &m,
            &StubResolver {
                fail_with: Some(make),
            },
            &exec,
            &RunConfiguration::default(),
            d.path(),
        )
        .unwrap_err();

        assert_eq!(err.kind(), kind);
        assert!(exec.seen.borrow().is_none(), "executor must not run");
        assert!(!m.only_path().exists());
        assert_eq!(m.removed.get(), 1);
    }
}

#[test]
fn test_launch_failure_still_cleans_up() {
    let d = temp();
    let m = CountingMaterializer::new(d.path());
    let exec = StubExecutor {
        payload: "",
        launch_fails: true,
        seen: RefCell::new(None),
    };

    let err = run(
        &m,
        &StubResolver { fail_with: None },
        &exec,
        &RunConfiguration::default(),
        d.path(),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ProcessLaunchFailure);
    assert_eq!(err.user_message(), "Execution failed.");
    assert!(!m.only_path().exists());
    assert_eq!(m.removed.get(), 1);
}

#[test]
fn test_parse_failure_still_cleans_up() {
    let d = temp();
    let m = CountingMaterializer::new(d.path());
    let exec = StubExecutor::returning("{not json");

    let err = run(
        &m,
        &StubResolver { fail_with: None },
        &exec,
        &RunConfiguration::default(),
        d.path(),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MalformedAnalyzerOutput);
    assert_eq!(err.raw_output(), Some("{not json"));
    assert!(!m.only_path().exists());
    assert_eq!(m.removed.get(), 1);
}

#[test]
fn test_parser_is_pluggable() {
    struct CountingParser(Cell<usize>);
    impl OutputParser for CountingParser {
        fn parse(&self, raw: &str, file_path: &str) -> Result<Vec<WarningRecord>> {
            self.0.set(self.0.get() + 1);
            Ok(vec![WarningRecord::new(file_path, 1, raw, "Raw")])
        }
    }

    let d = temp();
    let m = CountingMaterializer::new(d.path());
    let exec = StubExecutor::returning("anything");
    let parser = CountingParser(Cell::new(0));
    let usecase = AnalyzeUsecase {
        materializer: &m,
        resolver: &StubResolver { fail_with: None },
        executor: &exec,
        parser: &parser,
    };

    let warnings = usecase
        .run(DOCUMENT, &RunConfiguration::default(), None, d.path())
        .unwrap();

    assert_eq!(parser.0.get(), 1);
    assert_eq!(warnings[0].message, "anything");
}
