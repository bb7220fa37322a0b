// src/runner.rs
//! Analyzer subprocess execution and output capture.

use crate::error::{AnalysisError, Result};
use crate::types::{CommandContext, ExecutionResult};
use std::ffi::OsString;
use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub trait ProcessExecutor {
    /// Runs the analyzer against `target` from `working_dir`.
    ///
    /// The exit status is not interpreted; only launch and supervision
    /// problems are errors.
    ///
    /// # Errors
    /// Returns `ProcessLaunch` if the process cannot start or its output
    /// cannot be opened, and `Timeout` when the wait bound is exceeded.
    fn run(
        &self,
        command: &CommandContext,
        args: &[String],
        target: &Path,
        working_dir: &Path,
    ) -> Result<ExecutionResult>;
}

/// Full argv for a run: `[interpreter] executable args.. target`.
#[must_use]
pub fn command_line(command: &CommandContext, args: &[String], target: &Path) -> Vec<OsString> {
    let mut argv: Vec<OsString> = Vec::with_capacity(args.len() + 3);
    if let Some(interpreter) = command.interpreter_program() {
        argv.push(interpreter.into_os_string());
    }
    argv.push(command.executable().as_os_str().to_owned());
    argv.extend(args.iter().map(OsString::from));
    argv.push(target.as_os_str().to_owned());
    argv
}

fn display_line(argv: &[OsString]) -> String {
    argv.iter()
        .map(|a| a.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs the analyzer as a child process with an optional wait bound.
#[derive(Debug, Clone, Default)]
pub struct SubprocessRunner {
    timeout: Option<Duration>,
}

impl SubprocessRunner {
    #[must_use]
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl ProcessExecutor for SubprocessRunner {
    fn run(
        &self,
        command: &CommandContext,
        args: &[String],
        target: &Path,
        working_dir: &Path,
    ) -> Result<ExecutionResult> {
        let size = fs::metadata(target)
            .map_err(|e| AnalysisError::working_file(e, target))?
            .len();
        let joined_args = args.join(" ");
        info!(path = %target.display(), size, "analyzing file");
        info!(args = %joined_args, "analyzer parameters");

        let argv = command_line(command, args, target);
        let line = display_line(&argv);
        let result = run_streaming(&argv, &line, working_dir, self.timeout)?;

        if result.is_empty() {
            error!(path = %target.display(), "empty analyzer output");
            error!(size, "file size in bytes");
            error!(args = %joined_args, "analyzer parameters");
        }

        Ok(result)
    }
}

fn run_streaming(
    argv: &[OsString],
    line: &str,
    working_dir: &Path,
    timeout: Option<Duration>,
) -> Result<ExecutionResult> {
    let start = Instant::now();
    let deadline = timeout.map(|t| start + t);
    let (program, rest) = argv.split_first().ok_or_else(|| AnalysisError::ProcessLaunch {
        program: String::new(),
        reason: "empty command line".to_string(),
    })?;
    let program_name = program.to_string_lossy().into_owned();
    let launch_error = |reason: String| AnalysisError::ProcessLaunch {
        program: program_name.clone(),
        reason,
    };
    let timed_out = || {
        let seconds = timeout.map_or(0, |t| t.as_secs());
        error!(command = line, seconds, "analyzer timed out");
        AnalysisError::Timeout {
            program: program_name.clone(),
            seconds,
        }
    };

    debug!(command = line, cwd = %working_dir.display(), "spawning analyzer");
    let mut child = Command::new(program)
        .args(rest)
        .current_dir(working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| launch_error(e.to_string()))?;

    let Some(stdout) = child.stdout.take() else {
        kill_and_reap(&mut child);
        return Err(launch_error("failed to open stdout".to_string()));
    };
    let stderr = child.stderr.take();

    // Readers are never joined: a grandchild may hold the pipes open past
    // the deadline. Dropping a receiver detaches its thread.
    let out_rx = spawn_stream_reader(stdout, "");
    let err_rx = stderr.map(|s| spawn_stream_reader(s, "\n"));

    let status = match wait_until(&mut child, deadline) {
        Ok(Some(status)) => status,
        Ok(None) => {
            kill_and_reap(&mut child);
            return Err(timed_out());
        }
        Err(e) => {
            kill_and_reap(&mut child);
            return Err(launch_error(e.to_string()));
        }
    };

    let Some(stdout) = collect(&out_rx, deadline) else {
        return Err(timed_out());
    };
    let stderr = err_rx
        .and_then(|rx| collect(&rx, deadline))
        .unwrap_or_default();
    let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    if !status.success() {
        debug!(exit_code = ?status.code(), "analyzer exited with non-zero status");
    }
    if !stderr.is_empty() {
        debug!(stderr = %stderr.trim_end(), "analyzer stderr");
    }
    debug!(duration_ms, bytes = stdout.len(), "analyzer finished");

    Ok(ExecutionResult::new(
        line.to_string(),
        status.code(),
        stdout,
        stderr,
        duration_ms,
    ))
}

/// Polls until the child exits. `Ok(None)` means the deadline passed.
fn wait_until(
    child: &mut Child,
    deadline: Option<Instant>,
) -> std::io::Result<Option<std::process::ExitStatus>> {
    let Some(deadline) = deadline else {
        return child.wait().map(Some);
    };
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn kill_and_reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

/// Waits for a reader's text. `None` means the deadline passed first.
fn collect(rx: &Receiver<String>, deadline: Option<Instant>) -> Option<String> {
    let received = match deadline {
        None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        Some(d) => rx.recv_timeout(d.saturating_duration_since(Instant::now())),
    };
    match received {
        Ok(text) => Some(text),
        Err(RecvTimeoutError::Disconnected) => Some(String::new()),
        Err(RecvTimeoutError::Timeout) => None,
    }
}

/// Drains `input` line by line on its own thread, joining lines with `separator`.
fn spawn_stream_reader<R: Read + Send + 'static>(
    input: R,
    separator: &'static str,
) -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let reader = BufReader::new(input);
        let mut acc = String::new();
        for line in reader.lines().map_while(std::io::Result::ok) {
            if !acc.is_empty() {
                acc.push_str(separator);
            }
            acc.push_str(&line);
        }
        let _ = tx.send(acc);
    });
    rx
}
