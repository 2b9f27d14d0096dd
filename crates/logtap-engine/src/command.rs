//! External command execution.
//!
//! This module provides:
//! - [`CommandSpec`] — One fully specified command invocation
//! - [`CommandOutcome`] — Captured streams and exit status
//! - [`CommandRunner`] — The seam every source spawns through
//! - [`ProcessRunner`] — Production runner with a bounded wait
//!
//! Running a command is a total function here: spawn failures, non-zero
//! exits, and timeouts all come back as a [`CommandOutcome`], never as
//! an error. Every caller needs to inspect *why* a command failed, not
//! just react to a propagated failure.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command as TokioCommand;
use tracing::warn;

/// One external command invocation: program, arguments, and an optional
/// environment overlay on top of the inherited environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program name or path to execute.
    pub program: String,
    /// Arguments, passed directly with no shell involved.
    pub args: Vec<String>,
    /// Environment entries overlaid on the inherited environment.
    pub env: Vec<(String, String)>,
}

impl CommandSpec {
    /// Creates a spec for the given program.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    /// Adds a single argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Adds multiple arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Overlays an environment variable for this invocation.
    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }
}

/// Captured result of one command invocation. Never retained beyond the
/// call that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Captured standard output, lossily decoded as UTF-8.
    pub stdout: String,
    /// Captured standard error, lossily decoded as UTF-8.
    pub stderr: String,
    /// Exit status code; -1 when the process never produced one.
    pub exit_code: i32,
}

impl CommandOutcome {
    /// Returns true when the command exited with status zero.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Returns the captured error stream, or a synthesized message when
    /// the command failed silently.
    #[must_use]
    pub fn error_text(&self) -> String {
        let trimmed = self.stderr.trim();
        if trimmed.is_empty() {
            format!("command exited with status {}", self.exit_code)
        } else {
            trimmed.to_string()
        }
    }

    /// Splits stdout into owned lines.
    #[must_use]
    pub fn stdout_lines(&self) -> Vec<String> {
        self.stdout.lines().map(str::to_string).collect()
    }

    fn from_output(output: std::process::Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code().unwrap_or(-1),
        }
    }

    fn spawn_failure(program: &str, err: &std::io::Error) -> Self {
        Self {
            stdout: String::new(),
            stderr: format!("failed to run '{program}': {err}"),
            exit_code: -1,
        }
    }

    fn timed_out(program: &str, timeout: Duration) -> Self {
        Self {
            stdout: String::new(),
            stderr: format!("command '{program}' timed out after {}s", timeout.as_secs()),
            exit_code: -1,
        }
    }
}

/// The seam through which every source spawns external commands.
///
/// Production code uses [`ProcessRunner`]; tests substitute scripted
/// fakes so retrieval logic can be exercised without a container
/// runtime or orchestrator on the host.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs the command to completion and captures both streams.
    async fn run(&self, spec: CommandSpec) -> CommandOutcome;
}

/// Spawns real child processes with a bounded wait.
///
/// The child inherits the parent environment plus the spec's overlay,
/// gets piped stdout/stderr and a closed stdin, and is killed if it
/// outlives the configured timeout.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    timeout: Duration,
}

impl ProcessRunner {
    /// Creates a runner with the given per-command timeout.
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, spec: CommandSpec) -> CommandOutcome {
        let mut cmd = TokioCommand::new(&spec.program);
        cmd.args(&spec.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        for (key, value) in &spec.env {
            cmd.env(key, value);
        }

        match tokio::time::timeout(self.timeout, cmd.output()).await {
            Ok(Ok(output)) => CommandOutcome::from_output(output),
            Ok(Err(err)) => {
                warn!(program = %spec.program, error = %err, "command spawn failed");
                CommandOutcome::spawn_failure(&spec.program, &err)
            }
            Err(_) => {
                warn!(
                    program = %spec.program,
                    timeout_secs = self.timeout.as_secs(),
                    "command timed out, child killed"
                );
                CommandOutcome::timed_out(&spec.program, self.timeout)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner() -> ProcessRunner {
        ProcessRunner::new(Duration::from_secs(5))
    }

    #[test]
    fn spec_builder_collects_args_and_env() {
        let spec = CommandSpec::new("docker")
            .arg("logs")
            .args(["--tail", "100"])
            .arg("web-1")
            .env("DOCKER_HOST", "unix:///run/docker.sock");

        assert_eq!(spec.program, "docker");
        assert_eq!(spec.args, vec!["logs", "--tail", "100", "web-1"]);
        assert_eq!(
            spec.env,
            vec![("DOCKER_HOST".to_string(), "unix:///run/docker.sock".to_string())]
        );
    }

    #[test]
    fn error_text_prefers_stderr() {
        let outcome = CommandOutcome {
            stdout: String::new(),
            stderr: "no such container: web-9\n".to_string(),
            exit_code: 1,
        };
        assert_eq!(outcome.error_text(), "no such container: web-9");
    }

    #[test]
    fn error_text_synthesized_when_stderr_empty() {
        let outcome = CommandOutcome {
            stdout: String::new(),
            stderr: String::new(),
            exit_code: 3,
        };
        assert_eq!(outcome.error_text(), "command exited with status 3");
    }

    #[test]
    fn stdout_lines_splits_output() {
        let outcome = CommandOutcome {
            stdout: "web-1\nweb-2\n".to_string(),
            stderr: String::new(),
            exit_code: 0,
        };
        assert_eq!(outcome.stdout_lines(), vec!["web-1", "web-2"]);
    }

    #[tokio::test]
    async fn runs_a_real_command() {
        let outcome = runner().run(CommandSpec::new("echo").arg("hello")).await;
        assert!(outcome.success());
        assert_eq!(outcome.stdout.trim(), "hello");
    }

    #[tokio::test]
    async fn nonzero_exit_is_an_outcome_not_an_error() {
        let outcome = runner().run(CommandSpec::new("false")).await;
        assert!(!outcome.success());
        assert_eq!(outcome.exit_code, 1);
    }

    #[tokio::test]
    async fn unknown_program_degrades_to_failed_outcome() {
        let outcome = runner()
            .run(CommandSpec::new("logtap-no-such-program"))
            .await;
        assert!(!outcome.success());
        assert!(outcome.stderr.contains("logtap-no-such-program"));
    }

    #[tokio::test]
    async fn env_overlay_reaches_the_child() {
        let outcome = runner()
            .run(CommandSpec::new("printenv").arg("LOGTAP_TEST_VAR").env("LOGTAP_TEST_VAR", "present"))
            .await;
        assert!(outcome.success());
        assert_eq!(outcome.stdout.trim(), "present");
    }

    #[tokio::test]
    async fn slow_command_times_out() {
        let runner = ProcessRunner::new(Duration::from_millis(100));
        let outcome = runner.run(CommandSpec::new("sleep").arg("5")).await;
        assert!(!outcome.success());
        assert!(outcome.stderr.contains("timed out"));
    }
}
