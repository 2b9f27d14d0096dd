//! Pod log retrieval via the orchestrator CLI.
//!
//! No fallback path exists here: orchestrators do not expose a reliable
//! raw-file escape hatch, so a failed command surfaces its captured
//! error text as the result.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::command::{CommandRunner, CommandSpec};
use crate::config::EngineConfig;
use crate::types::{Backend, LogResult, SourceRef};

/// Retrieves logs for pods scoped to a namespace.
pub struct OrchestratorLogSource {
    program: String,
    kubeconfig: Option<PathBuf>,
    runner: Arc<dyn CommandRunner>,
}

impl OrchestratorLogSource {
    /// Creates an orchestrator source over the given runner.
    #[must_use]
    pub fn new(config: &EngineConfig, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            program: config.orchestrator_program.clone(),
            kubeconfig: config.kubeconfig.clone(),
            runner,
        }
    }

    /// Fetches the last `tail_lines` lines for `pod` in `namespace`.
    ///
    /// Never fails: backend problems come back as descriptive results.
    pub async fn fetch(&self, namespace: &str, pod: &str, tail_lines: u32) -> LogResult {
        let source = SourceRef::new(Backend::Orchestrator, format!("{namespace}/{pod}"));

        let mut spec = CommandSpec::new(&self.program)
            .args(["logs", "--tail"])
            .arg(tail_lines.to_string())
            .arg(pod)
            .args(["-n", namespace]);
        if let Some(path) = &self.kubeconfig {
            spec = spec.env("KUBECONFIG", path.display().to_string());
        }

        let outcome = self.runner.run(spec).await;
        if !outcome.success() {
            debug!(namespace = %namespace, pod = %pod, "pod log command failed");
            return LogResult::failure(source, outcome.error_text());
        }

        LogResult::from_lines(source, outcome.stdout_lines(), tail_lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeRunner;

    fn source(runner: Arc<FakeRunner>) -> OrchestratorLogSource {
        let config = EngineConfig::new().with_kubeconfig("/home/op/.kube/config");
        OrchestratorLogSource::new(&config, runner)
    }

    #[tokio::test]
    async fn fetches_pod_logs() {
        let runner = FakeRunner::new();
        runner.push_success("ready\nserving\n");

        let result = source(Arc::clone(&runner)).fetch("staging", "api-7f9c", 200).await;

        assert_eq!(result.lines, vec!["ready", "serving"]);
        assert!(result.truncated);
        assert_eq!(result.source.to_string(), "orchestrator/staging/api-7f9c");

        let calls = runner.calls();
        assert_eq!(calls[0].program, "kubectl");
        assert_eq!(
            calls[0].args,
            vec!["logs", "--tail", "200", "api-7f9c", "-n", "staging"]
        );
        assert_eq!(
            calls[0].env,
            vec![("KUBECONFIG".to_string(), "/home/op/.kube/config".to_string())]
        );
    }

    #[tokio::test]
    async fn failed_command_surfaces_captured_stderr() {
        let runner = FakeRunner::new();
        runner.push_failure("error: pods \"api-9\" not found", 1);

        let result = source(runner).fetch("staging", "api-9", 100).await;

        assert_eq!(result.lines, vec!["error: pods \"api-9\" not found"]);
        assert!(!result.truncated);
    }

    #[tokio::test]
    async fn silent_failure_gets_a_synthesized_message() {
        let runner = FakeRunner::new();
        runner.push_failure("", 7);

        let result = source(runner).fetch("default", "api-1", 100).await;

        assert_eq!(result.lines, vec!["command exited with status 7"]);
    }

    #[tokio::test]
    async fn full_window_is_not_truncated() {
        let runner = FakeRunner::new();
        runner.push_success("a\nb\nc\n");

        let result = source(runner).fetch("default", "api-1", 3).await;

        assert_eq!(result.lines.len(), 3);
        assert!(!result.truncated);
    }
}
