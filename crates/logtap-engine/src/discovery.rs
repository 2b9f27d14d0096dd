//! Listing of addressable identifiers per backend.
//!
//! Discovery populates selection before a fetch and stays usable when a
//! backend is down: failures degrade to
//! [`Discovery::Unavailable`](crate::types::Discovery) instead of
//! propagating.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::warn;

use crate::command::{CommandRunner, CommandSpec};
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::types::Discovery;

/// Read-only listing of running containers, namespaces, and pods.
pub struct ResourceDiscovery {
    runtime_program: String,
    orchestrator_program: String,
    kubeconfig: Option<PathBuf>,
    runner: Arc<dyn CommandRunner>,
}

impl ResourceDiscovery {
    /// Creates a discovery component over the given runner.
    #[must_use]
    pub fn new(config: &EngineConfig, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runtime_program: config.runtime_program.clone(),
            orchestrator_program: config.orchestrator_program.clone(),
            kubeconfig: config.kubeconfig.clone(),
            runner,
        }
    }

    /// Lists the names of running containers.
    pub async fn list_containers(&self) -> Discovery {
        let spec = CommandSpec::new(&self.runtime_program).args(["ps", "--format", "{{.Names}}"]);
        let outcome = self.runner.run(spec).await;

        if !outcome.success() {
            let reason = outcome.error_text();
            warn!(reason = %reason, "container listing unavailable");
            return Discovery::Unavailable(reason);
        }

        Discovery::Available(
            outcome
                .stdout
                .lines()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Lists orchestrator namespace names.
    pub async fn list_namespaces(&self) -> Discovery {
        let spec = self
            .orchestrator_spec()
            .args(["get", "ns", "-o", "jsonpath={.items[*].metadata.name}"]);
        let outcome = self.runner.run(spec).await;

        if !outcome.success() {
            let reason = outcome.error_text();
            warn!(reason = %reason, "namespace listing unavailable");
            return Discovery::Unavailable(reason);
        }

        Discovery::Available(split_names(&outcome.stdout))
    }

    /// Lists pod names within `namespace`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyNamespace`] when `namespace` is empty;
    /// backend failures degrade to [`Discovery::Unavailable`] instead.
    pub async fn list_pods(&self, namespace: &str) -> Result<Discovery> {
        if namespace.is_empty() {
            return Err(EngineError::EmptyNamespace);
        }

        let spec = self.orchestrator_spec().args([
            "get",
            "pods",
            "-n",
            namespace,
            "-o",
            "jsonpath={.items[*].metadata.name}",
        ]);
        let outcome = self.runner.run(spec).await;

        if !outcome.success() {
            let reason = outcome.error_text();
            warn!(namespace = %namespace, reason = %reason, "pod listing unavailable");
            return Ok(Discovery::Unavailable(reason));
        }

        Ok(Discovery::Available(split_names(&outcome.stdout)))
    }

    fn orchestrator_spec(&self) -> CommandSpec {
        let spec = CommandSpec::new(&self.orchestrator_program);
        match &self.kubeconfig {
            Some(path) => spec.env("KUBECONFIG", path.display().to_string()),
            None => spec,
        }
    }
}

/// Splits jsonpath output: names separated by whitespace.
fn split_names(stdout: &str) -> Vec<String> {
    stdout.split_whitespace().map(str::to_string).collect()
}
