//! The retrieval facade.
//!
//! Validates a request, clamps its tail bound, and dispatches to
//! exactly one source. Sources already encode backend failures as
//! descriptive results, so the facade returns them unchanged; the only
//! errors it produces are synchronous precondition violations.

use std::path::Path;
use std::sync::Arc;

use crate::command::{CommandRunner, ProcessRunner};
use crate::config::EngineConfig;
use crate::container::ContainerLogSource;
use crate::discovery::ResourceDiscovery;
use crate::error::{EngineError, Result};
use crate::file::FilesystemLogSource;
use crate::orchestrator::OrchestratorLogSource;
use crate::types::{clamp_tail, Backend, Discovery, LogRequest, LogResult};

/// Uniform access to container, orchestrator, and filesystem logs.
///
/// Each call is self-contained: no caching, no background tasks, no
/// state shared between calls. Concurrent use needs no locking.
pub struct LogEngine {
    config: EngineConfig,
    containers: ContainerLogSource,
    orchestrator: OrchestratorLogSource,
    files: FilesystemLogSource,
    discovery: ResourceDiscovery,
}

impl LogEngine {
    /// Creates an engine that spawns real external commands.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let runner = Arc::new(ProcessRunner::new(config.command_timeout));
        Self::with_runner(config, runner)
    }

    /// Creates an engine over an injected command runner.
    #[must_use]
    pub fn with_runner(config: EngineConfig, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            containers: ContainerLogSource::new(&config, Arc::clone(&runner)),
            orchestrator: OrchestratorLogSource::new(&config, Arc::clone(&runner)),
            files: FilesystemLogSource::new(),
            discovery: ResourceDiscovery::new(&config, runner),
            config,
        }
    }

    /// Fetches the trailing log window described by `request`.
    ///
    /// Exactly one source is invoked; its result is returned unchanged.
    /// Backend failures are descriptive results, not errors.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] only for requests violating the
    /// caller contract: an empty identifier, a missing or empty
    /// namespace on orchestrator requests, or a namespace on any other
    /// request.
    pub async fn fetch(&self, request: &LogRequest) -> Result<LogResult> {
        if request.identifier.is_empty() {
            return Err(EngineError::EmptyIdentifier);
        }

        let tail_lines = clamp_tail(request.tail_lines);

        match request.backend {
            Backend::Container => {
                if request.namespace.is_some() {
                    return Err(EngineError::UnexpectedNamespace);
                }
                Ok(self.containers.fetch(&request.identifier, tail_lines).await)
            }
            Backend::Orchestrator => {
                let namespace = request
                    .namespace
                    .as_deref()
                    .ok_or(EngineError::MissingNamespace)?;
                if namespace.is_empty() {
                    return Err(EngineError::EmptyNamespace);
                }
                Ok(self
                    .orchestrator
                    .fetch(namespace, &request.identifier, tail_lines)
                    .await)
            }
            Backend::Filesystem => {
                if request.namespace.is_some() {
                    return Err(EngineError::UnexpectedNamespace);
                }
                Ok(self.files.fetch(Path::new(&request.identifier), tail_lines))
            }
        }
    }

    /// Lists the names of running containers.
    pub async fn list_containers(&self) -> Discovery {
        self.discovery.list_containers().await
    }

    /// Lists orchestrator namespace names.
    pub async fn list_namespaces(&self) -> Discovery {
        self.discovery.list_namespaces().await
    }

    /// Lists pod names within `namespace`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyNamespace`] when `namespace` is empty.
    pub async fn list_pods(&self, namespace: &str) -> Result<Discovery> {
        self.discovery.list_pods(namespace).await
    }

    /// Resolves a named file target to its configured path.
    #[must_use]
    pub fn resolve_target(&self, name: &str) -> Option<&Path> {
        self.config.resolve_target(name)
    }

    /// Returns the engine's configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }
}
