//! Engine configuration.
//!
//! Every path and program name the engine touches is injected here by
//! the caller at construction time; nothing is hard-coded at module
//! level.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Where the container runtime keeps per-container JSON log files.
const DEFAULT_LOG_ROOT: &str = "/var/lib/docker/containers";

/// Bounded wait for any single external command.
const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(15);

/// Configuration for a [`LogEngine`](crate::engine::LogEngine).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Container runtime CLI to invoke ("docker" or "podman").
    pub runtime_program: String,
    /// Directory holding `<id>/<id>-json.log` files for the fallback path.
    pub runtime_log_root: PathBuf,
    /// Orchestrator CLI to invoke.
    pub orchestrator_program: String,
    /// Connection config passed to the orchestrator CLI as a
    /// `KUBECONFIG` environment overlay, when set.
    pub kubeconfig: Option<PathBuf>,
    /// Upper bound on how long one external command may run.
    pub command_timeout: Duration,
    /// Named shortcuts for commonly tailed files.
    pub file_targets: HashMap<String, PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let mut file_targets = HashMap::new();
        file_targets.insert("syslog".to_string(), PathBuf::from("/var/log/syslog"));
        file_targets.insert(
            "nginx-access".to_string(),
            PathBuf::from("/var/log/nginx/access.log"),
        );
        file_targets.insert(
            "nginx-error".to_string(),
            PathBuf::from("/var/log/nginx/error.log"),
        );

        Self {
            runtime_program: "docker".to_string(),
            runtime_log_root: PathBuf::from(DEFAULT_LOG_ROOT),
            orchestrator_program: "kubectl".to_string(),
            kubeconfig: None,
            command_timeout: DEFAULT_COMMAND_TIMEOUT,
            file_targets,
        }
    }
}

impl EngineConfig {
    /// Creates a config with default programs and paths.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the container runtime CLI.
    #[must_use]
    pub fn with_runtime_program(mut self, program: impl Into<String>) -> Self {
        self.runtime_program = program.into();
        self
    }

    /// Sets the runtime's per-container log directory.
    #[must_use]
    pub fn with_runtime_log_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.runtime_log_root = root.into();
        self
    }

    /// Sets the orchestrator CLI.
    #[must_use]
    pub fn with_orchestrator_program(mut self, program: impl Into<String>) -> Self {
        self.orchestrator_program = program.into();
        self
    }

    /// Sets the orchestrator connection config path.
    #[must_use]
    pub fn with_kubeconfig(mut self, path: impl Into<PathBuf>) -> Self {
        self.kubeconfig = Some(path.into());
        self
    }

    /// Sets the bounded wait for external commands.
    #[must_use]
    pub const fn with_command_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = timeout;
        self
    }

    /// Adds or replaces a named file target.
    #[must_use]
    pub fn with_file_target(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.file_targets.insert(name.into(), path.into());
        self
    }

    /// Resolves a named file target to its configured path.
    #[must_use]
    pub fn resolve_target(&self, name: &str) -> Option<&Path> {
        self.file_targets.get(name).map(PathBuf::as_path)
    }
}
