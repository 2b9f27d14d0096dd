//! Container log retrieval with a file-based fallback.
//!
//! Some logging drivers disable the runtime's `logs` command while
//! still writing JSON-lines files under the runtime's per-container
//! directory. When the primary command is unusable this source resolves
//! the container's immutable id and tails that file directly, so those
//! containers' logs stay reachable.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::command::{CommandRunner, CommandSpec};
use crate::config::EngineConfig;
use crate::tail::tail_file;
use crate::types::{Backend, LogResult, SourceRef};

/// Marker the runtime prints when the configured logging driver does
/// not support the `logs` command.
pub const UNSUPPORTED_DRIVER_MARKER: &str = "configured logging driver does not support reading";

/// Retrieves logs for named containers via the runtime CLI, falling
/// back to the on-disk log file when the primary command is unusable.
pub struct ContainerLogSource {
    program: String,
    log_root: PathBuf,
    runner: Arc<dyn CommandRunner>,
}

impl ContainerLogSource {
    /// Creates a container source over the given runner.
    #[must_use]
    pub fn new(config: &EngineConfig, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            program: config.runtime_program.clone(),
            log_root: config.runtime_log_root.clone(),
            runner,
        }
    }

    /// Fetches the last `tail_lines` lines for `name`.
    ///
    /// Never fails: backend problems come back as descriptive results.
    pub async fn fetch(&self, name: &str, tail_lines: u32) -> LogResult {
        let source = SourceRef::new(Backend::Container, name);

        let spec = CommandSpec::new(&self.program)
            .args(["logs", "--tail"])
            .arg(tail_lines.to_string())
            .arg(name);
        let outcome = self.runner.run(spec).await;

        let driver_unreadable = outcome.stdout.contains(UNSUPPORTED_DRIVER_MARKER)
            || outcome.stderr.contains(UNSUPPORTED_DRIVER_MARKER);

        if outcome.success() && !driver_unreadable {
            return LogResult::from_lines(source, outcome.stdout_lines(), tail_lines);
        }

        debug!(
            container = %name,
            driver_unreadable,
            exit_code = outcome.exit_code,
            "primary log command unusable, trying log file fallback"
        );
        self.fetch_from_file(source, name, tail_lines).await
    }

    /// Resolves the container id and tails its JSON-lines log file.
    async fn fetch_from_file(&self, source: SourceRef, name: &str, tail_lines: u32) -> LogResult {
        let spec = CommandSpec::new(&self.program)
            .args(["inspect", "--format", "{{.Id}}"])
            .arg(name);
        let outcome = self.runner.run(spec).await;

        if !outcome.success() {
            return LogResult::failure(
                source,
                format!(
                    "could not resolve container id for '{name}': {}",
                    outcome.error_text()
                ),
            );
        }

        let id = outcome.stdout.trim();
        if id.is_empty() {
            return LogResult::failure(
                source,
                format!("could not resolve container id for '{name}'"),
            );
        }

        let path = self.log_root.join(id).join(format!("{id}-json.log"));
        if !path.exists() {
            warn!(container = %name, path = %path.display(), "fallback log file missing");
            return LogResult::failure(source, format!("log file not found at {}", path.display()));
        }

        match tail_file(&path, tail_lines as usize) {
            Ok(tail) => LogResult::new(source, tail.lines, tail.truncated),
            Err(err) => LogResult::failure(
                source,
                format!("failed to read log file {}: {err}", path.display()),
            ),
        }
    }
}
