//! Path-addressed file log retrieval.
//!
//! A thin pass-through to the tail module. No path containment is
//! performed here: the trust boundary is the account running the
//! engine, a deliberate scope decision recorded in DESIGN.md.

use std::path::Path;

use crate::tail::tail_file;
use crate::types::{Backend, LogResult, SourceRef};

/// Retrieves the tail of arbitrary path-addressed log files.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemLogSource;

impl FilesystemLogSource {
    /// Creates a filesystem source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Fetches the last `tail_lines` lines of the file at `path`.
    ///
    /// Never fails: read errors come back as descriptive results naming
    /// the path.
    #[must_use]
    pub fn fetch(&self, path: &Path, tail_lines: u32) -> LogResult {
        let source = SourceRef::new(Backend::Filesystem, path.display().to_string());

        match tail_file(path, tail_lines as usize) {
            Ok(tail) => LogResult::new(source, tail.lines, tail.truncated),
            Err(err) => LogResult::failure(
                source,
                format!("failed to read log file {}: {err}", path.display()),
            ),
        }
    }
}
