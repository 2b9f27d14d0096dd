//! Core value objects for log retrieval.
//!
//! This module provides:
//! - [`Backend`] — The three log sources a request can address
//! - [`LogRequest`] — A bounded retrieval request
//! - [`LogResult`] — The normalized outcome of a retrieval
//! - [`SourceRef`] — Echo of which backend/identifier produced a result
//! - [`Discovery`] — Listing outcome that keeps "empty" and "backend down" distinct

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Smallest accepted tail length.
pub const TAIL_MIN: u32 = 10;

/// Largest accepted tail length.
pub const TAIL_MAX: u32 = 5000;

/// Tail length used when a caller does not specify one.
pub const DEFAULT_TAIL: u32 = 500;

/// Clamps a requested tail length into `[TAIL_MIN, TAIL_MAX]`.
///
/// Applied before any external call is made, so a hostile or buggy
/// caller cannot trigger an unbounded read.
#[must_use]
pub const fn clamp_tail(requested: u32) -> u32 {
    if requested < TAIL_MIN {
        TAIL_MIN
    } else if requested > TAIL_MAX {
        TAIL_MAX
    } else {
        requested
    }
}

/// The log sources a request can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// The container runtime (docker/podman CLI).
    Container,
    /// The orchestrator (kubectl CLI).
    Orchestrator,
    /// A path-addressed file on the local filesystem.
    Filesystem,
}

impl Backend {
    /// Returns the string representation of this backend.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::Orchestrator => "orchestrator",
            Self::Filesystem => "filesystem",
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bounded request for the most recent lines of one log source.
///
/// `namespace` is present exactly when `backend` is
/// [`Backend::Orchestrator`]; the engine rejects requests that violate
/// this before contacting any backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRequest {
    /// Which source to retrieve from.
    pub backend: Backend,
    /// Container name, pod name, or file path depending on `backend`.
    pub identifier: String,
    /// Orchestrator namespace; required iff `backend` is `Orchestrator`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub namespace: Option<String>,
    /// How many trailing lines to return, clamped to `[TAIL_MIN, TAIL_MAX]`.
    pub tail_lines: u32,
}

impl LogRequest {
    /// Creates a request for a named container's logs.
    #[must_use]
    pub fn container(name: impl Into<String>, tail_lines: u32) -> Self {
        Self {
            backend: Backend::Container,
            identifier: name.into(),
            namespace: None,
            tail_lines,
        }
    }

    /// Creates a request for a pod's logs within a namespace.
    #[must_use]
    pub fn pod(namespace: impl Into<String>, name: impl Into<String>, tail_lines: u32) -> Self {
        Self {
            backend: Backend::Orchestrator,
            identifier: name.into(),
            namespace: Some(namespace.into()),
            tail_lines,
        }
    }

    /// Creates a request for the tail of a path-addressed file.
    #[must_use]
    pub fn file(path: impl Into<String>, tail_lines: u32) -> Self {
        Self {
            backend: Backend::Filesystem,
            identifier: path.into(),
            namespace: None,
            tail_lines,
        }
    }
}

/// Echo of which backend and identifier a result came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    /// The backend that produced the result.
    pub backend: Backend,
    /// The identifier that was addressed.
    pub identifier: String,
}

impl SourceRef {
    /// Creates a source reference.
    #[must_use]
    pub fn new(backend: Backend, identifier: impl Into<String>) -> Self {
        Self {
            backend,
            identifier: identifier.into(),
        }
    }
}

impl std::fmt::Display for SourceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.backend, self.identifier)
    }
}

/// The normalized outcome of one retrieval.
///
/// Failures are not a separate type: a retrieval that could not be
/// served carries a single descriptive line, because the ultimate
/// consumer is a human reading a log pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogResult {
    /// The retrieved lines, oldest first, at most `tail_lines` entries.
    pub lines: Vec<String>,
    /// Which backend/identifier produced this result.
    pub source: SourceRef,
    /// When the retrieval completed.
    pub retrieved_at: DateTime<Utc>,
    /// True when the source held fewer lines than were requested.
    pub truncated: bool,
}

impl LogResult {
    /// Creates a result from retrieved lines.
    #[must_use]
    pub fn new(source: SourceRef, lines: Vec<String>, truncated: bool) -> Self {
        Self {
            lines,
            source,
            retrieved_at: Utc::now(),
            truncated,
        }
    }

    /// Creates a descriptive failure result with a single line.
    #[must_use]
    pub fn failure(source: SourceRef, message: impl Into<String>) -> Self {
        Self {
            lines: vec![message.into()],
            source,
            retrieved_at: Utc::now(),
            truncated: false,
        }
    }

    /// Creates a result from command output lines, deriving `truncated`
    /// from the number of lines actually returned.
    #[must_use]
    pub fn from_lines(source: SourceRef, lines: Vec<String>, requested: u32) -> Self {
        let truncated = lines.len() < requested as usize;
        Self::new(source, lines, truncated)
    }
}

/// The outcome of listing addressable identifiers for one backend.
///
/// An unreachable backend is reported as [`Discovery::Unavailable`]
/// rather than an empty list, so callers can tell "nothing running"
/// from "backend down" while still defaulting to an empty list for
/// display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Discovery {
    /// The backend answered; the list may be empty.
    Available(Vec<String>),
    /// The backend could not be queried; carries the reason.
    Unavailable(String),
}

impl Discovery {
    /// Returns the discovered names, or an empty slice when the backend
    /// was unavailable.
    #[must_use]
    pub fn names(&self) -> &[String] {
        match self {
            Self::Available(names) => names,
            Self::Unavailable(_) => &[],
        }
    }

    /// Consumes the discovery, returning the names (empty when
    /// unavailable).
    #[must_use]
    pub fn into_names(self) -> Vec<String> {
        match self {
            Self::Available(names) => names,
            Self::Unavailable(_) => Vec::new(),
        }
    }

    /// Returns true when the backend answered.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// Returns the unavailability reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Available(_) => None,
            Self::Unavailable(reason) => Some(reason),
        }
    }
}
