//! # logtap-engine
//!
//! Bounded log retrieval across three heterogeneous backends: a
//! container runtime CLI (with a file-based fallback when the logging
//! driver blocks the primary command), an orchestrator CLI, and
//! path-addressed files on the local filesystem.
//!
//! This crate provides:
//!
//! - [`LogEngine`] — The facade dispatching requests to one source
//! - [`LogRequest`] / [`LogResult`] — Bounded request and normalized outcome
//! - [`Discovery`] — Identifier listing that distinguishes empty from down
//! - [`EngineConfig`] — Caller-injected paths, programs, and timeout
//! - [`CommandRunner`] / [`ProcessRunner`] — The process-spawning seam
//! - [`tail_file`](tail::tail_file) — Block-wise last-N-lines file reading
//!
//! Backend failures never propagate as errors: every fetch degrades to
//! a descriptive [`LogResult`] and every listing to
//! [`Discovery::Unavailable`], because the ultimate consumer is a human
//! reading a log pane.
//!
//! ## Example
//!
//! ```rust,no_run
//! use logtap_engine::{EngineConfig, LogEngine, LogRequest};
//!
//! # async fn example() -> Result<(), logtap_engine::EngineError> {
//! let engine = LogEngine::new(EngineConfig::new().with_runtime_program("podman"));
//!
//! let containers = engine.list_containers().await;
//! if let Some(name) = containers.names().first() {
//!     let result = engine.fetch(&LogRequest::container(name.as_str(), 200)).await?;
//!     for line in &result.lines {
//!         println!("{line}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod command;
pub mod config;
pub mod container;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod file;
pub mod orchestrator;
pub mod tail;
pub mod types;

#[cfg(test)]
mod testing;

// Re-export main types
pub use command::{CommandOutcome, CommandRunner, CommandSpec, ProcessRunner};
pub use config::EngineConfig;
pub use container::{ContainerLogSource, UNSUPPORTED_DRIVER_MARKER};
pub use discovery::ResourceDiscovery;
pub use engine::LogEngine;
pub use error::{EngineError, Result};
pub use file::FilesystemLogSource;
pub use orchestrator::OrchestratorLogSource;
pub use tail::{tail_file, FileTail};
pub use types::{
    clamp_tail, Backend, Discovery, LogRequest, LogResult, SourceRef, DEFAULT_TAIL, TAIL_MAX,
    TAIL_MIN,
};
