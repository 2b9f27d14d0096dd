//! # logtap-cli
//!
//! Operator command-line interface over
//! [`logtap_engine`](logtap_engine): list running containers,
//! namespaces, and pods, and fetch bounded log tails from any of the
//! three backends. All retrieval logic lives in the engine; this crate
//! only parses arguments, builds the engine configuration, and formats
//! output.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{Cli, Commands, Format};
pub use error::CliError;
pub use output::OutputFormat;
