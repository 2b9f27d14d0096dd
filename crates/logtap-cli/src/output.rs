//! Output formatting for CLI commands.
//!
//! Text output keeps retrieved lines verbatim: the engine already
//! encodes failures as readable lines, so there is nothing to dress up.
//! JSON output serializes the engine's value objects for scripting.

use std::io::Write;

use logtap_engine::{Discovery, LogResult};

use crate::cli::Format;
use crate::error::CliError;

/// Output formatter handling both text and JSON.
#[derive(Debug, Clone)]
pub struct OutputFormat {
    format: Format,
}

impl OutputFormat {
    /// Creates a new output formatter.
    #[must_use]
    pub const fn new(format: Format) -> Self {
        Self { format }
    }

    /// Check if JSON format is selected.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self.format, Format::Json)
    }

    /// Writes a retrieval result.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_result<W: Write>(&self, writer: &mut W, result: &LogResult) -> Result<(), CliError> {
        match self.format {
            Format::Json => write_json(writer, result),
            Format::Text => {
                for line in &result.lines {
                    writeln!(writer, "{line}")?;
                }
                Ok(())
            }
        }
    }

    /// Writes a discovery listing.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_discovery<W: Write>(
        &self,
        writer: &mut W,
        discovery: &Discovery,
    ) -> Result<(), CliError> {
        match self.format {
            Format::Json => write_json(writer, discovery),
            Format::Text => {
                match discovery {
                    Discovery::Available(names) => {
                        for name in names {
                            writeln!(writer, "{name}")?;
                        }
                    }
                    Discovery::Unavailable(reason) => {
                        writeln!(writer, "unavailable: {reason}")?;
                    }
                }
                Ok(())
            }
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::new(Format::Text)
    }
}

fn write_json<W: Write, T: serde::Serialize>(writer: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *writer, value)
        .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;
    writeln!(writer)?;
    Ok(())
}
