//! Command execution against the retrieval engine.

use std::io::Write;

use logtap_engine::{LogEngine, LogRequest};
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::error::CliError;
use crate::output::OutputFormat;

/// Builds an engine from the CLI flags and executes the subcommand.
///
/// # Errors
///
/// Returns an error for caller contract violations or output failures;
/// degraded retrievals are printed as their descriptive results.
pub async fn execute<W: Write>(cli: &Cli, writer: &mut W) -> Result<(), CliError> {
    debug!(command = ?cli.command, "executing");
    let engine = LogEngine::new(cli.engine_config());
    let output = OutputFormat::new(cli.format);
    run_command(&engine, &cli.command, &output, writer).await
}

/// Executes one subcommand against an already constructed engine.
///
/// # Errors
///
/// Returns an error for caller contract violations or output failures.
pub async fn run_command<W: Write>(
    engine: &LogEngine,
    command: &Commands,
    output: &OutputFormat,
    writer: &mut W,
) -> Result<(), CliError> {
    match command {
        Commands::Containers => {
            let discovery = engine.list_containers().await;
            output.write_discovery(writer, &discovery)
        }
        Commands::Namespaces => {
            let discovery = engine.list_namespaces().await;
            output.write_discovery(writer, &discovery)
        }
        Commands::Pods { namespace } => {
            let discovery = engine.list_pods(namespace).await?;
            output.write_discovery(writer, &discovery)
        }
        Commands::Container { name, tail } => {
            let result = engine
                .fetch(&LogRequest::container(name.as_str(), *tail))
                .await?;
            output.write_result(writer, &result)
        }
        Commands::Pod { name, namespace, tail } => {
            let result = engine
                .fetch(&LogRequest::pod(namespace.as_str(), name.as_str(), *tail))
                .await?;
            output.write_result(writer, &result)
        }
        Commands::File { path, tail } => {
            let path = resolve_file_path(engine, path);
            let result = engine.fetch(&LogRequest::file(path, *tail)).await?;
            output.write_result(writer, &result)
        }
    }
}

/// Maps a named target to its configured path; anything else is taken
/// as a literal path.
fn resolve_file_path(engine: &LogEngine, arg: &str) -> String {
    engine
        .resolve_target(arg)
        .map_or_else(|| arg.to_string(), |path| path.display().to_string())
}
