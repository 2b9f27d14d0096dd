//! Command-line argument parsing with clap.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use logtap_engine::{EngineConfig, DEFAULT_TAIL};

/// logtap - bounded log retrieval for containers, pods, and files.
#[derive(Parser, Debug, Clone)]
#[command(name = "logtap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Container runtime CLI to invoke.
    #[arg(long, env = "LOGTAP_RUNTIME", default_value = "docker")]
    pub runtime: String,

    /// Directory holding the runtime's per-container log files.
    #[arg(long, env = "LOGTAP_LOG_ROOT", default_value = "/var/lib/docker/containers")]
    pub log_root: PathBuf,

    /// Orchestrator CLI to invoke.
    #[arg(long, env = "LOGTAP_KUBECTL", default_value = "kubectl")]
    pub kubectl: String,

    /// Orchestrator connection config, passed to the CLI as KUBECONFIG.
    #[arg(long, env = "KUBECONFIG")]
    pub kubeconfig: Option<PathBuf>,

    /// Upper bound in seconds for any single external command.
    #[arg(long, default_value_t = 15)]
    pub timeout_secs: u64,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Builds the engine configuration from the global flags.
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        let mut config = EngineConfig::new()
            .with_runtime_program(&self.runtime)
            .with_runtime_log_root(&self.log_root)
            .with_orchestrator_program(&self.kubectl)
            .with_command_timeout(Duration::from_secs(self.timeout_secs));
        if let Some(path) = &self.kubeconfig {
            config = config.with_kubeconfig(path);
        }
        config
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Format {
    /// Plain lines for human reading.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List running containers.
    Containers,

    /// List orchestrator namespaces.
    Namespaces,

    /// List pods in a namespace.
    Pods {
        /// Namespace to list pods in.
        namespace: String,
    },

    /// Fetch logs for a named container.
    Container {
        /// Container name.
        name: String,

        /// How many trailing lines to fetch.
        #[arg(short = 't', long, default_value_t = DEFAULT_TAIL)]
        tail: u32,
    },

    /// Fetch logs for a pod.
    Pod {
        /// Pod name.
        name: String,

        /// Namespace the pod lives in.
        #[arg(short = 'n', long, default_value = "default")]
        namespace: String,

        /// How many trailing lines to fetch.
        #[arg(short = 't', long, default_value_t = DEFAULT_TAIL)]
        tail: u32,
    },

    /// Tail a log file by path or named target (e.g. syslog).
    File {
        /// File path, or a configured target name like `syslog`.
        path: String,

        /// How many trailing lines to fetch.
        #[arg(short = 't', long, default_value_t = DEFAULT_TAIL)]
        tail: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_help_does_not_panic() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_containers_command() {
        let cli = Cli::parse_from(["logtap", "containers"]);
        assert!(matches!(cli.command, Commands::Containers));
        assert_eq!(cli.runtime, "docker");
        assert_eq!(cli.format, Format::Text);
    }

    #[test]
    fn parse_namespaces_command() {
        let cli = Cli::parse_from(["logtap", "namespaces"]);
        assert!(matches!(cli.command, Commands::Namespaces));
    }

    #[test]
    fn parse_pods_command() {
        let cli = Cli::parse_from(["logtap", "pods", "staging"]);
        match cli.command {
            Commands::Pods { namespace } => assert_eq!(namespace, "staging"),
            _ => panic!("expected pods command"),
        }
    }

    #[test]
    fn parse_container_command_with_defaults() {
        let cli = Cli::parse_from(["logtap", "container", "web-1"]);
        match cli.command {
            Commands::Container { name, tail } => {
                assert_eq!(name, "web-1");
                assert_eq!(tail, DEFAULT_TAIL);
            }
            _ => panic!("expected container command"),
        }
    }

    #[test]
    fn parse_container_command_with_tail() {
        let cli = Cli::parse_from(["logtap", "container", "web-1", "--tail", "50"]);
        match cli.command {
            Commands::Container { tail, .. } => assert_eq!(tail, 50),
            _ => panic!("expected container command"),
        }
    }

    #[test]
    fn parse_pod_command_default_namespace() {
        let cli = Cli::parse_from(["logtap", "pod", "api-1"]);
        match cli.command {
            Commands::Pod { name, namespace, tail } => {
                assert_eq!(name, "api-1");
                assert_eq!(namespace, "default");
                assert_eq!(tail, DEFAULT_TAIL);
            }
            _ => panic!("expected pod command"),
        }
    }

    #[test]
    fn parse_pod_command_with_namespace_and_tail() {
        let cli = Cli::parse_from(["logtap", "pod", "api-1", "-n", "staging", "-t", "100"]);
        match cli.command {
            Commands::Pod { namespace, tail, .. } => {
                assert_eq!(namespace, "staging");
                assert_eq!(tail, 100);
            }
            _ => panic!("expected pod command"),
        }
    }

    #[test]
    fn parse_file_command() {
        let cli = Cli::parse_from(["logtap", "file", "/var/log/syslog", "-t", "25"]);
        match cli.command {
            Commands::File { path, tail } => {
                assert_eq!(path, "/var/log/syslog");
                assert_eq!(tail, 25);
            }
            _ => panic!("expected file command"),
        }
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::parse_from(["logtap", "--format", "json", "containers"]);
        assert_eq!(cli.format, Format::Json);
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from([
            "logtap",
            "--runtime",
            "podman",
            "--log-root",
            "/var/lib/containers",
            "--kubectl",
            "/opt/bin/kubectl",
            "--kubeconfig",
            "/home/op/.kube/config",
            "--timeout-secs",
            "3",
            "containers",
        ]);
        assert_eq!(cli.runtime, "podman");
        assert_eq!(cli.log_root, PathBuf::from("/var/lib/containers"));
        assert_eq!(cli.kubectl, "/opt/bin/kubectl");
        assert_eq!(cli.kubeconfig, Some(PathBuf::from("/home/op/.kube/config")));
        assert_eq!(cli.timeout_secs, 3);
    }

    #[test]
    fn engine_config_reflects_flags() {
        let cli = Cli::parse_from([
            "logtap",
            "--runtime",
            "podman",
            "--kubeconfig",
            "/home/op/.kube/config",
            "--timeout-secs",
            "3",
            "containers",
        ]);
        let config = cli.engine_config();
        assert_eq!(config.runtime_program, "podman");
        assert_eq!(config.kubeconfig, Some(PathBuf::from("/home/op/.kube/config")));
        assert_eq!(config.command_timeout, Duration::from_secs(3));
    }

    #[test]
    fn engine_config_without_kubeconfig() {
        let cli = Cli::parse_from(["logtap", "containers"]);
        // The flag falls back to the KUBECONFIG env var, so only check
        // the mapping when the variable is absent from the test env.
        if std::env::var_os("KUBECONFIG").is_none() {
            assert!(cli.engine_config().kubeconfig.is_none());
        }
    }
}
