//! Command-line argument parsing with clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rabbitmqctl::CtlConfig;

use crate::error::CliError;

/// Stop RabbitMQ and inspect node versions ahead of an upgrade.
#[derive(Parser, Debug, Clone)]
#[command(name = "rabbitmq-upgrade-preparation")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// TOML config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the rabbitmqctl executable. Overrides the config file.
    #[arg(long, env = "RABBITMQCTL_PATH")]
    pub rabbitmqctl: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Build the client configuration from the flags and config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded or the resulting
    /// configuration is invalid.
    pub fn ctl_config(&self) -> Result<CtlConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => CtlConfig::from_file(path)?,
            None => CtlConfig::default(),
        };

        if let Some(path) = &self.rabbitmqctl {
            config.rabbitmqctl_path.clone_from(path);
            config.validate()?;
        }

        Ok(config)
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output for scripting.
    Json,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the RabbitMQ and Erlang versions of a node.
    Status(NodeArgs),

    /// Stop the RabbitMQ application on a node.
    StopApp(NodeArgs),
}

/// Arguments naming the target node.
#[derive(Args, Debug, Clone)]
pub struct NodeArgs {
    /// Node name, e.g. `rabbit@host`. Passed to rabbitmqctl unchanged.
    #[arg(short, long)]
    pub node: String,
}
