//! `rabbitmq-upgrade-preparation` binary entrypoint.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rabbitmq_upgrade_cli::cli::{Cli, Commands};
use rabbitmq_upgrade_cli::commands::{StatusCommand, StopAppCommand};
use rabbitmq_upgrade_cli::output::OutputFormat;
use rabbitmq_upgrade_cli::CliError;
use rabbitmqctl::RabbitMQCtl;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = cli.ctl_config()?;
    let ctl = RabbitMQCtl::from_config(&config);
    let format = OutputFormat::new(cli.format);
    let mut stdout = io::stdout().lock();

    match &cli.command {
        Commands::Status(args) => {
            StatusCommand::new(&ctl).execute(&mut stdout, &format, &args.node)?;
        }
        Commands::StopApp(args) => {
            StopAppCommand::new(&ctl).execute(&mut stdout, &format, &args.node)?;
        }
    }

    Ok(())
}
