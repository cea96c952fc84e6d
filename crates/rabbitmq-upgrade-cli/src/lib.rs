//! # rabbitmq-upgrade-cli
//!
//! Command-line front end for the [`rabbitmqctl`] client, used by upgrade
//! scripts to stop RabbitMQ on a node and to read the node's RabbitMQ and
//! Erlang versions.
//!
//! Status failures exit with a distinct code per failure kind (see
//! [`error`]) so shell callers can branch without parsing messages.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{Cli, Commands, Format, NodeArgs};
pub use error::CliError;
pub use output::OutputFormat;
