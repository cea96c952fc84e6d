//! CLI command implementations.
//!
//! Each submodule implements a specific CLI command:
//! - [`status`] - RabbitMQ and Erlang versions of a node
//! - [`stop_app`] - Stop the RabbitMQ application on a node

pub mod status;
pub mod stop_app;

pub use status::StatusCommand;
pub use stop_app::StopAppCommand;
