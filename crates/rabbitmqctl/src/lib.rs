//! Client for the `rabbitmqctl` command-line tool.
//!
//! Used while preparing a RabbitMQ cluster for an upgrade: stop the RabbitMQ
//! application on a node, and ask a node which RabbitMQ and Erlang versions
//! it runs.
//!
//! # Failure handling
//!
//! `stop_app` reports a bare exit status. `status` inspects the tool's
//! diagnostics and tells apart a host that is down, an epmd that is down, and
//! a node that is simply not running, so the caller can decide whether to
//! retry or abort:
//!
//! | [`FailureKind`]        | Message                                     |
//! |------------------------|---------------------------------------------|
//! | `UnreachableHost`      | Unable to reach epmd and host seems down    |
//! | `UnreachableEpmd`      | Unable to reach epmd but host seems up      |
//! | `StoppedRabbitNode`    | No rabbit node running                      |
//! | `Unknown`              | Unknown error                               |
//!
//! # Example
//!
//! ```rust,no_run
//! use rabbitmqctl::{FailureKind, RabbitMQCtl, StatusError};
//!
//! let ctl = RabbitMQCtl::new("/usr/sbin/rabbitmqctl");
//! match ctl.status("rabbit@node-0") {
//!     Ok(status) => {
//!         println!("rabbit: {:?}", status.rabbitmq_version());
//!         println!("erlang: {:?}", status.erlang_version());
//!     }
//!     Err(StatusError::Classified(e)) if e.kind() == FailureKind::StoppedRabbitNode => {
//!         println!("node is down, nothing to stop");
//!     }
//!     Err(e) => return Err(e.into()),
//! }
//! ctl.stop_app("rabbit@node-0")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod classify;
pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod status;

pub use classify::{ClassifiedError, FailureClassifier, FailureKind, PatternClassifier};
pub use client::RabbitMQCtl;
pub use command::{CommandOutput, ProcessInvoker, SystemInvoker};
pub use config::CtlConfig;
pub use error::{ConfigError, InvokeError, StatusError, StopAppError, VersionError};
pub use status::RabbitMQCtlStatus;
