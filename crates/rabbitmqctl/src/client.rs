//! The `rabbitmqctl` client.
//!
//! Each call runs the tool once, synchronously. There is no timeout and no
//! retry here; a hung `rabbitmqctl` blocks the caller, and retry policy
//! belongs to whoever acts on the returned error kind.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::classify::{FailureClassifier, PatternClassifier};
use crate::command::{ProcessInvoker, SystemInvoker};
use crate::config::CtlConfig;
use crate::error::{StatusError, StopAppError};
use crate::status::RabbitMQCtlStatus;

/// Node flag understood by every `rabbitmqctl` subcommand.
const NODE_FLAG: &str = "-n";

/// Client for one `rabbitmqctl` executable.
///
/// The invoker and classifier are type parameters so tests can swap in
/// fakes; production code uses the defaults via [`RabbitMQCtl::new`].
#[derive(Debug, Clone)]
pub struct RabbitMQCtl<I = SystemInvoker, C = PatternClassifier> {
    path: PathBuf,
    invoker: I,
    classifier: C,
}

impl RabbitMQCtl {
    /// Create a client for the executable at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            invoker: SystemInvoker,
            classifier: PatternClassifier,
        }
    }

    /// Create a client from configuration.
    #[must_use]
    pub fn from_config(config: &CtlConfig) -> Self {
        Self::new(config.rabbitmqctl_path.clone())
    }
}

impl<I, C> RabbitMQCtl<I, C>
where
    I: ProcessInvoker,
    C: FailureClassifier,
{
    /// Replace the process backend.
    #[must_use]
    pub fn with_invoker<J: ProcessInvoker>(self, invoker: J) -> RabbitMQCtl<J, C> {
        RabbitMQCtl {
            path: self.path,
            invoker,
            classifier: self.classifier,
        }
    }

    /// Replace the failure classifier.
    #[must_use]
    pub fn with_classifier<D: FailureClassifier>(self, classifier: D) -> RabbitMQCtl<I, D> {
        RabbitMQCtl {
            path: self.path,
            invoker: self.invoker,
            classifier,
        }
    }

    /// Path of the executable this client runs.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stop the RabbitMQ application on `node`, leaving the Erlang VM up.
    ///
    /// Only the exit status is reported on failure; the output is not
    /// classified.
    ///
    /// # Errors
    ///
    /// Returns [`StopAppError::Failed`] on a nonzero exit and
    /// [`StopAppError::Invoke`] if the executable could not be started.
    pub fn stop_app(&self, node: &str) -> Result<(), StopAppError> {
        let output = self
            .invoker
            .run(&self.path, &["stop_app", NODE_FLAG, node])?;

        if !output.success() {
            warn!(node, exit_code = output.exit_code, "stop_app failed");
            return Err(StopAppError::Failed {
                exit_code: output.exit_code,
            });
        }

        debug!(node, "stopped rabbitmq app");
        Ok(())
    }

    /// Query the status of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::Classified`] on a nonzero exit, with the kind
    /// derived from the tool's output, and [`StatusError::Invoke`] if the
    /// executable could not be started.
    pub fn status(&self, node: &str) -> Result<RabbitMQCtlStatus, StatusError> {
        let output = self.invoker.run(&self.path, &["status", NODE_FLAG, node])?;

        if !output.success() {
            let err = self.classifier.classify(&output.combined_lossy());
            warn!(
                node,
                exit_code = output.exit_code,
                kind = %err.kind(),
                "status query failed"
            );
            return Err(err.into());
        }

        Ok(RabbitMQCtlStatus::new(output.combined_lossy()))
    }
}
