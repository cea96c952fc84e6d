//! Node status command implementation.

use std::io::Write;

use rabbitmqctl::{FailureClassifier, ProcessInvoker, RabbitMQCtl};
use tracing::warn;

use crate::error::CliError;
use crate::output::{NodeStatusReport, OutputFormat};

/// Status command executor.
pub struct StatusCommand<'a, I, C> {
    ctl: &'a RabbitMQCtl<I, C>,
}

impl<'a, I, C> StatusCommand<'a, I, C>
where
    I: ProcessInvoker,
    C: FailureClassifier,
{
    /// Create a new status command.
    #[must_use]
    pub const fn new(ctl: &'a RabbitMQCtl<I, C>) -> Self {
        Self { ctl }
    }

    /// Execute the status command.
    ///
    /// # Errors
    ///
    /// Returns an error if the status query fails or output fails.
    pub fn execute<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        node: &str,
    ) -> Result<(), CliError> {
        let report = self.fetch_report(node)?;
        format.write(writer, &report)?;
        Ok(())
    }

    /// Query the node and collect its versions.
    ///
    /// # Errors
    ///
    /// Returns an error if the status query fails.
    pub fn fetch_report(&self, node: &str) -> Result<NodeStatusReport, CliError> {
        let status = self.ctl.status(node)?;

        let rabbitmq_version = status.rabbitmq_version();
        let erlang_version = match status.erlang_version() {
            Ok(version) => Some(version),
            Err(e) => {
                warn!(node, error = %e, "status output has no erlang version");
                None
            }
        };

        Ok(NodeStatusReport {
            node: node.to_string(),
            rabbitmq_running: status.is_rabbitmq_running(),
            rabbitmq_version,
            erlang_version,
        })
    }
}
