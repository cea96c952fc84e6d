//! Stop-app command implementation.

use std::io::Write;

use rabbitmqctl::{FailureClassifier, ProcessInvoker, RabbitMQCtl};
use tracing::info;

use crate::error::CliError;
use crate::output::{Message, OutputFormat};

/// Stop-app command executor.
pub struct StopAppCommand<'a, I, C> {
    ctl: &'a RabbitMQCtl<I, C>,
}

impl<'a, I, C> StopAppCommand<'a, I, C>
where
    I: ProcessInvoker,
    C: FailureClassifier,
{
    /// Create a new stop-app command.
    #[must_use]
    pub const fn new(ctl: &'a RabbitMQCtl<I, C>) -> Self {
        Self { ctl }
    }

    /// Stop the RabbitMQ application on `node` and report it.
    ///
    /// # Errors
    ///
    /// Returns an error if `stop_app` fails or output fails.
    pub fn execute<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        node: &str,
    ) -> Result<(), CliError> {
        self.ctl.stop_app(node)?;
        info!(node, "rabbitmq app stopped");
        format.write(writer, &Message::success(format!("Stopped RabbitMQ app on {node}")))?;
        Ok(())
    }
}
