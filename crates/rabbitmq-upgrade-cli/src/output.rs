//! Output formatting for CLI commands.
//!
//! Supports table (human-readable) and JSON output formats.

use std::io::Write;

use serde::Serialize;

use crate::cli::Format;
use crate::error::CliError;

/// Output formatter that handles both table and JSON output.
#[derive(Debug, Clone)]
pub struct OutputFormat {
    format: Format,
}

impl OutputFormat {
    /// Create a new output formatter.
    #[must_use]
    pub const fn new(format: Format) -> Self {
        Self { format }
    }

    /// Check if JSON format is selected.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self.format, Format::Json)
    }

    /// Write a serializable value to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write<W, T>(&self, writer: &mut W, value: &T) -> Result<(), CliError>
    where
        W: Write,
        T: Serialize + TableDisplay,
    {
        match self.format {
            Format::Json => {
                serde_json::to_writer_pretty(&mut *writer, value)
                    .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;
                writeln!(writer)?;
            }
            Format::Table => {
                value.write_table(writer)?;
            }
        }
        Ok(())
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::new(Format::Table)
    }
}

/// Trait for types that can be displayed as a table.
pub trait TableDisplay {
    /// Write the value as a human-readable table.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError>;
}

/// Versions reported by a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeStatusReport {
    /// Node that was queried.
    pub node: String,
    /// Whether the RabbitMQ application is running.
    pub rabbitmq_running: bool,
    /// RabbitMQ version, when the application is running.
    pub rabbitmq_version: Option<String>,
    /// Erlang/OTP release, when the node reported one.
    pub erlang_version: Option<String>,
}

impl TableDisplay for NodeStatusReport {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "Node Status")?;
        writeln!(writer, "══════════════════════════════════")?;
        writeln!(writer, "Node:             {}", self.node)?;
        writeln!(
            writer,
            "RabbitMQ:         {}",
            self.rabbitmq_version.as_deref().unwrap_or("not running")
        )?;
        writeln!(
            writer,
            "Erlang/OTP:       {}",
            self.erlang_version.as_deref().unwrap_or("unavailable")
        )?;
        Ok(())
    }
}

/// Confirmation of a completed action.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    /// Message text.
    pub message: String,
}

impl Message {
    /// Create a success message.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl TableDisplay for Message {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "✓ {}", self.message)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> NodeStatusReport {
        NodeStatusReport {
            node: "rabbit@node-0".into(),
            rabbitmq_running: true,
            rabbitmq_version: Some("3.4.3.1".into()),
            erlang_version: Some("17".into()),
        }
    }

    fn render<T: Serialize + TableDisplay>(format: Format, value: &T) -> String {
        let mut buf = Vec::new();
        OutputFormat::new(format).write(&mut buf, value).expect("write");
        String::from_utf8(buf).expect("valid utf8")
    }

    #[test]
    fn output_format_default_is_table() {
        assert!(!OutputFormat::default().is_json());
    }

    #[test]
    fn status_report_table_output() {
        let output = render(Format::Table, &report());
        assert!(output.contains("Node Status"));
        assert!(output.contains("rabbit@node-0"));
        assert!(output.contains("3.4.3.1"));
        assert!(output.contains("Erlang/OTP:       17"));
    }

    #[test]
    fn status_report_table_output_app_stopped() {
        let stopped = NodeStatusReport {
            rabbitmq_running: false,
            rabbitmq_version: None,
            erlang_version: None,
            ..report()
        };
        let output = render(Format::Table, &stopped);
        assert!(output.contains("not running"));
        assert!(output.contains("unavailable"));
    }

    #[test]
    fn status_report_json_output() {
        let output = render(Format::Json, &report());
        let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");
        assert_eq!(value["node"], "rabbit@node-0");
        assert_eq!(value["rabbitmq_running"], true);
        assert_eq!(value["rabbitmq_version"], "3.4.3.1");
        assert_eq!(value["erlang_version"], "17");
    }

    #[test]
    fn status_report_json_null_versions() {
        let stopped = NodeStatusReport {
            rabbitmq_running: false,
            rabbitmq_version: None,
            ..report()
        };
        let output = render(Format::Json, &stopped);
        let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");
        assert!(value["rabbitmq_version"].is_null());
    }

    #[test]
    fn message_success() {
        let output = render(Format::Table, &Message::success("done"));
        assert_eq!(output, "✓ done\n");
    }

    #[test]
    fn message_json_has_only_text() {
        let output = render(Format::Json, &Message::success("done"));
        let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");
        assert_eq!(value, serde_json::json!({ "message": "done" }));
    }
}
