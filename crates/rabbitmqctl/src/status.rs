//! Successful `rabbitmqctl status` output and the fields read from it.
//!
//! The status report is an Erlang term printed as text. Only two fields are
//! needed during upgrade preparation, so rather than parse the term the
//! accessors pick them out with patterns each time they are called.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::VersionError;

/// `{rabbit,"RabbitMQ","3.4.3.1"}` inside `running_applications`.
static RABBITMQ_VERSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\{rabbit,\s*"RabbitMQ",\s*"([^"]+)"\}"#).unwrap_or_else(|_| unreachable!())
});

/// `{erlang_version, "Erlang/OTP 17 [erts-6.0] ..."}`, major or major.minor.
static ERLANG_VERSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\{erlang_version,\s*"Erlang/OTP (\d+(?:\.\d+)?)"#)
        .unwrap_or_else(|_| unreachable!())
});

/// Output of a `status` query that exited successfully.
///
/// Holds the raw text; nothing is extracted until an accessor asks for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RabbitMQCtlStatus {
    raw: String,
}

impl RabbitMQCtlStatus {
    /// Wrap the raw output of a successful status query.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The text exactly as the tool printed it.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Version of the running RabbitMQ application.
    ///
    /// `None` when the `rabbit` application is not among the running
    /// applications, which is the normal state after `stop_app`.
    #[must_use]
    pub fn rabbitmq_version(&self) -> Option<String> {
        RABBITMQ_VERSION_REGEX
            .captures(&self.raw)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Returns `true` if the RabbitMQ application is reported as running.
    #[must_use]
    pub fn is_rabbitmq_running(&self) -> bool {
        self.rabbitmq_version().is_some()
    }

    /// Erlang/OTP release of the node, e.g. `17` or `17.1`.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::ErlangVersionMissing`] if the output has no
    /// `erlang_version` field. A running node always reports one, so unlike
    /// [`rabbitmq_version`](Self::rabbitmq_version) absence is an error.
    pub fn erlang_version(&self) -> Result<String, VersionError> {
        ERLANG_VERSION_REGEX
            .captures(&self.raw)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or(VersionError::ErlangVersionMissing)
    }
}
