//! Error types for rabbitmqctl operations.
//!
//! The status and stop paths report failures differently: `stop_app` only
//! surfaces the raw exit status, while `status` classifies the tool's output
//! into a [`FailureKind`](crate::classify::FailureKind). Both keep a failure to
//! start the executable separate from a nonzero exit.

use thiserror::Error;

use crate::classify::{ClassifiedError, FailureKind};

/// The executable could not be run at all.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// Spawning the process failed (missing file, permission denied, ...).
    #[error("failed to start '{program}': {source}")]
    Spawn {
        /// Program that was being started.
        program: String,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },
}

impl InvokeError {
    /// Creates a `Spawn` error for the given program.
    #[must_use]
    pub fn spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }

    /// The OS error kind reported when spawning failed.
    #[must_use]
    pub fn io_kind(&self) -> std::io::ErrorKind {
        match self {
            Self::Spawn { source, .. } => source.kind(),
        }
    }
}

/// Errors returned by `stop_app`.
#[derive(Debug, Error)]
pub enum StopAppError {
    /// The tool ran and exited with a nonzero status.
    #[error("Failed to stop RabbitMQ app: exit status {exit_code}")]
    Failed {
        /// Exit code reported by the tool.
        exit_code: i32,
    },

    /// The tool could not be started.
    #[error(transparent)]
    Invoke(#[from] InvokeError),
}

impl StopAppError {
    /// Exit code of the failed run, if the tool ran at all.
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Failed { exit_code } => Some(*exit_code),
            Self::Invoke(_) => None,
        }
    }

    /// Returns `true` if the executable could not be started.
    #[must_use]
    pub fn is_spawn_failure(&self) -> bool {
        matches!(self, Self::Invoke(_))
    }
}

/// Errors returned by `status`.
#[derive(Debug, Error)]
pub enum StatusError {
    /// The tool exited nonzero; its output was classified.
    #[error(transparent)]
    Classified(#[from] ClassifiedError),

    /// The tool could not be started.
    #[error(transparent)]
    Invoke(#[from] InvokeError),
}

impl StatusError {
    /// Failure kind, if the tool ran and its output was classified.
    #[must_use]
    pub fn kind(&self) -> Option<FailureKind> {
        match self {
            Self::Classified(e) => Some(e.kind()),
            Self::Invoke(_) => None,
        }
    }

    /// Returns `true` if the executable could not be started.
    #[must_use]
    pub fn is_spawn_failure(&self) -> bool {
        matches!(self, Self::Invoke(_))
    }
}

/// Errors from the version accessors on a successful status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// The status output carries no `erlang_version` field.
    #[error("No Erlang version available")]
    ErlangVersionMissing,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file '{path}': {source}")]
    Read {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value failed validation.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
