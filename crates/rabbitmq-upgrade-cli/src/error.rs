//! CLI error types and process exit codes.

use std::fmt;

use rabbitmqctl::{ConfigError, FailureKind, StatusError, StopAppError};

/// Exit code for configuration errors and executables that cannot start.
pub const EXIT_GENERAL: u8 = 1;
/// Exit code when epmd is unreachable and the host seems down.
pub const EXIT_UNREACHABLE_HOST: u8 = 10;
/// Exit code when epmd is unreachable but the host seems up.
pub const EXIT_UNREACHABLE_EPMD: u8 = 11;
/// Exit code when no rabbit node is running.
pub const EXIT_STOPPED_RABBIT_NODE: u8 = 12;
/// Exit code for unclassified status failures.
pub const EXIT_UNKNOWN: u8 = 13;
/// Exit code when `stop_app` fails.
pub const EXIT_STOP_APP_FAILED: u8 = 20;

/// CLI-specific errors.
#[derive(Debug)]
pub enum CliError {
    /// Invalid or unreadable configuration.
    Config(ConfigError),
    /// The status query failed.
    Status(StatusError),
    /// Stopping the app failed.
    StopApp(StopAppError),
    /// Output formatting error.
    Format(String),
    /// IO error.
    Io(std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Status(e) => e.kind().map_or(EXIT_GENERAL, kind_exit_code),
            Self::StopApp(e) if !e.is_spawn_failure() => EXIT_STOP_APP_FAILED,
            _ => EXIT_GENERAL,
        }
    }
}

/// Exit code reported for a classified status failure.
#[must_use]
pub const fn kind_exit_code(kind: FailureKind) -> u8 {
    match kind {
        FailureKind::UnreachableHost => EXIT_UNREACHABLE_HOST,
        FailureKind::UnreachableEpmd => EXIT_UNREACHABLE_EPMD,
        FailureKind::StoppedRabbitNode => EXIT_STOPPED_RABBIT_NODE,
        FailureKind::Unknown => EXIT_UNKNOWN,
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration error: {e}"),
            Self::Status(e) => write!(f, "{e}"),
            Self::StopApp(e) => write!(f, "{e}"),
            Self::Format(msg) => write!(f, "format error: {msg}"),
            Self::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Status(e) => Some(e),
            Self::StopApp(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Format(_) => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<StatusError> for CliError {
    fn from(err: StatusError) -> Self {
        Self::Status(err)
    }
}

impl From<StopAppError> for CliError {
    fn from(err: StopAppError) -> Self {
        Self::StopApp(err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rabbitmqctl::{ClassifiedError, InvokeError};

    fn spawn_error() -> InvokeError {
        InvokeError::spawn(
            "rabbitmqctl",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        )
    }

    #[test]
    fn status_error_display_is_the_classified_message() {
        let err = CliError::from(StatusError::from(ClassifiedError::new(
            FailureKind::UnreachableHost,
        )));
        assert_eq!(err.to_string(), "Unable to reach epmd and host seems down");
        assert_eq!(err.exit_code(), EXIT_UNREACHABLE_HOST);
    }

    #[test]
    fn every_kind_has_its_own_exit_code() {
        let mut codes: Vec<u8> = FailureKind::ALL.iter().map(|k| kind_exit_code(*k)).collect();
        codes.push(EXIT_GENERAL);
        codes.push(EXIT_STOP_APP_FAILED);
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), FailureKind::ALL.len() + 2);
    }

    #[test]
    fn stop_app_failure_exit_code() {
        let err = CliError::from(StopAppError::Failed { exit_code: 3 });
        assert_eq!(err.to_string(), "Failed to stop RabbitMQ app: exit status 3");
        assert_eq!(err.exit_code(), EXIT_STOP_APP_FAILED);
    }

    #[test]
    fn spawn_failures_use_general_exit_code() {
        assert_eq!(
            CliError::from(StopAppError::from(spawn_error())).exit_code(),
            EXIT_GENERAL
        );
        assert_eq!(
            CliError::from(StatusError::from(spawn_error())).exit_code(),
            EXIT_GENERAL
        );
    }

    #[test]
    fn config_error_display() {
        let err = CliError::from(ConfigError::Invalid("rabbitmqctl_path cannot be empty".into()));
        assert_eq!(
            err.to_string(),
            "configuration error: invalid configuration: rabbitmqctl_path cannot be empty"
        );
        assert_eq!(err.exit_code(), EXIT_GENERAL);
    }

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err = CliError::from(io_err);
        assert!(matches!(err, CliError::Io(_)));
    }
}
