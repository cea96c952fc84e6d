//! Blocking process invocation.
//!
//! [`ProcessInvoker`] is the seam between the client and the operating
//! system. [`SystemInvoker`] spawns the real executable; tests substitute
//! their own implementation to observe arguments and script results.
//!
//! No shell is involved: the program is started directly and every argument
//! is handed over as-is.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::InvokeError;

/// Exit code recorded when the process was terminated by a signal.
pub const SIGNALLED_EXIT_CODE: i32 = -1;

/// Captured result of one finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Standard output.
    pub stdout: Vec<u8>,
    /// Standard error.
    pub stderr: Vec<u8>,
    /// Exit status code (0 for success).
    pub exit_code: i32,
}

impl CommandOutput {
    /// Create an output value from its parts.
    #[must_use]
    pub fn new(stdout: impl Into<Vec<u8>>, stderr: impl Into<Vec<u8>>, exit_code: i32) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_code,
        }
    }

    /// Get stdout as a UTF-8 string, replacing invalid characters.
    #[must_use]
    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    /// Get stderr as a UTF-8 string, replacing invalid characters.
    #[must_use]
    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }

    /// Stdout followed by stderr, as one lossy UTF-8 string.
    ///
    /// `rabbitmqctl` writes diagnostics to either stream depending on the
    /// version, so callers that inspect failure text look at both. A newline
    /// separates the streams so no line spans both.
    #[must_use]
    pub fn combined_lossy(&self) -> String {
        let mut text = self.stdout_lossy();
        if !self.stderr.is_empty() && !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(&String::from_utf8_lossy(&self.stderr));
        text
    }

    /// Check if the command succeeded (exit code 0).
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs an executable to completion and captures what it printed.
///
/// Implementations must not interpret the output or the exit code.
pub trait ProcessInvoker: Send + Sync {
    /// Run `program` with `args`, blocking until it exits.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::Spawn`] if the process could not be started.
    /// A nonzero exit is not an error at this layer.
    fn run(&self, program: &Path, args: &[&str]) -> Result<CommandOutput, InvokeError>;
}

impl<T: ProcessInvoker + ?Sized> ProcessInvoker for &T {
    fn run(&self, program: &Path, args: &[&str]) -> Result<CommandOutput, InvokeError> {
        (**self).run(program, args)
    }
}

/// Invoker backed by [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInvoker;

impl ProcessInvoker for SystemInvoker {
    fn run(&self, program: &Path, args: &[&str]) -> Result<CommandOutput, InvokeError> {
        debug!(command = %command_description(program, args), "running");

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| InvokeError::spawn(program.display().to_string(), e))?;

        let exit_code = output.status.code().unwrap_or(SIGNALLED_EXIT_CODE);
        debug!(exit_code, "finished");

        Ok(CommandOutput {
            stdout: output.stdout,
            stderr: output.stderr,
            exit_code,
        })
    }
}

/// Build the command description for logging.
#[must_use]
pub fn command_description(program: &Path, args: &[&str]) -> String {
    if args.is_empty() {
        return program.display().to_string();
    }
    format!("{} {}", program.display(), args.join(" "))
}
