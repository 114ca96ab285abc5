//! Announce, build, then report or abort
//!
//! Standard output carries exactly these lines:
//!
//! ```text
//! Building WASM...
//! Build complete. To run, use a local server, e.g.:
//! python3 -m http.server
//! ```
//!
//! The last two only appear when the toolchain exits with status zero.
//! The server command is printed, never run.

use std::io::Write;
use std::time::Duration;

use super::command::BuildCommand;
use crate::error::BuildError;
use crate::executor::CommandExecutor;

/// Printed before the toolchain starts
pub const START_MESSAGE: &str = "Building WASM...";

/// Printed once the toolchain exits successfully
pub const COMPLETE_MESSAGE: &str = "Build complete. To run, use a local server, e.g.:";

/// Suggested follow-up command for serving the output
pub const SERVE_HINT: &str = "python3 -m http.server";

/// Outcome of a successful build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Command line that was executed
    pub command: String,
    /// How long the toolchain ran
    pub duration: Duration,
}

/// Runs the toolchain once per call and reports the result
pub struct BuildRunner<E> {
    executor: E,
    command: BuildCommand,
}

impl<E: CommandExecutor> BuildRunner<E> {
    /// Create a runner for `command` using `executor`
    pub fn new(executor: E, command: BuildCommand) -> Self {
        Self { executor, command }
    }

    /// The command this runner executes
    pub fn command(&self) -> &BuildCommand {
        &self.command
    }

    /// Run the build, writing progress text to `out`
    ///
    /// # Errors
    /// * `BuildError::ToolFailed` - The toolchain exited non-zero; nothing
    ///   beyond the start line has been written
    /// * Any error from the executor if the toolchain couldn't be run
    /// * `BuildError::Io` - If writing to `out` fails
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<BuildReport, BuildError> {
        writeln!(out, "{}", START_MESSAGE)?;
        // The child shares our terminal, so the start line must land first
        out.flush()?;

        let result = self.executor.execute(&self.command).await?;

        if !result.success {
            return Err(BuildError::ToolFailed {
                command: self.command.to_string(),
                exit_code: result.exit_code,
            });
        }

        writeln!(out, "{}", COMPLETE_MESSAGE)?;
        writeln!(out, "{}", SERVE_HINT)?;
        out.flush()?;

        Ok(BuildReport {
            command: self.command.to_string(),
            duration: result.duration,
        })
    }
}
