//! Async command execution with inherited standard streams
//!
//! The child writes straight to the caller's terminal; nothing is captured.
//! There is no timeout: the call returns when the child exits.

use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::process::Command;

use crate::build::BuildCommand;
use crate::error::{BuildError, EXIT_FAILURE};

/// Options for async command execution
#[derive(Debug, Clone, Default)]
pub struct ExecOptions {
    /// Working directory for the command
    pub working_dir: Option<PathBuf>,
}

impl ExecOptions {
    /// Create options with a working directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: Some(dir.into()),
        }
    }
}

/// Result of async command execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,
    /// Exit code, with signal terminations folded in shell-style
    pub exit_code: i32,
    /// Duration of execution
    pub duration: Duration,
}

impl ExecResult {
    /// Result for a process that exited with `exit_code`
    pub fn exited(exit_code: i32, duration: Duration) -> Self {
        Self {
            success: exit_code == 0,
            exit_code,
            duration,
        }
    }

    /// Result from a child's exit status
    pub fn from_status(status: ExitStatus, duration: Duration) -> Self {
        Self::exited(exit_code_of(status), duration)
    }
}

/// Map an exit status to the code a shell would report
///
/// A normal exit keeps its code. On Unix a signal termination becomes
/// `128 + signal`.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    EXIT_FAILURE
}

/// Execute a command asynchronously, inheriting stdin, stdout and stderr
///
/// # Arguments
/// * `program` - The program to execute, a name looked up on PATH or a path
/// * `args` - Command arguments
/// * `options` - Execution options
///
/// # Errors
/// * `BuildError::ToolNotFound` - If the program can't be resolved
/// * `BuildError::SpawnFailed` - If the program was found but couldn't be started
/// * `BuildError::Io` - If waiting on the child fails
pub async fn exec_command(
    program: &str,
    args: &[&str],
    options: &ExecOptions,
) -> Result<ExecResult, BuildError> {
    let command_str = format!("{} {}", program, args.join(" "));

    // The child chdirs before exec, so both paths must be absolute
    let current = std::env::current_dir()?;
    let cwd = match options.working_dir {
        Some(ref dir) => current.join(dir),
        None => current,
    };

    let resolved = which::which_in(program, std::env::var_os("PATH"), &cwd).map_err(|e| {
        if is_explicit_path(program) && cwd.join(program).is_file() {
            BuildError::SpawnFailed {
                command: command_str.clone(),
                error: "file exists but is not executable".to_string(),
            }
        } else {
            BuildError::ToolNotFound {
                program: program.to_string(),
                error: e.to_string(),
            }
        }
    })?;

    tracing::debug!(
        "Executing: {} (resolved to {})",
        command_str,
        resolved.display()
    );

    let mut cmd = Command::new(&resolved);
    cmd.args(args);
    cmd.stdin(Stdio::inherit());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());
    cmd.current_dir(&cwd);

    let start = Instant::now();

    let mut child = cmd.spawn().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BuildError::ToolNotFound {
                program: program.to_string(),
                error: e.to_string(),
            }
        } else {
            BuildError::SpawnFailed {
                command: command_str.clone(),
                error: e.to_string(),
            }
        }
    })?;

    let status = child.wait().await?;
    let result = ExecResult::from_status(status, start.elapsed());

    tracing::debug!(
        "{} exited with {} after {}ms",
        command_str,
        result.exit_code,
        result.duration.as_millis()
    );

    Ok(result)
}

/// Whether `program` names a file rather than something to look up on PATH
fn is_explicit_path(program: &str) -> bool {
    program.contains(std::path::MAIN_SEPARATOR) || program.contains('/')
}

/// Runs a [`BuildCommand`] to completion
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Execute the command and report how it exited
    ///
    /// A non-zero exit is an `Ok` result; errors mean the command never ran.
    async fn execute(&self, command: &BuildCommand) -> Result<ExecResult, BuildError>;
}

/// Executes commands as real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

#[async_trait]
impl CommandExecutor for ProcessExecutor {
    async fn execute(&self, command: &BuildCommand) -> Result<ExecResult, BuildError> {
        let options = match command.working_dir() {
            Some(dir) => ExecOptions::in_dir(dir),
            None => ExecOptions::default(),
        };
        exec_command(command.program(), command.args(), &options).await
    }
}
