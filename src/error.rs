//! Error types for wasmbuild
//!
//! Every error maps onto the process exit code the binary finishes with.

use thiserror::Error;

/// Exit code a shell reports when a command cannot be found
pub const EXIT_NOT_FOUND: i32 = 127;

/// Exit code a shell reports when a command is found but cannot be executed
pub const EXIT_CANNOT_EXECUTE: i32 = 126;

/// Generic failure exit code
pub const EXIT_FAILURE: i32 = 1;

/// Main error type for build operations
#[derive(Error, Debug)]
pub enum BuildError {
    /// The toolchain ran and exited with a non-zero status
    #[error("Command failed with exit code {exit_code}: {command}")]
    ToolFailed { command: String, exit_code: i32 },

    /// The toolchain executable could not be located
    #[error("Command not found: {program} ({error})")]
    ToolNotFound { program: String, error: String },

    /// The toolchain was located but could not be started
    #[error("Failed to spawn command: {command} ({error})")]
    SpawnFailed { command: String, error: String },

    /// Working directory does not exist
    #[error("Project directory not found: {path}")]
    ProjectNotFound { path: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BuildError {
    /// Exit code the process should finish with for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildError::ToolFailed { exit_code, .. } => *exit_code,
            BuildError::ToolNotFound { .. } => EXIT_NOT_FOUND,
            BuildError::SpawnFailed { .. } => EXIT_CANNOT_EXECUTE,
            BuildError::ProjectNotFound { .. } | BuildError::Config(_) | BuildError::Io(_) => {
                EXIT_FAILURE
            }
        }
    }

    /// Whether the toolchain itself reported the failure on its own streams
    pub fn is_tool_failure(&self) -> bool {
        matches!(self, BuildError::ToolFailed { .. })
    }

    /// Hint for fixing the error, if there is a well-known one
    pub fn suggestion(&self) -> Option<String> {
        match self {
            BuildError::ToolNotFound { program, .. } => Some(suggest_install(program)),
            BuildError::SpawnFailed { .. } => Some(
                "Permission denied or bad interpreter. Check that the toolchain is executable."
                    .to_string(),
            ),
            BuildError::ProjectNotFound { .. } => {
                Some("Pass an existing directory with --project or build.working_dir".to_string())
            }
            BuildError::Config(_) => {
                Some("Check your wasmbuild configuration file".to_string())
            }
            BuildError::ToolFailed { .. } | BuildError::Io(_) => None,
        }
    }
}

/// Suggest how to install a missing toolchain
fn suggest_install(program: &str) -> String {
    let name = std::path::Path::new(program)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| program.to_string());

    if name == "wasm-pack" {
        "Install wasm-pack: cargo install wasm-pack".to_string()
    } else {
        format!(
            "'{}' not found. Check PATH or the build.program setting.",
            program
        )
    }
}
