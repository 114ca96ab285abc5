//! The toolchain invocation
//!
//! The argument list is a constant. Nothing a caller passes in (flags,
//! config, environment) can change what the toolchain is asked to do,
//! only which executable is used and which directory it runs in.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::BuildConfig;
use crate::error::BuildError;

/// Default toolchain executable
pub const WASM_PACK: &str = "wasm-pack";

/// Arguments selecting a web-loadable build
pub const WEB_TARGET_ARGS: [&str; 3] = ["build", "--target", "web"];

/// A fixed `wasm-pack build --target web` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    program: String,
    working_dir: Option<PathBuf>,
}

impl Default for BuildCommand {
    fn default() -> Self {
        Self::new(WASM_PACK)
    }
}

impl BuildCommand {
    /// Create a command for the given toolchain executable
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            working_dir: None,
        }
    }

    /// Run the toolchain in a specific directory
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Build the command from configuration, expanding `~` and `$VARS`
    ///
    /// # Errors
    /// * `BuildError::Config` - If a path references an undefined variable
    /// * `BuildError::ProjectNotFound` - If the working directory doesn't exist
    pub fn from_config(config: &BuildConfig) -> Result<Self, BuildError> {
        let program = expand(&config.program)?;
        if program.trim().is_empty() {
            return Err(BuildError::Config("build.program is empty".to_string()));
        }

        let mut command = Self::new(program);

        if let Some(ref dir) = config.working_dir {
            let dir = PathBuf::from(expand(dir)?);
            if !dir.is_dir() {
                return Err(BuildError::ProjectNotFound {
                    path: dir.display().to_string(),
                });
            }
            command = command.in_dir(dir);
        }

        Ok(command)
    }

    /// Toolchain executable
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the toolchain; always [`WEB_TARGET_ARGS`]
    pub fn args(&self) -> &'static [&'static str] {
        &WEB_TARGET_ARGS
    }

    /// Directory the toolchain runs in, if not the current one
    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }
}

impl fmt::Display for BuildCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.program, self.args().join(" "))
    }
}

fn expand(value: &str) -> Result<String, BuildError> {
    shellexpand::full(value)
        .map(|s| s.into_owned())
        .map_err(|e| BuildError::Config(format!("cannot expand '{}': {}", value, e)))
}
