//! Configuration model for wasmbuild
//!
//! Configuration only decides where the toolchain lives and where it runs.
//! The arguments passed to it are fixed and have no configuration key.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Toolchain invocation settings
    #[serde(default)]
    pub build: BuildConfig,
}

/// Toolchain invocation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BuildConfig {
    /// Toolchain executable, either a name looked up on PATH or a path.
    /// `~` and `$VARS` are expanded.
    #[serde(default = "default_program")]
    pub program: String,

    /// Directory the toolchain runs in (defaults to the current directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<String>,
}

fn default_program() -> String {
    "wasm-pack".to_string()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            working_dir: None,
        }
    }
}

impl Config {
    /// Replace the working directory, e.g. from a `--project` flag
    pub fn with_working_dir(mut self, dir: Option<String>) -> Self {
        if dir.is_some() {
            self.build.working_dir = dir;
        }
        self
    }
}
