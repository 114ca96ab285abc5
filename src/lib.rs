//! wasmbuild - build a crate for the web and say how to serve it
//!
//! Runs `wasm-pack build --target web`. If the toolchain fails, its exit
//! code becomes ours and nothing else is printed. If it succeeds, a local
//! static server is suggested (printed, never started).
//!
//! ## Features
//!
//! - Fixed toolchain arguments; only the executable and directory are configurable
//! - Toolchain output passed straight through to the terminal
//! - XDG-compliant layered configuration with `WASMBUILD_` env overrides
//! - Shell-compatible exit codes (127 for a missing toolchain)

pub mod build;
pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;

pub use build::{BuildCommand, BuildReport, BuildRunner};
pub use cli::Cli;
pub use config::Config;
pub use error::BuildError;
pub use executor::{exec_command, CommandExecutor, ExecOptions, ExecResult, ProcessExecutor};
