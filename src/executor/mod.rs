//! Command execution module
//!
//! Provides async command execution with:
//! - Inherited stdin/stdout/stderr
//! - PATH resolution relative to the working directory
//! - Shell-style exit code mapping

pub mod runner;

pub use runner::*;
