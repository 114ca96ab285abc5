//! CLI module for wasmbuild

pub mod commands;

pub use commands::Cli;
