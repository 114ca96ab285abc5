//! wasmbuild CLI entry point
//!
//! Usage:
//!   wasmbuild                    Build the crate in the current directory
//!   wasmbuild -p <dir>           Build the crate in <dir>
//!   wasmbuild -v                 Same, with debug logging on stderr

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use wasmbuild::build::{BuildCommand, BuildRunner};
use wasmbuild::config::load_config;
use wasmbuild::error::BuildError;
use wasmbuild::executor::ProcessExecutor;
use wasmbuild::logging::init_logger;
use wasmbuild::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_error(&e),
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?.with_working_dir(cli.project);
    let command = BuildCommand::from_config(&config.build)?;
    let runner = BuildRunner::new(ProcessExecutor, command);

    tracing::debug!("Toolchain command: {}", runner.command());

    let report = runner.run(&mut std::io::stdout()).await?;

    tracing::debug!(
        "{} completed in {}ms",
        report.command,
        report.duration.as_millis()
    );

    Ok(())
}

/// Print the error (unless the toolchain already did) and pick the exit code
fn report_error(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<BuildError>() {
        // The toolchain's own output is the diagnostic
        Some(build_err) if build_err.is_tool_failure() => {
            tracing::debug!("{}", build_err);
            to_exit_code(build_err.exit_code())
        }
        Some(build_err) => {
            eprintln!("{}: {}", "error".red().bold(), build_err);
            if let Some(suggestion) = build_err.suggestion() {
                eprintln!("{}: {}", "hint".yellow(), suggestion);
            }
            to_exit_code(build_err.exit_code())
        }
        None => {
            eprintln!("{}: {:#}", "error".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

/// Convert to a process exit code; codes outside 0..=255 become a generic failure
fn to_exit_code(code: i32) -> ExitCode {
    u8::try_from(code)
        .map(ExitCode::from)
        .unwrap_or(ExitCode::FAILURE)
}
