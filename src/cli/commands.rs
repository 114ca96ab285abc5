//! CLI definition using clap
//!
//! Every flag is optional: running `wasmbuild` on its own does the build.

use clap::Parser;

/// Build the current crate for the web with wasm-pack.
///
/// Runs `wasm-pack build --target web` and, if it succeeds, suggests a
/// local static server for trying the output.
#[derive(Parser, Debug)]
#[command(name = "wasmbuild")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Config file path (overrides default XDG paths)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory to build in (defaults to the current directory)
    #[arg(short, long)]
    pub project: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["wasmbuild"]);
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
        assert!(cli.project.is_none());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::parse_from(["wasmbuild", "-v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_config_flag() {
        let cli = Cli::parse_from(["wasmbuild", "-c", "/path/to/config.toml"]);
        assert_eq!(cli.config, Some("/path/to/config.toml".to_string()));
    }

    #[test]
    fn test_cli_project_flag() {
        let cli = Cli::parse_from(["wasmbuild", "--project", "/tmp/game"]);
        assert_eq!(cli.project, Some("/tmp/game".to_string()));
    }

    #[test]
    fn test_cli_rejects_positional_args() {
        let result = Cli::try_parse_from(["wasmbuild", "--release"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from(["wasmbuild", "build"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }
}
