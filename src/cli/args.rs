//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Documentation site configuration resolver
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true, disable_version_flag = true)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,

    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "docsite.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override the base path, e.g. for a staging deployment.
    ///
    /// Avoids editing the config file per environment:
    ///   docsite --base /staging/asn-api/ resolve
    #[arg(long, global = true)]
    pub base: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the resolved configuration as JSON
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Print the route table, grouped by sidebar
    Routes,

    /// Resolve config files and report problems
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },
}

/// Resolve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Config files to check. If omitted, checks the `--config` file.
    #[arg(value_name = "PATH", value_hint = clap::ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_and_version_flags_are_distinct() {
        let cli = Cli::parse_from(["docsite", "-V", "check"]);
        assert!(cli.verbose);

        let err = Cli::try_parse_from(["docsite", "-v"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::parse_from(["docsite", "-C", "site.json", "resolve", "--pretty"]);
        assert_eq!(cli.config, PathBuf::from("site.json"));
        assert!(matches!(
            cli.command,
            Commands::Resolve { args: ResolveArgs { pretty: true, output: None } }
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["docsite", "routes", "--base", "/staging/", "-V"]);
        assert_eq!(cli.base.as_deref(), Some("/staging/"));
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("docsite.toml"));
    }

    #[test]
    fn test_parse_check_paths() {
        let cli = Cli::parse_from(["docsite", "check", "a.toml", "b.json"]);
        let Commands::Check { args } = cli.command else {
            panic!("expected check");
        };
        assert_eq!(args.paths, [PathBuf::from("a.toml"), PathBuf::from("b.json")]);
    }
}
