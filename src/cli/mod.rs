//! Command-line interface module.

mod args;
pub mod check;
pub mod resolve;
pub mod routes;

pub use args::{CheckArgs, Cli, Commands, ResolveArgs};

use anyhow::{Context, Result};
use docsite::config::{SiteConfig, expand_tilde, find_config_file};
use docsite::debug;
use std::path::{Path, PathBuf};

/// Locate the `--config` file, searching upward from the current directory.
pub fn locate_config(config: &Path) -> Result<PathBuf> {
    let config = expand_tilde(config);
    find_config_file(&config).with_context(|| {
        format!(
            "config file '{}' not found in this directory or any parent",
            config.display()
        )
    })
}

/// Load the `--config` file and apply the `--base` override.
pub fn load_config(cli: &Cli) -> Result<(PathBuf, SiteConfig)> {
    let path = locate_config(&cli.config)?;
    debug!("config"; "loading {}", path.display());

    let config = SiteConfig::load(&path)?;
    Ok((path, apply_overrides(config, cli)))
}

/// CLI options that take precedence over the config file.
pub fn apply_overrides(config: SiteConfig, cli: &Cli) -> SiteConfig {
    match &cli.base {
        Some(base) => {
            debug!("config"; "base overridden to {}", base);
            config.with_base(base.clone())
        }
        None => config,
    }
}
