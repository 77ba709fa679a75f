//! `check` command: resolve config files in parallel and report problems.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use docsite::config::{ConfigDiagnostics, ConfigError, SiteConfig, expand_tilde};
use docsite::utils::{plural_count, plural_s};
use docsite::{debug, log, resolve_with_diagnostics};
use rayon::prelude::*;

use super::{CheckArgs, Cli, apply_overrides, locate_config};

/// Outcome of checking one file.
///
/// Unknown fields and warnings are kept whether or not resolution failed.
struct CheckOutcome {
    path: PathBuf,
    unknown_fields: Vec<String>,
    diag: ConfigDiagnostics,
    /// Route count on success.
    result: Result<usize, ConfigError>,
}

pub fn run_check(cli: &Cli, args: &CheckArgs) -> Result<()> {
    let paths = if args.paths.is_empty() {
        vec![locate_config(&cli.config)?]
    } else {
        args.paths.iter().map(|p| expand_tilde(p)).collect()
    };

    log!("check"; "checking {}", plural_count(paths.len(), "config"));

    // Resolution is pure, so files are independent
    let outcomes: Vec<_> = paths
        .par_iter()
        .map(|path| check_file(path, cli))
        .collect();

    let mut failed = 0;
    for outcome in &outcomes {
        if !report(outcome) {
            failed += 1;
        }
    }

    if failed > 0 {
        bail!(
            "{} of {} config{} failed",
            failed,
            outcomes.len(),
            plural_s(outcomes.len())
        );
    }
    log!("check"; "all configs valid");
    Ok(())
}

fn check_file(path: &Path, cli: &Cli) -> CheckOutcome {
    let mut unknown_fields = Vec::new();
    let mut diag = ConfigDiagnostics::new();
    let result = resolve_file(path, cli, &mut unknown_fields, &mut diag);
    CheckOutcome {
        path: path.to_path_buf(),
        unknown_fields,
        diag,
        result,
    }
}

fn resolve_file(
    path: &Path,
    cli: &Cli,
    unknown_fields: &mut Vec<String>,
    diag: &mut ConfigDiagnostics,
) -> Result<usize, ConfigError> {
    let (config, ignored) = SiteConfig::from_path(path)?;
    *unknown_fields = ignored;
    let config = apply_overrides(config, cli);
    let resolved = resolve_with_diagnostics(&config, diag)?;
    Ok(resolved.routes.len())
}

/// Print one outcome. Returns `false` on failure.
fn report(outcome: &CheckOutcome) -> bool {
    let path = outcome.path.display();
    let passed = match &outcome.result {
        Ok(routes) => {
            log!("ok"; "{} ({})", path, plural_count(*routes, "route"));
            true
        }
        Err(ConfigError::Diagnostics(errors)) => {
            log!("error"; "{}", path);
            eprintln!("{errors}");
            false
        }
        Err(err) => {
            log!("error"; "{}: {}", path, err);
            debug!("error"; "{:?}", err);
            false
        }
    };

    for field in &outcome.unknown_fields {
        log!("warning"; "{}: unknown field `{}` ignored", path, field);
    }
    outcome.diag.print_hints_and_warnings();
    passed
}
