//! `resolve` command: print the resolved configuration as JSON.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use docsite::config::ConfigDiagnostics;
use docsite::utils::{hash, plural_count};
use docsite::{debug, log, resolve_with_diagnostics};

use super::{Cli, ResolveArgs, load_config};

pub fn run_resolve(cli: &Cli, args: &ResolveArgs) -> Result<()> {
    let (path, config) = load_config(cli)?;

    let mut diag = ConfigDiagnostics::new();
    let resolved = resolve_with_diagnostics(&config, &mut diag)?;
    diag.print_hints_and_warnings();

    debug!("config"; "fingerprint {}", hash::short(&resolved.fingerprint()?));
    let json = resolved.to_json(args.pretty)?;

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("failed to create {}", output_path.display()))?;
        writeln!(file, "{json}")?;
        log!("resolve"; "wrote {} to {}", plural_count(resolved.routes.len(), "route"), output_path.display());
    } else {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{json}")?;
    }

    debug!("resolve"; "resolved {}", path.display());
    Ok(())
}
