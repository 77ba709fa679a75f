//! `routes` command: print the route table grouped by sidebar.
//!
//! ```text
//! /asn-api/guide/  (5 routes)
//!   0  /asn-api/guide/              Introduction
//!   1  /asn-api/guide/quickstart    Quick Start      ← /asn-api/guide/  → /asn-api/guide/configuration
//! ```

use std::io::Write;

use anyhow::Result;
use docsite::config::ConfigDiagnostics;
use docsite::logger::paint;
use docsite::resolve::ResolvedSiteConfig;
use docsite::resolve_with_diagnostics;
use docsite::utils::plural_count;
use owo_colors::{Stream, Style};

use super::{Cli, load_config};

pub fn run_routes(cli: &Cli) -> Result<()> {
    let (_, config) = load_config(cli)?;

    let mut diag = ConfigDiagnostics::new();
    let resolved = resolve_with_diagnostics(&config, &mut diag)?;
    diag.print_hints_and_warnings();

    let mut stdout = std::io::stdout().lock();
    write_routes(&mut stdout, &resolved)?;
    Ok(())
}

fn write_routes(out: &mut impl Write, resolved: &ResolvedSiteConfig) -> std::io::Result<()> {
    let routes = &resolved.routes;
    let dimmed = Style::new().dimmed();

    for (i, sidebar) in resolved.theme.sidebar.iter().enumerate() {
        let sequence = routes.sequence(&sidebar.prefix);
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(
            out,
            "{}  {}",
            paint(&sidebar.prefix, Stream::Stdout, Style::new().bold()),
            paint(
                format!("({})", plural_count(sequence.len(), "route")),
                Stream::Stdout,
                dimmed
            )
        )?;

        let width = sequence.iter().map(|(route, _)| route.len()).max().unwrap_or(0);
        for (route, entry) in sequence {
            let neighbors = routes.neighbors(route);
            write!(out, "  {:>2}  {route:<width$}  {}", entry.position, entry.label)?;
            if let Some(prev) = neighbors.prev {
                write!(out, "  {}", paint(format!("← {prev}"), Stream::Stdout, dimmed))?;
            }
            if let Some(next) = neighbors.next {
                write!(out, "  {}", paint(format!("→ {next}"), Stream::Stdout, dimmed))?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}
