//! `curie` — Compacts URIs into CURIEs and expands CURIEs back into URIs.
//!
//! Namespaces come from a TOML file (`--config`, or `curies.toml` in the
//! working directory when present) followed by any `--ns NAME=TEMPLATE`
//! bindings, which override the file.
//!
//! **Usage:**
//! ```
//! curie [--config <path>] [--ns NAME=TEMPLATE]... [--json] compact <URI>...
//! curie [--config <path>] [--ns NAME=TEMPLATE]... [--json] expand <CURIE>...
//! curie [--config <path>] [--ns NAME=TEMPLATE]... [--json] list
//! ```
//!
//! Exits non-zero if any input had no result.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hal_curie::{NamespaceConfig, NamespaceRegistry};
use hal_curie_clients::{assemble_config, init_tracing};
use serde::Serialize;

/// Translate between expanded link-relation URIs and CURIEs.
#[derive(Parser)]
#[command(name = "curie", about = "Translate between URIs and CURIEs")]
struct Args {
    /// Namespace configuration file (default: ./curies.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Extra namespace binding, NAME=TEMPLATE. May be repeated.
    #[arg(long = "ns", value_name = "NAME=TEMPLATE", global = true)]
    bindings: Vec<String>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compact expanded URIs into CURIEs.
    Compact {
        /// URIs to compact.
        #[arg(required = true)]
        uris: Vec<String>,
    },
    /// Expand CURIEs into URIs.
    Expand {
        /// CURIEs to expand.
        #[arg(required = true)]
        curies: Vec<String>,
    },
    /// List registered namespaces in compaction order.
    List,
}

/// One translated input.
#[derive(Serialize)]
struct Outcome<'a> {
    input: &'a str,
    output: Option<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let registry = assemble_config(args.config.as_deref(), &args.bindings)?
        .into_registry()
        .context("Invalid namespace configuration")?;

    let outcomes: Vec<Outcome<'_>> = match &args.command {
        Command::Compact { uris } => translate(uris, |uri| registry.compact(uri)),
        Command::Expand { curies } => translate(curies, |curie| registry.expand(curie)),
        Command::List => return list(&registry, args.json),
    };

    if args.json {
        let text = serde_json::to_string_pretty(&outcomes)
            .context("Failed to serialize results to JSON")?;
        println!("{text}");
    } else {
        for outcome in &outcomes {
            match &outcome.output {
                Some(output) => println!("{output}"),
                None => eprintln!("no match: {}", outcome.input),
            }
        }
    }

    let misses = outcomes.iter().filter(|o| o.output.is_none()).count();
    if misses > 0 {
        process::exit(1);
    }
    Ok(())
}

fn translate<'a>(
    inputs: &'a [String],
    op: impl Fn(&str) -> Option<String>,
) -> Vec<Outcome<'a>> {
    inputs
        .iter()
        .map(|input| Outcome {
            input: input.as_str(),
            output: op(input),
        })
        .collect()
}

fn list(registry: &NamespaceRegistry, json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(&NamespaceConfig::from(registry))
            .context("Failed to serialize namespaces to JSON")?;
        println!("{text}");
    } else {
        for (name, template) in registry.iter() {
            println!("{name}\t{template}");
        }
    }
    Ok(())
}
