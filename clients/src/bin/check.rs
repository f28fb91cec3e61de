//! `curie-check` — Checks a namespace configuration for entries that would be
//! rejected, never match, or be shadowed by an earlier namespace.
//!
//! **Usage:**
//! ```
//! curie-check [--config <path>] [--ns NAME=TEMPLATE]...
//! ```
//!
//! Exits non-zero if any check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use hal_curie::report::{check, Severity};
use hal_curie_clients::{assemble_config, init_tracing};

/// Check a hal-curie namespace configuration.
#[derive(Parser)]
#[command(name = "curie-check", about = "Check a CURIE namespace configuration")]
struct Args {
    /// Namespace configuration file (default: ./curies.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Extra namespace binding, NAME=TEMPLATE. May be repeated.
    #[arg(long = "ns", value_name = "NAME=TEMPLATE")]
    bindings: Vec<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = assemble_config(args.config.as_deref(), &args.bindings)?;
    let report = check(&config);

    println!("Namespace Configuration Report");
    println!("==============================");
    println!();

    for result in &report.results {
        let status = match result.severity {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        };
        println!("[{}] {} — {}", status, result.namespace, result.message);
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.count(Severity::Pass),
        report.count(Severity::Warning),
        report.failure_count()
    );

    if !report.all_passed() {
        eprintln!("Check FAILED: {} namespace(s) rejected.", report.failure_count());
        process::exit(1);
    }

    println!("Check PASSED.");
    Ok(())
}
