//! Shared setup for the `hal-curie` client binaries.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::Path;

use anyhow::{Context, Result};
use hal_curie::config::parse_binding;
use hal_curie::NamespaceConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG: &str = "curies.toml";

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Assembles a configuration from an optional file plus `NAME=TEMPLATE`
/// bindings. Bindings are appended after the file so they take precedence.
///
/// Without an explicit path, [`DEFAULT_CONFIG`] is read if it exists.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or a binding is malformed.
pub fn assemble_config(path: Option<&Path>, bindings: &[String]) -> Result<NamespaceConfig> {
    let mut config = match path {
        Some(path) => NamespaceConfig::load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None if Path::new(DEFAULT_CONFIG).is_file() => {
            NamespaceConfig::load(Path::new(DEFAULT_CONFIG))
                .with_context(|| format!("Failed to load {DEFAULT_CONFIG}"))?
        }
        None => {
            debug!("no namespace config file; using command-line bindings only");
            NamespaceConfig::default()
        }
    };
    for binding in bindings {
        let entry = parse_binding(binding)
            .with_context(|| format!("Invalid --ns binding `{binding}`"))?;
        config.push(entry);
    }
    Ok(config)
}
