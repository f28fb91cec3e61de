//! Errors raised while loading namespace configuration.
//!
//! Compaction and expansion never fail; only configuration I/O and
//! validation produce errors.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to read, parse, validate or render a namespace configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("cannot access namespace config {}: {source}", .path.display())]
    Io {
        /// Path that was being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or does not match the schema.
    #[error("invalid namespace config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML.
    #[error("cannot render namespace config: {0}")]
    Render(#[from] toml::ser::Error),

    /// A command-line binding lacks the `=` separator.
    #[error("namespace binding `{0}` is not of the form NAME=TEMPLATE")]
    MalformedBinding(String),

    /// A namespace name is empty.
    #[error("namespace name must not be empty")]
    EmptyName,

    /// A namespace name contains the CURIE separator.
    #[error("namespace name `{0}` must not contain `:`")]
    ColonInName(String),
}
