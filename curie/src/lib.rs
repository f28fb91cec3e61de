//! Compact URI (CURIE) namespaces for hypermedia link relations.
//!
//! The `hal-curie` crate maps short namespace names to URI templates that
//! contain a single `{rel}` placeholder, and translates link relations
//! between their expanded form and `name:value` CURIEs.
//!
//! # Entry Point
//!
//! ```
//! use hal_curie::NamespaceRegistry;
//!
//! let mut registry = NamespaceRegistry::new();
//! registry.add("acme", "https://docs.acme.com/relations/{rel}");
//!
//! let curie = registry.compact("https://docs.acme.com/relations/widgets");
//! assert_eq!(curie.as_deref(), Some("acme:widgets"));
//! assert_eq!(
//!     registry.expand("acme:widgets").as_deref(),
//!     Some("https://docs.acme.com/relations/widgets")
//! );
//! ```
//!
//! # Configuration
//!
//! With the default `config` feature, registries can be loaded from TOML:
//!
//! ```
//! # #[cfg(feature = "config")]
//! # fn main() -> Result<(), hal_curie::ConfigError> {
//! let config = hal_curie::NamespaceConfig::from_toml_str(r#"
//!     [[namespace]]
//!     name = "rel"
//!     template = "http://example.com/rels/{rel}"
//! "#)?;
//! let registry = config.into_registry()?;
//! assert_eq!(registry.compact("http://example.com/rels/next").as_deref(), Some("rel:next"));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "config"))]
//! # fn main() {}
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

#[cfg(feature = "config")]
pub mod config;
pub mod curie;
#[cfg(feature = "config")]
pub mod error;
pub mod registry;
#[cfg(feature = "config")]
pub mod report;
pub mod shared;
pub mod template;

#[cfg(feature = "config")]
pub use config::{NamespaceConfig, NamespaceEntry};
pub use curie::Curie;
#[cfg(feature = "config")]
pub use error::ConfigError;
pub use registry::NamespaceRegistry;
pub use shared::SharedRegistry;
pub use template::{Template, PLACEHOLDER};
