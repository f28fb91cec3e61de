//! TOML namespace configuration.
//!
//! Namespaces are declared as an array of tables so that file order is
//! preserved and becomes registration (and compaction) order:
//!
//! ```toml
//! [[namespace]]
//! name = "rel"
//! template = "http://example.com/rels/{rel}"
//!
//! [[namespace]]
//! name = "x"
//! template = "http://x.io/{rel}/item"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::curie::SEPARATOR;
use crate::error::ConfigError;
use crate::registry::NamespaceRegistry;
use crate::template::Template;

/// One `[[namespace]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceEntry {
    /// CURIE prefix.
    pub name: String,
    /// URI template containing `{rel}`.
    pub template: String,
}

impl NamespaceEntry {
    /// Creates an entry.
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
        }
    }

    /// Checks that the name can serve as a CURIE prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyName`] or [`ConfigError::ColonInName`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if self.name.contains(SEPARATOR) {
            return Err(ConfigError::ColonInName(self.name.clone()));
        }
        Ok(())
    }
}

/// A namespace configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceConfig {
    /// Namespace declarations in registration order.
    #[serde(default, rename = "namespace")]
    pub namespaces: Vec<NamespaceEntry>,
}

impl NamespaceConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not a valid configuration.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses the TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), count = config.namespaces.len(), "namespace config loaded");
        Ok(config)
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Render`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Appends an entry. Later entries override earlier ones with the same name.
    pub fn push(&mut self, entry: NamespaceEntry) -> &mut Self {
        self.namespaces.push(entry);
        self
    }

    /// Validates every entry name.
    ///
    /// # Errors
    ///
    /// Returns the first name error encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.namespaces.iter().try_for_each(NamespaceEntry::validate)
    }

    /// Validates the configuration and builds a registry from it.
    ///
    /// Templates without the placeholder are registered (they stay inert)
    /// and logged at `warn`.
    ///
    /// # Errors
    ///
    /// Returns the first name error encountered.
    pub fn into_registry(self) -> Result<NamespaceRegistry, ConfigError> {
        self.validate()?;
        let mut registry = NamespaceRegistry::new();
        for NamespaceEntry { name, template } in self.namespaces {
            let template = Template::from(template);
            if !template.is_resolvable() {
                warn!(%name, %template, "template has no {{rel}} placeholder; namespace is inert");
            }
            registry.add(name, template);
        }
        Ok(registry)
    }
}

impl From<&NamespaceRegistry> for NamespaceConfig {
    fn from(registry: &NamespaceRegistry) -> Self {
        Self {
            namespaces: registry
                .iter()
                .map(|(name, template)| NamespaceEntry::new(name, template.as_str()))
                .collect(),
        }
    }
}

/// Parses a `NAME=TEMPLATE` binding, splitting on the first `=`.
///
/// # Errors
///
/// Returns [`ConfigError::MalformedBinding`] if there is no `=`, and the
/// name errors of [`NamespaceEntry::validate`].
///
/// ```
/// use hal_curie::config::parse_binding;
///
/// let entry = parse_binding("q=http://e.com/search?q={rel}&x=1").unwrap();
/// assert_eq!(entry.name, "q");
/// assert_eq!(entry.template, "http://e.com/search?q={rel}&x=1");
/// ```
pub fn parse_binding(binding: &str) -> Result<NamespaceEntry, ConfigError> {
    let (name, template) = binding
        .split_once('=')
        .ok_or_else(|| ConfigError::MalformedBinding(binding.to_owned()))?;
    let entry = NamespaceEntry::new(name.trim(), template);
    entry.validate()?;
    Ok(entry)
}
