//! Namespace registry — ordered collection of `name → template` bindings.
//!
//! Compaction walks the bindings in registration order and the first
//! template that matches wins. Re-registering a name replaces its template
//! but keeps its original position, so compaction order only ever changes
//! when a new name is added or an old one is removed.
//!
//! # Examples
//!
//! ```
//! use hal_curie::NamespaceRegistry;
//!
//! let mut reg = NamespaceRegistry::new();
//! reg.add("rel", "http://example.com/rels/{rel}")
//!    .add("x", "http://x.io/{rel}/item");
//!
//! assert_eq!(reg.compact("http://example.com/rels/next").as_deref(), Some("rel:next"));
//! assert_eq!(reg.expand("x:42").as_deref(), Some("http://x.io/42/item"));
//! assert_eq!(reg.compact("http://other.io/42/item"), None);
//! ```

use tracing::{debug, trace};

use crate::curie::{Curie, SEPARATOR};
use crate::template::Template;

/// Ordered `name → template` map with CURIE compaction and expansion.
///
/// Names are unique keys. Lookup by name is linear; registries are small
/// (a handful of link-relation namespaces) and compaction has to scan every
/// entry anyway.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceRegistry {
    entries: Vec<(String, Template)>,
}

impl NamespaceRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `template` under `name`, replacing any previous binding.
    ///
    /// Never fails. Templates without the placeholder are stored but stay
    /// inert. Returns `self` for chaining.
    pub fn add(&mut self, name: impl Into<String>, template: impl Into<Template>) -> &mut Self {
        let name = name.into();
        let template = template.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => {
                debug!(%name, old = %slot, new = %template, "namespace overwritten");
                *slot = template;
            }
            None => {
                debug!(%name, %template, "namespace registered");
                self.entries.push((name, template));
            }
        }
        self
    }

    /// Owning variant of [`add`](Self::add) for builder-style construction.
    ///
    /// ```
    /// use hal_curie::NamespaceRegistry;
    ///
    /// let reg = NamespaceRegistry::new()
    ///     .with("y", "http://y.io/a{rel}b");
    /// assert_eq!(reg.compact("http://y.io/ab").as_deref(), Some("y:"));
    /// ```
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, template: impl Into<Template>) -> Self {
        self.add(name, template);
        self
    }

    /// Removes the binding for `name`, returning its template.
    pub fn remove(&mut self, name: &str) -> Option<Template> {
        let idx = self.entries.iter().position(|(n, _)| n == name)?;
        let (_, template) = self.entries.remove(idx);
        debug!(%name, "namespace removed");
        Some(template)
    }

    /// The template registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t)
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of registered namespaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no namespace is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, template)` pairs in compaction order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Template)> + '_ {
        self.entries.iter().map(|(n, t)| (n.as_str(), t))
    }

    /// Registered names in compaction order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Compacts an expanded URI into `name:value` form.
    ///
    /// The first registered template whose literal prefix and suffix both
    /// match `uri` (without overlapping) supplies the name. Returns `None`
    /// if no template matches.
    #[must_use]
    pub fn compact(&self, uri: &str) -> Option<String> {
        let found = self
            .entries
            .iter()
            .find_map(|(name, template)| template.capture(uri).map(|value| (name, value)));
        match found {
            Some((name, value)) => {
                trace!(%uri, %name, %value, "compacted");
                let mut curie = String::with_capacity(name.len() + 1 + value.len());
                curie.push_str(name);
                curie.push(SEPARATOR);
                curie.push_str(value);
                Some(curie)
            }
            None => {
                trace!(%uri, "no namespace matches");
                None
            }
        }
    }

    /// Expands a `name:value` CURIE into its full URI.
    ///
    /// Returns `None` when the input has no colon, the name is unknown, or
    /// the registered template has no placeholder.
    #[must_use]
    pub fn expand(&self, curie: &str) -> Option<String> {
        let Some(parsed) = Curie::parse(curie) else {
            trace!(%curie, "not a CURIE");
            return None;
        };
        let expanded = self
            .get(parsed.prefix())
            .and_then(|template| template.fill(parsed.reference()));
        trace!(%curie, found = expanded.is_some(), "expanded");
        expanded
    }
}

impl<N, T> FromIterator<(N, T)> for NamespaceRegistry
where
    N: Into<String>,
    T: Into<Template>,
{
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        let mut reg = Self::new();
        reg.extend(iter);
        reg
    }
}

impl<N, T> Extend<(N, T)> for NamespaceRegistry
where
    N: Into<String>,
    T: Into<Template>,
{
    fn extend<I: IntoIterator<Item = (N, T)>>(&mut self, iter: I) {
        for (name, template) in iter {
            self.add(name, template);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_trailing_placeholder() {
        let mut reg = NamespaceRegistry::new();
        reg.add("rel", "http://example.com/rels/{rel}");
        assert_eq!(
            reg.compact("http://example.com/rels/next").as_deref(),
            Some("rel:next")
        );
        assert_eq!(
            reg.expand("rel:next").as_deref(),
            Some("http://example.com/rels/next")
        );
    }

    #[test]
    fn scenario_middle_placeholder() {
        let reg = NamespaceRegistry::new().with("x", "http://x.io/{rel}/item");
        assert_eq!(reg.compact("http://x.io/42/item").as_deref(), Some("x:42"));
        assert_eq!(reg.compact("http://other.io/42/item"), None);
    }

    #[test]
    fn scenario_empty_capture() {
        let reg = NamespaceRegistry::new().with("y", "http://y.io/a{rel}b");
        assert_eq!(reg.compact("http://y.io/ab").as_deref(), Some("y:"));
        assert_eq!(reg.expand("y:").as_deref(), Some("http://y.io/ab"));
    }

    #[test]
    fn empty_registry_matches_nothing() {
        let reg = NamespaceRegistry::new();
        assert!(reg.is_empty());
        assert_eq!(reg.compact("http://example.com/"), None);
        assert_eq!(reg.expand("rel:next"), None);
    }

    #[test]
    fn expand_without_colon() {
        let reg = NamespaceRegistry::new().with("rel", "{rel}");
        assert_eq!(reg.expand("no-colon-here"), None);
    }

    #[test]
    fn expand_unknown_prefix() {
        let reg = NamespaceRegistry::new().with("rel", "http://e.com/{rel}");
        assert_eq!(reg.expand("other:next"), None);
    }

    #[test]
    fn expand_keeps_later_colons() {
        let reg = NamespaceRegistry::new().with("urn", "urn:{rel}");
        assert_eq!(reg.expand("urn:isbn:0451450523").as_deref(), Some("urn:isbn:0451450523"));
    }

    #[test]
    fn inert_template_never_matches_or_expands() {
        let reg = NamespaceRegistry::new().with("dead", "http://dead.io/");
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.compact("http://dead.io/"), None);
        assert_eq!(reg.expand("dead:x"), None);
    }

    #[test]
    fn inert_template_is_skipped_during_compaction() {
        let reg = NamespaceRegistry::new()
            .with("dead", "http://e.com/")
            .with("live", "http://e.com/{rel}");
        assert_eq!(reg.compact("http://e.com/x").as_deref(), Some("live:x"));
    }

    #[test]
    fn bare_placeholder_captures_whole_uri() {
        let reg = NamespaceRegistry::new().with("any", "{rel}");
        assert_eq!(
            reg.compact("http://example.com/x?y=z").as_deref(),
            Some("any:http://example.com/x?y=z")
        );
    }

    #[test]
    fn short_uri_cannot_match_overlapping_template() {
        let reg = NamespaceRegistry::new().with("o", "ab{rel}ba");
        assert_eq!(reg.compact("aba"), None);
        assert_eq!(reg.compact("abba").as_deref(), Some("o:"));
    }

    #[test]
    fn first_registered_match_wins() {
        let reg = NamespaceRegistry::new()
            .with("specific", "http://e.com/rels/{rel}")
            .with("generic", "http://e.com/{rel}");
        assert_eq!(
            reg.compact("http://e.com/rels/next").as_deref(),
            Some("specific:next")
        );

        let reversed = NamespaceRegistry::new()
            .with("generic", "http://e.com/{rel}")
            .with("specific", "http://e.com/rels/{rel}");
        assert_eq!(
            reversed.compact("http://e.com/rels/next").as_deref(),
            Some("generic:rels/next")
        );
    }

    #[test]
    fn overwrite_uses_latest_template() {
        let mut reg = NamespaceRegistry::new();
        reg.add("ns", "http://one.io/{rel}")
            .add("ns", "http://two.io/{rel}");
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.expand("ns:a").as_deref(), Some("http://two.io/a"));
        assert_eq!(reg.compact("http://one.io/a"), None);
        assert_eq!(reg.compact("http://two.io/a").as_deref(), Some("ns:a"));
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut reg = NamespaceRegistry::new();
        reg.add("a", "http://e.com/{rel}")
            .add("b", "http://e.com/{rel}")
            .add("a", "http://e.com/{rel}");
        assert_eq!(reg.names().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(reg.compact("http://e.com/x").as_deref(), Some("a:x"));
    }

    #[test]
    fn readding_same_binding_is_idempotent() {
        let once = NamespaceRegistry::new().with("ns", "http://e.com/{rel}");
        let twice = once.clone().with("ns", "http://e.com/{rel}");
        assert_eq!(once, twice);
    }

    #[test]
    fn expand_substitutes_first_placeholder_only() {
        let reg = NamespaceRegistry::new().with("d", "http://d.io/{rel}/{rel}");
        assert_eq!(reg.expand("d:v").as_deref(), Some("http://d.io/v/{rel}"));
    }

    #[test]
    fn remove_drops_binding() {
        let mut reg = NamespaceRegistry::new()
            .with("a", "http://a.io/{rel}")
            .with("b", "http://b.io/{rel}");
        assert_eq!(reg.remove("a"), Some(Template::new("http://a.io/{rel}")));
        assert_eq!(reg.remove("a"), None);
        assert!(!reg.contains("a"));
        assert_eq!(reg.expand("a:x"), None);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn collect_from_pairs() {
        let reg: NamespaceRegistry = [
            ("a", "http://a.io/{rel}"),
            ("b", "http://b.io/{rel}"),
            ("a", "http://c.io/{rel}"),
        ]
        .into_iter()
        .collect();
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get("a").map(Template::as_str), Some("http://c.io/{rel}"));
        let pairs: Vec<_> = reg.iter().map(|(n, t)| (n, t.as_str())).collect();
        assert_eq!(pairs, [("a", "http://c.io/{rel}"), ("b", "http://b.io/{rel}")]);
    }
}
