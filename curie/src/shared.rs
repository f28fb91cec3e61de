//! Thread-safe registry with snapshot-on-write updates.
//!
//! Readers load the current [`NamespaceRegistry`] snapshot through
//! [`ArcSwap`] and never block. Writers serialize on a mutex, copy the
//! snapshot, apply their change and publish the new table in one store, so
//! a reader sees either the whole registration or none of it.

use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;

use crate::registry::NamespaceRegistry;
use crate::template::Template;

/// A [`NamespaceRegistry`] shareable across threads.
///
/// ```
/// use std::sync::Arc;
/// use hal_curie::SharedRegistry;
///
/// let shared = Arc::new(SharedRegistry::new());
/// shared.add("rel", "http://example.com/rels/{rel}");
///
/// let reader = Arc::clone(&shared);
/// let handle = std::thread::spawn(move || reader.expand("rel:next"));
/// assert_eq!(
///     handle.join().unwrap().as_deref(),
///     Some("http://example.com/rels/next")
/// );
/// ```
#[derive(Debug)]
pub struct SharedRegistry {
    current: ArcSwap<NamespaceRegistry>,
    writer: Mutex<()>,
}

impl SharedRegistry {
    /// Creates an empty shared registry.
    #[must_use]
    pub fn new() -> Self {
        Self::from(NamespaceRegistry::new())
    }

    /// Registers `template` under `name` and publishes a new snapshot.
    pub fn add(&self, name: impl Into<String>, template: impl Into<Template>) -> &Self {
        let _guard = self.writer.lock();
        let mut next = NamespaceRegistry::clone(&self.current.load());
        next.add(name, template);
        self.current.store(Arc::new(next));
        self
    }

    /// Removes `name` and publishes a new snapshot if it was registered.
    pub fn remove(&self, name: &str) -> Option<Template> {
        let _guard = self.writer.lock();
        let mut next = NamespaceRegistry::clone(&self.current.load());
        let removed = next.remove(name)?;
        self.current.store(Arc::new(next));
        Some(removed)
    }

    /// Replaces the whole table at once.
    pub fn replace(&self, registry: NamespaceRegistry) {
        let _guard = self.writer.lock();
        self.current.store(Arc::new(registry));
    }

    /// The registry as of this call. Later writes do not affect it.
    #[must_use]
    pub fn snapshot(&self) -> Arc<NamespaceRegistry> {
        self.current.load_full()
    }

    /// See [`NamespaceRegistry::compact`].
    #[must_use]
    pub fn compact(&self, uri: &str) -> Option<String> {
        self.current.load().compact(uri)
    }

    /// See [`NamespaceRegistry::expand`].
    #[must_use]
    pub fn expand(&self, curie: &str) -> Option<String> {
        self.current.load().expand(curie)
    }
}

impl Default for SharedRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl From<NamespaceRegistry> for SharedRegistry {
    fn from(registry: NamespaceRegistry) -> Self {
        Self {
            current: ArcSwap::from_pointee(registry),
            writer: Mutex::new(()),
        }
    }
}
