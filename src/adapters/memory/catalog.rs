//! In-memory provider catalog built from caller-registered factories.

use crate::ports::{CatalogResult, ProviderCatalog, ProviderIter};
use std::fmt;
use std::sync::Arc;

type ProviderFactory<S> = Arc<dyn Fn() -> CatalogResult<Box<S>>>;

/// In-memory catalog over caller-registered provider factories.
///
/// This adapter is the explicit stand-in for a resolution context: callers
/// that assemble their capability sets programmatically register one
/// factory per provider. Enumeration invokes the factories lazily in
/// registration order, and every [`ProviderCatalog::providers`] call
/// re-enumerates from scratch.
pub struct InMemoryCatalog<S: ?Sized> {
    factories: Vec<ProviderFactory<S>>,
}

impl<S: ?Sized> InMemoryCatalog<S> {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a provider factory.
    ///
    /// The factory runs once per enumerated instance, only when the
    /// enumerator reaches it.
    #[must_use]
    pub fn with_provider(mut self, factory: impl Fn() -> Box<S> + 'static) -> Self {
        self.factories.push(Arc::new(move || Ok(factory())));
        self
    }

    /// Registers a provider factory that may fail.
    ///
    /// Failures surface as [`CatalogError`](crate::ports::CatalogError)
    /// items during enumeration.
    #[must_use]
    pub fn with_fallible_provider(
        mut self,
        factory: impl Fn() -> CatalogResult<Box<S>> + 'static,
    ) -> Self {
        self.factories.push(Arc::new(factory));
        self
    }

    /// Returns the number of registered provider factories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns whether the catalog has no registered factories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl<S: ?Sized> Default for InMemoryCatalog<S> {
    fn default() -> Self {
        Self {
            factories: Vec::new(),
        }
    }
}

impl<S: ?Sized + 'static> ProviderCatalog<S> for InMemoryCatalog<S> {
    fn providers(&self) -> ProviderIter<S> {
        Box::new(
            self.factories
                .clone()
                .into_iter()
                .map(|factory| (*factory)()),
        )
    }
}

impl<S: ?Sized> fmt::Debug for InMemoryCatalog<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryCatalog")
            .field("factories", &self.factories.len())
            .finish()
    }
}
