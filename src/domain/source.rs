//! The caller-owned discovery source entity.

use super::{SourceId, SourceName};
use crate::ports::ProviderCatalog;
use std::fmt;
use std::sync::Arc;

/// A caller-defined origin from which implementations of the SPI `S` may be
/// discovered.
///
/// A source pairs a unique, externally assigned identifier with a handle to
/// the catalog that enumerates implementations on its behalf. Sources are
/// created and owned by the caller; the registry never constructs one.
pub struct Source<S: ?Sized> {
    id: SourceId,
    name: SourceName,
    catalog: Arc<dyn ProviderCatalog<S>>,
}

impl<S: ?Sized> Source<S> {
    /// Creates a source with a freshly generated identifier.
    #[must_use]
    pub fn new(name: SourceName, catalog: Arc<dyn ProviderCatalog<S>>) -> Self {
        Self::with_id(SourceId::new(), name, catalog)
    }

    /// Creates a source with a caller-assigned identifier.
    #[must_use]
    pub fn with_id(id: SourceId, name: SourceName, catalog: Arc<dyn ProviderCatalog<S>>) -> Self {
        Self { id, name, catalog }
    }

    /// Returns the source identifier.
    #[must_use]
    pub const fn id(&self) -> SourceId {
        self.id
    }

    /// Returns the source name.
    #[must_use]
    pub const fn name(&self) -> &SourceName {
        &self.name
    }

    /// Returns a handle to the catalog backing this source.
    #[must_use]
    pub fn catalog(&self) -> Arc<dyn ProviderCatalog<S>> {
        Arc::clone(&self.catalog)
    }
}

impl<S: ?Sized> Clone for Source<S> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            catalog: Arc::clone(&self.catalog),
        }
    }
}

impl<S: ?Sized> fmt::Debug for Source<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<S: ?Sized> fmt::Display for Source<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
