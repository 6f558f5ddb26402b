//! Catalog port for per-source provider enumeration.

use std::sync::Arc;
use thiserror::Error;

/// Result type for catalog enumeration.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// A fresh lazy enumerator over provider instances of the SPI `S`.
pub type ProviderIter<S> = Box<dyn Iterator<Item = CatalogResult<Box<S>>>>;

/// Per-source provider enumeration contract.
///
/// A catalog replaces implicit classpath scanning with an explicit
/// registration surface: each implementation owns whatever resolution
/// context it needs and enumerates provider instances on demand. Catalogs
/// are supplied per source by the caller and shared with the registry via
/// `Arc`.
pub trait ProviderCatalog<S: ?Sized> {
    /// Returns a fresh lazy iterator over provider instances.
    ///
    /// Each call re-enumerates from scratch; a returned iterator is finite
    /// and not restartable once consumed. Enumeration failures surface as
    /// [`CatalogError`] items rather than terminating the iterator.
    fn providers(&self) -> ProviderIter<S>;
}

/// Errors raised by catalog implementations while enumerating providers.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The catalog failed to enumerate its providers.
    #[error("provider enumeration failed: {0}")]
    Enumeration(Arc<dyn std::error::Error + Send + Sync>),

    /// A provider instance could not be constructed.
    #[error("provider construction failed: {0}")]
    Construction(Arc<dyn std::error::Error + Send + Sync>),
}

impl CatalogError {
    /// Wraps an error raised while enumerating providers.
    pub fn enumeration(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Enumeration(Arc::new(err))
    }

    /// Wraps an error raised while constructing a provider instance.
    pub fn construction(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Construction(Arc::new(err))
    }
}
