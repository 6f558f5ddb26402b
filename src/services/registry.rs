//! The service registry facade.
//!
//! Provides [`ServiceRegistry`] which manages discovery sources for one SPI
//! and produces the combined lazy sequence of provider instances across all
//! currently registered sources.

use crate::domain::{Source, SourceId, SourceRegistration};
use crate::ports::{CatalogError, ProviderCatalog};
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by registry operations.
#[derive(Debug, Error)]
pub enum ServiceRegistryError {
    /// A source with the same identifier is already registered.
    #[error("source already registered: {0}")]
    DuplicateSource(SourceId),

    /// A catalog failed while enumerating providers for a source.
    #[error("discovery failed for source {source}: {cause}")]
    Discovery {
        /// Identifier of the source whose catalog failed.
        source: SourceId,
        /// The underlying catalog failure.
        #[source]
        cause: CatalogError,
    },
}

/// Result type for registry operations.
pub type ServiceRegistryResult<T> = Result<T, ServiceRegistryError>;

/// Per-source discovery handle, created eagerly when a source is added.
///
/// The handle binds the source's catalog to its identifier so that
/// enumeration failures can be attributed. Enumeration through it stays
/// lazy.
struct DiscoveryHandle<S: ?Sized> {
    source: SourceId,
    catalog: Arc<dyn ProviderCatalog<S>>,
}

impl<S: ?Sized> DiscoveryHandle<S> {
    fn new(source: &Source<S>) -> Self {
        Self {
            source: source.id(),
            catalog: source.catalog(),
        }
    }

    /// Returns a fresh lazy enumerator over this source's instances.
    fn instances(&self) -> impl Iterator<Item = ServiceRegistryResult<Box<S>>> + use<S> {
        let source = self.source;
        self.catalog
            .providers()
            .map(move |item| item.map_err(|cause| ServiceRegistryError::Discovery { source, cause }))
    }
}

/// Managed set of discovery sources for the SPI `S`.
///
/// The registry keeps two parallel mappings keyed by [`SourceId`]: the
/// registered sources and their eagerly created discovery handles. The key
/// sets of the two mappings are always identical. Iteration and discovery
/// follow registration order.
///
/// The registry is a plain caller-owned value with no interior locking; it
/// is not safe for unsynchronized concurrent mutation. Callers that need
/// multi-threaded access must provide their own synchronization.
pub struct ServiceRegistry<S: ?Sized> {
    clock: Box<dyn Clock>,
    sources: HashMap<SourceId, SourceRegistration<S>>,
    handles: HashMap<SourceId, DiscoveryHandle<S>>,
    order: Vec<SourceId>,
}

impl<S: ?Sized> ServiceRegistry<S> {
    /// Creates an empty registry using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(DefaultClock)
    }

    /// Creates an empty registry stamping registrations from the given
    /// clock.
    #[must_use]
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            sources: HashMap::new(),
            handles: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Adds a source to the registry.
    ///
    /// The source's discovery handle is created eagerly; enumeration
    /// through it stays lazy until [`Self::discover_all`] is consumed.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceRegistryError::DuplicateSource`] when a source with
    /// the same identifier is already registered. Prior registry state is
    /// left unchanged.
    pub fn add(&mut self, source: Source<S>) -> ServiceRegistryResult<SourceId> {
        let id = source.id();
        if self.sources.contains_key(&id) {
            return Err(ServiceRegistryError::DuplicateSource(id));
        }

        let handle = DiscoveryHandle::new(&source);
        let registration = SourceRegistration::new(source, &*self.clock);
        self.sources.insert(id, registration);
        self.handles.insert(id, handle);
        self.order.push(id);
        Ok(id)
    }

    /// Removes a source by identifier.
    ///
    /// Returns the removed source, or `None` when no source has the given
    /// identifier. The source's discovery handle and registration record
    /// are discarded with it.
    pub fn remove(&mut self, id: SourceId) -> Option<Source<S>> {
        let registration = self.sources.remove(&id)?;
        self.handles.remove(&id);
        self.order.retain(|registered| *registered != id);
        Some(registration.into_source())
    }

    /// Removes a source by object, keyed on its identifier.
    ///
    /// Returns whether a source was removed.
    pub fn remove_source(&mut self, source: &Source<S>) -> bool {
        self.remove(source.id()).is_some()
    }

    /// Returns the source registered under the given identifier.
    #[must_use]
    pub fn get(&self, id: SourceId) -> Option<&Source<S>> {
        self.sources.get(&id).map(SourceRegistration::source)
    }

    /// Returns the registration record for the given identifier.
    #[must_use]
    pub fn registration(&self, id: SourceId) -> Option<&SourceRegistration<S>> {
        self.sources.get(&id)
    }

    /// Returns whether a source is registered under the given identifier.
    #[must_use]
    pub fn contains(&self, id: SourceId) -> bool {
        self.sources.contains_key(&id)
    }

    /// Returns the number of registered sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether the registry has no registered sources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates over registered sources in registration order.
    ///
    /// The view is read-only; registry state cannot be mutated through it.
    pub fn sources(&self) -> impl Iterator<Item = &Source<S>> {
        self.registrations().map(SourceRegistration::source)
    }

    /// Iterates over registration records in registration order.
    pub fn registrations(&self) -> impl Iterator<Item = &SourceRegistration<S>> {
        self.order.iter().filter_map(|id| self.sources.get(id))
    }

    /// Returns the combined lazy sequence of provider instances across all
    /// currently registered sources, in registration order.
    ///
    /// The sequence is finite, freshly re-enumerated on each call, and not
    /// restartable once consumed. Catalog failures surface as
    /// [`ServiceRegistryError::Discovery`] items carrying the offending
    /// source identifier and the original cause; they do not terminate the
    /// sequence.
    pub fn discover_all(&self) -> impl Iterator<Item = ServiceRegistryResult<Box<S>>> {
        self.order
            .iter()
            .filter_map(|id| self.handles.get(id))
            .flat_map(DiscoveryHandle::instances)
    }
}

impl<S: ?Sized> Default for ServiceRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized> std::fmt::Debug for ServiceRegistry<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("sources", &self.order)
            .finish_non_exhaustive()
    }
}
