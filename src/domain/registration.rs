//! Registry-side record for a registered source.

use super::{Source, SourceId, SourceName};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::fmt;

/// A source together with the registry metadata recorded when it was added.
pub struct SourceRegistration<S: ?Sized> {
    source: Source<S>,
    registered_at: DateTime<Utc>,
}

impl<S: ?Sized> SourceRegistration<S> {
    /// Creates a registration record stamped from the given clock.
    #[must_use]
    pub fn new(source: Source<S>, clock: &dyn Clock) -> Self {
        Self {
            source,
            registered_at: clock.utc(),
        }
    }

    /// Returns the registered source.
    #[must_use]
    pub const fn source(&self) -> &Source<S> {
        &self.source
    }

    /// Returns the source identifier.
    #[must_use]
    pub const fn id(&self) -> SourceId {
        self.source.id()
    }

    /// Returns the source name.
    #[must_use]
    pub const fn name(&self) -> &SourceName {
        self.source.name()
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Consumes the record, returning the source to the caller.
    #[must_use]
    pub fn into_source(self) -> Source<S> {
        self.source
    }
}

impl<S: ?Sized> Clone for SourceRegistration<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            registered_at: self.registered_at,
        }
    }
}

impl<S: ?Sized> fmt::Debug for SourceRegistration<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceRegistration")
            .field("source", &self.source)
            .field("registered_at", &self.registered_at)
            .finish()
    }
}
