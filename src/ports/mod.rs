//! Port contracts for managed service discovery.

mod catalog;

pub use catalog::{CatalogError, CatalogResult, ProviderCatalog, ProviderIter};
