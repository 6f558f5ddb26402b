//! In-memory adapter implementations.

mod catalog;

pub use catalog::InMemoryCatalog;
