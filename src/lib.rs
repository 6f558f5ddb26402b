//! Servitor: a managed service-discovery layer.
//!
//! Given an abstract capability type (an SPI, expressed as a generic
//! parameter such as `dyn Codec`), this crate lets a caller register and
//! unregister discovery sources at runtime and obtain a combined lazy
//! sequence of all provider instances across the currently registered
//! sources.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: source identity and registration records, in [`domain`]
//! - **Ports**: the per-source [`ports::ProviderCatalog`] enumeration
//!   contract
//! - **Adapters**: concrete catalog implementations, in [`adapters`]
//! - **Services**: the [`services::ServiceRegistry`] facade
//!
//! # Threading
//!
//! The registry is a plain caller-owned value and performs no internal
//! synchronization. Multi-threaded use requires external locking.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use servitor::adapters::memory::InMemoryCatalog;
//! use servitor::domain::{Source, SourceName};
//! use servitor::services::ServiceRegistry;
//!
//! trait Greeter {
//!     fn greet(&self) -> String;
//! }
//!
//! struct English;
//!
//! impl Greeter for English {
//!     fn greet(&self) -> String {
//!         "hello".to_owned()
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = InMemoryCatalog::new().with_provider(|| Box::new(English) as Box<dyn Greeter>);
//! let source = Source::new(SourceName::new("builtin")?, Arc::new(catalog));
//!
//! let mut registry = ServiceRegistry::<dyn Greeter>::new();
//! registry.add(source)?;
//!
//! let greetings: Vec<String> = registry
//!     .discover_all()
//!     .map(|item| item.map(|greeter| greeter.greet()))
//!     .collect::<Result<_, _>>()?;
//! assert_eq!(greetings, vec!["hello".to_owned()]);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
