//! Orchestration services for managed service discovery.

mod registry;

pub use registry::{ServiceRegistry, ServiceRegistryError, ServiceRegistryResult};
