//! Domain model for managed service discovery.
//!
//! The discovery domain models caller-owned sources, their validated
//! labels, and the registration records kept per source. All enumeration
//! machinery is kept outside the domain boundary.

mod error;
mod ids;
mod name;
mod registration;
mod source;

pub use error::SourceDomainError;
pub use ids::SourceId;
pub use name::SourceName;
pub use registration::SourceRegistration;
pub use source::Source;
