//! Step definitions for service discovery BDD scenarios.

pub mod then;
pub mod when;
