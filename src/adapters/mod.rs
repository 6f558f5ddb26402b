//! Adapter implementations of the discovery ports.

pub mod memory;
