//! Unit tests for the discovery domain, catalog adapter, and registry.
