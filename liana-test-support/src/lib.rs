//! Shared test utilities used across liana crates.

pub mod ci;
pub mod tracing;
