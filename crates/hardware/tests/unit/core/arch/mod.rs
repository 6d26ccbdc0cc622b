//! Architectural state tests.

/// Comparison flag tests.
pub mod flags;
