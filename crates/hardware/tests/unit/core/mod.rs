//! Core component tests.

/// Architectural register tests.
pub mod arch;

/// Execution unit tests.
pub mod units;
