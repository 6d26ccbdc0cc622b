//! Execution unit tests.

/// ALU tests.
pub mod alu;
