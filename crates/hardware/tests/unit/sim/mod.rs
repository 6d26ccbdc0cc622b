//! Simulation loop tests.




/// Strict and lenient operand fetch at the top of memory.
pub mod fetch_policy;

/// Program files on disk.
pub mod loader;
