//! Common utilities and types used throughout the emulator.
//!
//! This module provides the building blocks shared across all components:
//! 1. **Constants:** Memory size, register count, stack pointer conventions.
//! 2. **Error Handling:** The fatal error taxonomy of a machine run and loader errors.

/// Machine-wide constants.
pub mod constants;

/// Error types for execution and loading.
pub mod error;

pub use constants::{MEMORY_SIZE, NUM_REGISTERS, SP_DEFAULT, SP_INDEX};
pub use error::{LoaderError, MachineError};
