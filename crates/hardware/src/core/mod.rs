//! Core processor implementation.
//!
//! This module contains the CPU aggregate, its architectural registers, and the
//! execution units that operate on them.

/// Architecture-specific components (general-purpose registers, flags).
pub mod arch;

/// CPU state and its memory/stack helpers.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
