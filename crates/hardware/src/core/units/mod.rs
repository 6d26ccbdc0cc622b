//! Execution units.

/// Arithmetic logic unit (ADD, MUL, CMP).
pub mod alu;
