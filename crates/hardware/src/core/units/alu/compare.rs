//! ALU comparison.
//!
//! `CMP` replaces FL wholesale; the previous flag is never merged with the new one.

use crate::core::arch::Flag;

/// Compares two unsigned register values.
pub const fn execute(a: u8, b: u8) -> Flag {
    Flag::compare(a, b)
}
