//! ALU arithmetic operations.
//!
//! Registers are unsigned bytes and there is no carry or overflow flag, so every result
//! wraps modulo 256.

use super::AluOp;

/// Executes an arithmetic operation.
///
/// Returns `a` unchanged for non-arithmetic operations; [`Alu::execute`](super::Alu::execute)
/// never routes `Cmp` here.
pub const fn execute(op: AluOp, a: u8, b: u8) -> u8 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Mul => a.wrapping_mul(b),
        AluOp::Cmp => a,
    }
}
