//! Instruction Handlers.
//!
//! One unit struct per instruction, grouped by category:
//! - [`basic`]:   NOP, LDI, PRN
//! - [`stack`]:   PUSH, POP
//! - [`control`]: CALL, RET, JMP, JEQ, JNE
//! - [`alu`]:     ADD, MUL, CMP (one shared handler)
//!
//! Every handler either advances the PC by its own length or overwrites it.

/// ALU-backed instructions.
pub mod alu;

/// Straight-line instructions without stack or ALU involvement.
pub mod basic;

/// Jumps, calls, and returns.
pub mod control;

/// Stack instructions.
pub mod stack;

use crate::isa::dispatch::OperandKind;

/// Operand shape of instructions that take nothing.
pub(crate) const NO_OPERANDS: &[OperandKind] = &[];

/// Operand shape of single-register instructions.
pub(crate) const REG: &[OperandKind] = &[OperandKind::Register];

/// Operand shape of register-register instructions.
pub(crate) const REG_REG: &[OperandKind] = &[OperandKind::Register, OperandKind::Register];

/// Operand shape of register-immediate instructions.
pub(crate) const REG_IMM: &[OperandKind] = &[OperandKind::Register, OperandKind::Immediate];
