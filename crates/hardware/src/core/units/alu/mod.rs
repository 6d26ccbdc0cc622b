//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the LS8 ALU. It handles the two arithmetic operations and the
//! comparison that drives conditional jumps.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Mul (unsigned, wrapping modulo 256)
//! - [`compare`]:    Cmp (produces a [`Flag`])

/// Wrapping 8-bit arithmetic (add, multiply).
pub mod arithmetic;

/// Ordering comparison producing the FL value.
pub mod compare;

use crate::common::MachineError;
use crate::core::arch::Flag;
use crate::isa::opcodes;

/// Operations the ALU understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `a + b` modulo 256.
    Add,
    /// `a * b` modulo 256.
    Mul,
    /// Orders `a` against `b` and sets FL.
    Cmp,
}

impl AluOp {
    /// Maps an opcode byte to its ALU operation.
    ///
    /// # Errors
    ///
    /// [`MachineError::InvariantViolation`] for any opcode other than ADD, MUL, or CMP.
    pub const fn from_opcode(opcode: u8) -> Result<Self, MachineError> {
        match opcode {
            opcodes::ADD => Ok(Self::Add),
            opcodes::MUL => Ok(Self::Mul),
            opcodes::CMP => Ok(Self::Cmp),
            _ => Err(MachineError::InvariantViolation { opcode }),
        }
    }
}

/// What an ALU operation produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOutput {
    /// A value to store back into the first operand register.
    Value(u8),
    /// A new FL value; registers are unchanged.
    Flag(Flag),
}

/// Arithmetic Logic Unit for the LS8.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation on two register values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::arch::Flag;
    /// use ls8_core::core::units::alu::{Alu, AluOp, AluOutput};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 8, 9), AluOutput::Value(17));
    /// assert_eq!(Alu::execute(AluOp::Add, 250, 10), AluOutput::Value(4));
    /// assert_eq!(Alu::execute(AluOp::Mul, 16, 16), AluOutput::Value(0));
    /// assert_eq!(Alu::execute(AluOp::Cmp, 3, 5), AluOutput::Flag(Flag::LessThan));
    /// ```
    pub const fn execute(op: AluOp, a: u8, b: u8) -> AluOutput {
        match op {
            AluOp::Add | AluOp::Mul => AluOutput::Value(arithmetic::execute(op, a, b)),
            AluOp::Cmp => AluOutput::Flag(compare::execute(a, b)),
        }
    }
}
