//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the LS8 opcode encoding, the instruction handlers, the opcode-indexed
//! dispatcher, and a disassembler for diagnostics.
//!
//! Instruction length is a property of each handler. The opcode's high bits also happen to
//! encode the operand count, but nothing here relies on that.

/// Instruction disassembler for debug tracing and listings.
pub mod disasm;

/// Opcode-to-handler dispatch table and the handler trait.
pub mod dispatch;

/// Instruction handler implementations.
pub mod instructions;

/// Opcode byte constants.
pub mod opcodes;

pub use dispatch::{Dispatcher, Instruction, OperandKind, Operands};
