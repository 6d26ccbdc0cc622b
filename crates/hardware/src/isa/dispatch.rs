//! Instruction Dispatch.
//!
//! This module maps opcode bytes to handlers. It provides:
//! 1. **Handler Trait:** [`Instruction`], implemented once per instruction.
//! 2. **Dispatch Table:** [`Dispatcher`], populated at construction and extensible afterwards.
//! 3. **Decode:** Opcode lookup that fails with a decode error instead of skipping.
//!
//! `HLT` is intercepted by the execution loop and is never placed in the table.

use std::collections::HashMap;
use std::fmt;

use crate::common::MachineError;
use crate::core::Cpu;
use crate::isa::instructions::{alu, basic, control, stack};
use crate::isa::opcodes;

/// The two operand bytes that follow an opcode.
///
/// Handlers that take fewer than two operands ignore the rest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Operands {
    /// First operand byte.
    pub a: u8,
    /// Second operand byte.
    pub b: u8,
}

impl Operands {
    /// Creates an operand pair.
    pub const fn new(a: u8, b: u8) -> Self {
        Self { a, b }
    }
}

/// How an operand byte is interpreted; used for disassembly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandKind {
    /// A general-purpose register index.
    Register,
    /// An immediate byte.
    Immediate,
}

/// An instruction handler.
///
/// A handler reads and writes the CPU and is solely responsible for the next PC: it either
/// advances it by its own length or assigns it outright.
pub trait Instruction: fmt::Debug + Send + Sync {
    /// Assembly mnemonic, e.g. `"LDI"`.
    fn mnemonic(&self) -> &'static str;

    /// Shape of the operand bytes this instruction consumes.
    fn operands(&self) -> &'static [OperandKind];

    /// Number of operand bytes this instruction consumes.
    fn operand_count(&self) -> usize {
        self.operands().len()
    }

    /// Encoded length in bytes (opcode plus operands).
    fn length(&self) -> usize {
        1 + self.operand_count()
    }

    /// Executes the instruction.
    ///
    /// # Errors
    ///
    /// Any [`MachineError`] raised by register, memory, or ALU access.
    fn execute(&self, cpu: &mut Cpu, opcode: u8, ops: Operands) -> Result<(), MachineError>;
}

/// Opcode-indexed table of instruction handlers.
#[derive(Debug)]
pub struct Dispatcher {
    table: HashMap<u8, Box<dyn Instruction>>,
}

impl Dispatcher {
    /// Creates a dispatcher holding the full LS8 instruction set (except `HLT`).
    pub fn new() -> Self {
        let mut dispatcher = Self::empty();

        dispatcher.register(opcodes::NOP, Box::new(basic::Nop));
        dispatcher.register(opcodes::LDI, Box::new(basic::Ldi));
        dispatcher.register(opcodes::PRN, Box::new(basic::Prn));

        dispatcher.register(opcodes::PUSH, Box::new(stack::Push));
        dispatcher.register(opcodes::POP, Box::new(stack::Pop));

        dispatcher.register(opcodes::CALL, Box::new(control::Call));
        dispatcher.register(opcodes::RET, Box::new(control::Ret));
        dispatcher.register(opcodes::JMP, Box::new(control::Jmp));
        dispatcher.register(opcodes::JEQ, Box::new(control::Jeq));
        dispatcher.register(opcodes::JNE, Box::new(control::Jne));

        dispatcher.register(opcodes::ADD, Box::new(alu::AluInstruction::new("ADD")));
        dispatcher.register(opcodes::MUL, Box::new(alu::AluInstruction::new("MUL")));
        dispatcher.register(opcodes::CMP, Box::new(alu::AluInstruction::new("CMP")));

        dispatcher
    }

    /// Creates a dispatcher with no handlers.
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Installs `handler` for `opcode`, replacing any existing handler.
    pub fn register(&mut self, opcode: u8, handler: Box<dyn Instruction>) {
        if let Some(old) = self.table.insert(opcode, handler) {
            tracing::debug!(opcode, replaced = old.mnemonic(), "handler replaced");
        }
    }

    /// Returns the handler for `opcode`, if any.
    pub fn lookup(&self, opcode: u8) -> Option<&dyn Instruction> {
        self.table.get(&opcode).map(|handler| handler.as_ref())
    }

    /// Resolves `opcode` fetched at `pc` to its handler.
    ///
    /// # Errors
    ///
    /// [`MachineError::DecodeFailure`] if no handler is registered.
    pub fn decode(&self, opcode: u8, pc: usize) -> Result<&dyn Instruction, MachineError> {
        self.lookup(opcode)
            .ok_or(MachineError::DecodeFailure { opcode, pc })
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
