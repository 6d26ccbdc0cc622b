//! Straight-line instructions: NOP, LDI, PRN.

use super::{NO_OPERANDS, REG, REG_IMM};
use crate::common::MachineError;
use crate::common::constants::{INSTRUCTION_SIZE_1, INSTRUCTION_SIZE_2, INSTRUCTION_SIZE_3};
use crate::core::Cpu;
use crate::isa::dispatch::{Instruction, OperandKind, Operands};

/// `NOP`: no state change.
#[derive(Debug, Clone, Copy)]
pub struct Nop;

impl Instruction for Nop {
    fn mnemonic(&self) -> &'static str {
        "NOP"
    }

    fn operands(&self) -> &'static [OperandKind] {
        NO_OPERANDS
    }

    fn execute(&self, cpu: &mut Cpu, _opcode: u8, _ops: Operands) -> Result<(), MachineError> {
        cpu.advance_pc(INSTRUCTION_SIZE_1);
        Ok(())
    }
}

/// `LDI reg, value`: loads an immediate into a register.
#[derive(Debug, Clone, Copy)]
pub struct Ldi;

impl Instruction for Ldi {
    fn mnemonic(&self) -> &'static str {
        "LDI"
    }

    fn operands(&self) -> &'static [OperandKind] {
        REG_IMM
    }

    fn execute(&self, cpu: &mut Cpu, _opcode: u8, ops: Operands) -> Result<(), MachineError> {
        cpu.set_reg(usize::from(ops.a), ops.b)?;
        cpu.advance_pc(INSTRUCTION_SIZE_3);
        Ok(())
    }
}

/// `PRN reg`: prints a register in decimal.
#[derive(Debug, Clone, Copy)]
pub struct Prn;

impl Instruction for Prn {
    fn mnemonic(&self) -> &'static str {
        "PRN"
    }

    fn operands(&self) -> &'static [OperandKind] {
        REG
    }

    fn execute(&self, cpu: &mut Cpu, _opcode: u8, ops: Operands) -> Result<(), MachineError> {
        let value = cpu.reg(usize::from(ops.a))?;
        cpu.console.print(value);
        cpu.stats.inst_print += 1;
        cpu.advance_pc(INSTRUCTION_SIZE_2);
        Ok(())
    }
}
