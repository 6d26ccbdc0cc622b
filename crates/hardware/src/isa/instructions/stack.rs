//! Stack instructions: PUSH, POP.
//!
//! The order of SP movement and register access is fixed, which matters only when the operand is
//! `R7` itself: `PUSH R7` stores the already-decremented SP, and `POP R7` loads the popped
//! byte and then increments it.
//!
//! Both check the register index and the SP step before changing anything, so a faulting
//! instruction leaves the machine as it found it.

use super::REG;
use crate::common::MachineError;
use crate::common::constants::{INSTRUCTION_SIZE_2, SP_INDEX};
use crate::core::Cpu;
use crate::core::arch::Gpr;
use crate::core::cpu::stack;
use crate::isa::dispatch::{Instruction, OperandKind, Operands};

/// `PUSH reg`: `SP -= 1; memory[SP] = reg`.
#[derive(Debug, Clone, Copy)]
pub struct Push;

impl Instruction for Push {
    fn mnemonic(&self) -> &'static str {
        "PUSH"
    }

    fn operands(&self) -> &'static [OperandKind] {
        REG
    }

    fn execute(&self, cpu: &mut Cpu, _opcode: u8, ops: Operands) -> Result<(), MachineError> {
        let reg = Gpr::check_index(usize::from(ops.a))?;
        let sp = cpu.decrement_sp()?;
        let value = cpu.reg(reg)?;
        cpu.ram_write(usize::from(sp), value)?;
        cpu.stats.inst_stack += 1;
        cpu.advance_pc(INSTRUCTION_SIZE_2);
        Ok(())
    }
}

/// `POP reg`: `reg = memory[SP]; SP += 1`.
#[derive(Debug, Clone, Copy)]
pub struct Pop;

impl Instruction for Pop {
    fn mnemonic(&self) -> &'static str {
        "POP"
    }

    fn operands(&self) -> &'static [OperandKind] {
        REG
    }

    fn execute(&self, cpu: &mut Cpu, _opcode: u8, ops: Operands) -> Result<(), MachineError> {
        let reg = Gpr::check_index(usize::from(ops.a))?;
        let value = cpu.ram_read(usize::from(cpu.sp()))?;
        // `POP R7` increments the popped value, not the old SP.
        let base = if reg == SP_INDEX { value } else { cpu.sp() };
        let next_sp = stack::sp_above(base)?;
        cpu.set_reg(reg, value)?;
        cpu.set_sp(next_sp);
        cpu.stats.inst_stack += 1;
        cpu.advance_pc(INSTRUCTION_SIZE_2);
        Ok(())
    }
}
