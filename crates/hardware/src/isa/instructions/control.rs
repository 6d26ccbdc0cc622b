//! Control-flow instructions: CALL, RET, JMP, JEQ, JNE.
//!
//! Jump targets come from a register, so every target is a byte address. CALL and RET use
//! the stack directly and never touch a general-purpose register other than SP. CALL checks
//! its register and return address before pushing, so a faulting CALL changes nothing.

use super::{NO_OPERANDS, REG};
use crate::common::MachineError;
use crate::common::constants::INSTRUCTION_SIZE_2;
use crate::core::Cpu;
use crate::core::arch::{Flag, Gpr};
use crate::isa::dispatch::{Instruction, OperandKind, Operands};

/// Sets the PC to the address held in register `reg`.
fn jump_to_reg(cpu: &mut Cpu, reg: u8) -> Result<(), MachineError> {
    let target = cpu.reg(usize::from(reg))?;
    cpu.pc = usize::from(target);
    Ok(())
}

/// Takes the jump when `taken`, otherwise steps over the instruction.
fn branch(cpu: &mut Cpu, reg: u8, taken: bool) -> Result<(), MachineError> {
    cpu.stats.record_branch(taken);
    if taken {
        jump_to_reg(cpu, reg)
    } else {
        cpu.advance_pc(INSTRUCTION_SIZE_2);
        Ok(())
    }
}

/// `CALL reg`: pushes the address of the next instruction and jumps to `reg`.
#[derive(Debug, Clone, Copy)]
pub struct Call;

impl Instruction for Call {
    fn mnemonic(&self) -> &'static str {
        "CALL"
    }

    fn operands(&self) -> &'static [OperandKind] {
        REG
    }

    fn execute(&self, cpu: &mut Cpu, _opcode: u8, ops: Operands) -> Result<(), MachineError> {
        let reg = Gpr::check_index(usize::from(ops.a))?;
        let next = cpu.pc + INSTRUCTION_SIZE_2;
        let return_addr = u8::try_from(next).map_err(|_| MachineError::memory(next))?;
        cpu.push_byte(return_addr)?;
        cpu.pc = usize::from(cpu.reg(reg)?);
        cpu.stats.calls += 1;
        Ok(())
    }
}

/// `RET`: pops the return address into the PC.
#[derive(Debug, Clone, Copy)]
pub struct Ret;

impl Instruction for Ret {
    fn mnemonic(&self) -> &'static str {
        "RET"
    }

    fn operands(&self) -> &'static [OperandKind] {
        NO_OPERANDS
    }

    fn execute(&self, cpu: &mut Cpu, _opcode: u8, _ops: Operands) -> Result<(), MachineError> {
        let return_addr = cpu.pop_byte()?;
        cpu.pc = usize::from(return_addr);
        cpu.stats.returns += 1;
        Ok(())
    }
}

/// `JMP reg`: unconditional jump.
#[derive(Debug, Clone, Copy)]
pub struct Jmp;

impl Instruction for Jmp {
    fn mnemonic(&self) -> &'static str {
        "JMP"
    }

    fn operands(&self) -> &'static [OperandKind] {
        REG
    }

    fn execute(&self, cpu: &mut Cpu, _opcode: u8, ops: Operands) -> Result<(), MachineError> {
        jump_to_reg(cpu, ops.a)?;
        cpu.stats.branches_taken += 1;
        Ok(())
    }
}

/// `JEQ reg`: jump if FL is EQUAL.
#[derive(Debug, Clone, Copy)]
pub struct Jeq;

impl Instruction for Jeq {
    fn mnemonic(&self) -> &'static str {
        "JEQ"
    }

    fn operands(&self) -> &'static [OperandKind] {
        REG
    }

    fn execute(&self, cpu: &mut Cpu, _opcode: u8, ops: Operands) -> Result<(), MachineError> {
        let taken = cpu.fl == Some(Flag::Equal);
        branch(cpu, ops.a, taken)
    }
}

/// `JNE reg`: jump if FL is anything but EQUAL, including before the first `CMP`.
#[derive(Debug, Clone, Copy)]
pub struct Jne;

impl Instruction for Jne {
    fn mnemonic(&self) -> &'static str {
        "JNE"
    }

    fn operands(&self) -> &'static [OperandKind] {
        REG
    }

    fn execute(&self, cpu: &mut Cpu, _opcode: u8, ops: Operands) -> Result<(), MachineError> {
        let taken = cpu.fl != Some(Flag::Equal);
        branch(cpu, ops.a, taken)
    }
}
