//! ALU instructions: ADD, MUL, CMP.
//!
//! All three share one handler that asks the ALU which operation the opcode names.

use super::REG_REG;
use crate::common::MachineError;
use crate::common::constants::INSTRUCTION_SIZE_3;
use crate::core::Cpu;
use crate::core::units::alu::{Alu, AluOp, AluOutput};
use crate::isa::dispatch::{Instruction, OperandKind, Operands};

/// `ADD/MUL/CMP reg_a, reg_b`.
///
/// Results are written back to `reg_a`; `CMP` replaces FL instead.
#[derive(Debug, Clone, Copy)]
pub struct AluInstruction {
    mnemonic: &'static str,
}

impl AluInstruction {
    /// Creates the handler under the given mnemonic.
    pub const fn new(mnemonic: &'static str) -> Self {
        Self { mnemonic }
    }
}

impl Instruction for AluInstruction {
    fn mnemonic(&self) -> &'static str {
        self.mnemonic
    }

    fn operands(&self) -> &'static [OperandKind] {
        REG_REG
    }

    fn execute(&self, cpu: &mut Cpu, opcode: u8, ops: Operands) -> Result<(), MachineError> {
        let op = AluOp::from_opcode(opcode)?;
        let reg_a = usize::from(ops.a);
        let a = cpu.reg(reg_a)?;
        let b = cpu.reg(usize::from(ops.b))?;

        match Alu::execute(op, a, b) {
            AluOutput::Value(result) => cpu.set_reg(reg_a, result)?,
            AluOutput::Flag(flag) => cpu.fl = Some(flag),
        }

        cpu.stats.inst_alu += 1;
        cpu.advance_pc(INSTRUCTION_SIZE_3);
        Ok(())
    }
}
