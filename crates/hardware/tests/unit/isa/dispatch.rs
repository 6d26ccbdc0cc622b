//! # Dispatcher Tests
//!
//! The default table holds exactly the thirteen non-HLT instructions, unknown opcodes
//! fail to decode, and new handlers can be installed without touching the loop.

use ls8_core::common::MachineError;
use ls8_core::core::Cpu;
use ls8_core::isa::instructions::alu::AluInstruction;
use ls8_core::isa::opcodes::*;
use ls8_core::isa::{Dispatcher, Instruction, OperandKind, Operands};
use ls8_core::{Config, State};
use rstest::rstest;

use crate::common::builder::ProgramBuilder;
use crate::common::harness::TestContext;

#[rstest]
#[case(NOP, "NOP", 1)]
#[case(LDI, "LDI", 3)]
#[case(PRN, "PRN", 2)]
#[case(PUSH, "PUSH", 2)]
#[case(POP, "POP", 2)]
#[case(CALL, "CALL", 2)]
#[case(RET, "RET", 1)]
#[case(JMP, "JMP", 2)]
#[case(JEQ, "JEQ", 2)]
#[case(JNE, "JNE", 2)]
#[case(ADD, "ADD", 3)]
#[case(MUL, "MUL", 3)]
#[case(CMP, "CMP", 3)]
fn default_table_entry(#[case] opcode: u8, #[case] mnemonic: &str, #[case] length: usize) {
    let dispatcher = Dispatcher::new();
    let handler = dispatcher.lookup(opcode).unwrap();
    assert_eq!(handler.mnemonic(), mnemonic);
    assert_eq!(handler.length(), length);
    assert_eq!(handler.operand_count(), length - 1);
}

#[test]
fn default_table_has_thirteen_entries_and_no_hlt() {
    let dispatcher = Dispatcher::new();
    assert_eq!(dispatcher.len(), 13);
    assert!(dispatcher.lookup(HLT).is_none());
}

#[test]
fn empty_table() {
    let dispatcher = Dispatcher::empty();
    assert!(dispatcher.is_empty());
    assert_eq!(
        dispatcher.decode(LDI, 0).unwrap_err(),
        MachineError::DecodeFailure { opcode: LDI, pc: 0 }
    );
}

#[test]
fn decode_unknown_opcode_reports_pc() {
    let dispatcher = Dispatcher::new();
    assert_eq!(
        dispatcher.decode(0xFF, 0x10).unwrap_err(),
        MachineError::DecodeFailure {
            opcode: 0xFF,
            pc: 0x10
        }
    );
}

/// `INC reg`: a custom instruction used to check the table is open for extension.
#[derive(Debug)]
struct Inc;

impl Instruction for Inc {
    fn mnemonic(&self) -> &'static str {
        "INC"
    }

    fn operands(&self) -> &'static [OperandKind] {
        &[OperandKind::Register]
    }

    fn execute(&self, cpu: &mut Cpu, _opcode: u8, ops: Operands) -> Result<(), MachineError> {
        let reg = usize::from(ops.a);
        let value = cpu.reg(reg)?.wrapping_add(1);
        cpu.set_reg(reg, value)?;
        cpu.advance_pc(self.length());
        Ok(())
    }
}

const INC: u8 = 0x65;

#[test]
fn registered_handler_runs_in_loop() {
    let mut ctx = TestContext::new();
    ctx.sim.dispatcher.register(INC, Box::new(Inc));

    let program = ProgramBuilder::new()
        .ldi(0, 41)
        .raw(&[INC, 0])
        .prn(0)
        .hlt()
        .build();
    ctx.sim.load(&program).unwrap();
    ctx.run().unwrap();

    assert_eq!(ctx.output(), vec![42]);
}

#[test]
fn register_replaces_existing_handler() {
    let mut dispatcher = Dispatcher::new();
    dispatcher.register(NOP, Box::new(Inc));
    assert_eq!(dispatcher.len(), 13);
    assert_eq!(dispatcher.lookup(NOP).unwrap().mnemonic(), "INC");
}

#[test]
fn alu_handler_under_foreign_opcode_is_invariant_violation() {
    let mut ctx = TestContext::new();
    ctx.sim
        .dispatcher
        .register(0xA3, Box::new(AluInstruction::new("DIV")));

    ctx.sim.load(&[0xA3, 0, 1, HLT]).unwrap();
    let err = ctx.step(1).unwrap_err();

    assert_eq!(err, MachineError::InvariantViolation { opcode: 0xA3 });
    assert_eq!(ctx.sim.state(), State::Running);
    assert_eq!(ctx.cpu().pc(), 0);
}

#[test]
fn simulators_do_not_share_tables() {
    let config = Config::default();
    let mut first = ls8_core::Simulator::new(&config);
    let second = ls8_core::Simulator::new(&config);
    first.dispatcher.register(INC, Box::new(Inc));
    assert!(first.dispatcher.lookup(INC).is_some());
    assert!(second.dispatcher.lookup(INC).is_none());
}
