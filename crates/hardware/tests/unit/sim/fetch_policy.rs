//! # Fetch Policy Tests
//!
//! Under the strict policy every cycle reads PC, PC+1, and PC+2, so any instruction in
//! the last two bytes faults. The lenient policy reads only the operands an instruction
//! declares.

use ls8_core::common::MachineError;
use ls8_core::isa::opcodes::*;

use crate::common::builder::ProgramBuilder;
use crate::common::harness::TestContext;

fn hlt_at(addr: u8) -> Vec<u8> {
    ProgramBuilder::new()
        .ldi(0, addr)
        .jmp(0)
        .org(addr)
        .hlt()
        .build()
}

#[test]
fn strict_hlt_at_253_runs() {
    let mut ctx = TestContext::new().load_program(&hlt_at(253));
    ctx.run().unwrap();
}

#[test]
fn strict_hlt_at_254_faults() {
    let mut ctx = TestContext::new().load_program(&hlt_at(254));
    assert_eq!(
        ctx.run().unwrap_err(),
        MachineError::MemoryOutOfBounds { address: 256 }
    );
    assert_eq!(ctx.cpu().pc(), 254);
}

#[test]
fn strict_hlt_at_255_faults() {
    let mut ctx = TestContext::new().load_program(&hlt_at(255));
    assert_eq!(
        ctx.run().unwrap_err(),
        MachineError::MemoryOutOfBounds { address: 256 }
    );
}

#[test]
fn lenient_hlt_at_255_halts() {
    let mut ctx = TestContext::lenient().load_program(&hlt_at(255));
    ctx.run().unwrap();
    assert_eq!(ctx.cpu().pc(), 255);
}

#[test]
fn lenient_two_byte_instruction_at_254() {
    let program = ProgramBuilder::new()
        .ldi(0, 42)
        .ldi(1, 254)
        .jmp(1)
        .org(254)
        .prn(0)
        .build();
    let mut ctx = TestContext::lenient().load_program(&program);
    // PRN runs, then the PC walks off the end.
    assert_eq!(
        ctx.run().unwrap_err(),
        MachineError::MemoryOutOfBounds { address: 256 }
    );
    assert_eq!(ctx.output(), vec![42]);
}

#[test]
fn lenient_three_byte_instruction_at_254_faults() {
    let mut ctx = TestContext::lenient();
    ctx.cpu_mut().ram_write(254, LDI).unwrap();
    ctx.cpu_mut().set_pc(254);
    assert_eq!(
        ctx.step(1).unwrap_err(),
        MachineError::MemoryOutOfBounds { address: 256 }
    );
}

#[test]
fn policies_agree_away_from_the_edge() {
    let program = ProgramBuilder::new()
        .ldi(0, 6)
        .ldi(1, 7)
        .mul(0, 1)
        .prn(0)
        .hlt()
        .build();
    let mut strict = TestContext::new().load_program(&program);
    let mut lenient = TestContext::lenient().load_program(&program);
    strict.run().unwrap();
    lenient.run().unwrap();
    assert_eq!(strict.output(), lenient.output());
    assert_eq!(strict.cpu().regs(), lenient.cpu().regs());
}
