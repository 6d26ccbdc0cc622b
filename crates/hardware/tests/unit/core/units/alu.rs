//! # ALU Tests
//!
//! ADD and MUL wrap modulo 256; CMP yields exactly one flag; any opcode outside
//! {ADD, MUL, CMP} is an invariant violation.

use ls8_core::common::MachineError;
use ls8_core::core::arch::Flag;
use ls8_core::core::units::alu::{Alu, AluOp, AluOutput};
use ls8_core::isa::opcodes;
use rstest::rstest;

#[rstest]
#[case(0, 0, 0)]
#[case(8, 9, 17)]
#[case(250, 10, 4)]
#[case(255, 1, 0)]
#[case(255, 255, 254)]
fn add_wraps_modulo_256(#[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(Alu::execute(AluOp::Add, a, b), AluOutput::Value(expected));
}

#[rstest]
#[case(8, 9, 72)]
#[case(16, 16, 0)]
#[case(0, 200, 0)]
#[case(255, 255, 1)]
#[case(15, 17, 255)]
fn mul_wraps_modulo_256(#[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(Alu::execute(AluOp::Mul, a, b), AluOutput::Value(expected));
}

#[test]
fn cmp_produces_flag_not_value() {
    assert_eq!(Alu::execute(AluOp::Cmp, 7, 7), AluOutput::Flag(Flag::Equal));
    assert_eq!(Alu::execute(AluOp::Cmp, 1, 7), AluOutput::Flag(Flag::LessThan));
    assert_eq!(
        Alu::execute(AluOp::Cmp, 7, 1),
        AluOutput::Flag(Flag::GreaterThan)
    );
}

#[rstest]
#[case(opcodes::ADD, AluOp::Add)]
#[case(opcodes::MUL, AluOp::Mul)]
#[case(opcodes::CMP, AluOp::Cmp)]
fn from_opcode_accepts_alu_opcodes(#[case] opcode: u8, #[case] op: AluOp) {
    assert_eq!(AluOp::from_opcode(opcode), Ok(op));
}

#[test]
fn from_opcode_rejects_everything_else() {
    for opcode in 0..=u8::MAX {
        if matches!(opcode, opcodes::ADD | opcodes::MUL | opcodes::CMP) {
            continue;
        }
        assert_eq!(
            AluOp::from_opcode(opcode),
            Err(MachineError::InvariantViolation { opcode })
        );
    }
}
