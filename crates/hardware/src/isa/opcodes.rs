//! LS8 Opcodes.
//!
//! One byte per instruction; operands, where present, are the bytes immediately after.

/// No operation.
pub const NOP: u8 = 0b0000_0000;

/// Halt the machine. Handled by the execution loop, never dispatched.
pub const HLT: u8 = 0b0000_0001;

/// Return from subroutine.
pub const RET: u8 = 0b0001_0001;

/// Load immediate: `LDI reg, value`.
pub const LDI: u8 = 0b1000_0010;

/// Push register onto the stack: `PUSH reg`.
pub const PUSH: u8 = 0b0100_0101;

/// Pop the stack into a register: `POP reg`.
pub const POP: u8 = 0b0100_0110;

/// Print register as decimal: `PRN reg`.
pub const PRN: u8 = 0b0100_0111;

/// Call the subroutine whose address is in a register: `CALL reg`.
pub const CALL: u8 = 0b0101_0000;

/// Jump to the address in a register: `JMP reg`.
pub const JMP: u8 = 0b0101_0100;

/// Jump if the equal flag is set: `JEQ reg`.
pub const JEQ: u8 = 0b0101_0101;

/// Jump if the equal flag is clear: `JNE reg`.
pub const JNE: u8 = 0b0101_0110;

/// Add: `ADD reg_a, reg_b`.
pub const ADD: u8 = 0b1010_0000;

/// Multiply: `MUL reg_a, reg_b`.
pub const MUL: u8 = 0b1010_0010;

/// Compare: `CMP reg_a, reg_b`.
pub const CMP: u8 = 0b1010_0111;
