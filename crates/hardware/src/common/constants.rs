//! Global Machine Constants.
//!
//! This module defines the fixed dimensions of the LS8. It includes:
//! 1. **Memory Constants:** Address space size and the highest valid address.
//! 2. **Register Constants:** General-purpose register count and the stack pointer alias.
//! 3. **Instruction Constants:** Byte lengths used by handlers to advance the PC.

/// Size of main memory in bytes.
pub const MEMORY_SIZE: usize = 256;

/// Highest valid memory address.
pub const MAX_ADDRESS: usize = MEMORY_SIZE - 1;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 8;

/// General-purpose register reserved as the stack pointer.
pub const SP_INDEX: usize = 7;

/// Reset value of the stack pointer; the stack grows down from here.
pub const SP_DEFAULT: u8 = 0xF4;

/// Reset value of the program counter.
pub const PC_DEFAULT: u8 = 0;

/// Length of an instruction with no operands.
pub const INSTRUCTION_SIZE_1: usize = 1;

/// Length of an instruction with one operand.
pub const INSTRUCTION_SIZE_2: usize = 2;

/// Length of an instruction with two operands.
pub const INSTRUCTION_SIZE_3: usize = 3;

/// Number of bytes fetched per cycle under the strict fetch policy (opcode + two operands).
pub const FETCH_WINDOW: usize = 3;
