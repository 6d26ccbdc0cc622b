//! Instruction Disassembler for the LS8.
//!
//! Converts opcode and operand bytes into assembly text for trace lines, listings, and test
//! diagnostics. Operand shapes come from the handlers registered in a [`Dispatcher`], so a
//! custom instruction disassembles as soon as it is registered.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::Dispatcher;
//! use ls8_core::isa::disasm::disassemble;
//!
//! let dispatcher = Dispatcher::new();
//! assert_eq!(disassemble(&dispatcher, 0x82, 0, 8), "LDI R0, 8");
//! assert_eq!(disassemble(&dispatcher, 0xA0, 0, 1), "ADD R0, R1");
//! assert_eq!(disassemble(&dispatcher, 0x01, 0, 0), "HLT");
//! assert_eq!(disassemble(&dispatcher, 0xFF, 0, 0), "??? 0xff");
//! ```

use crate::isa::dispatch::{Dispatcher, OperandKind};
use crate::isa::opcodes;

/// Renders a single operand.
fn operand(kind: OperandKind, byte: u8) -> String {
    match kind {
        OperandKind::Register => format!("R{byte}"),
        OperandKind::Immediate => byte.to_string(),
    }
}

/// Disassembles one instruction.
///
/// Returns `"??? 0xNN"` for opcodes with no handler.
pub fn disassemble(dispatcher: &Dispatcher, opcode: u8, a: u8, b: u8) -> String {
    if opcode == opcodes::HLT {
        return "HLT".to_string();
    }
    let Some(handler) = dispatcher.lookup(opcode) else {
        return format!("??? {opcode:#04x}");
    };

    let rendered: Vec<String> = handler
        .operands()
        .iter()
        .zip([a, b])
        .map(|(kind, byte)| operand(*kind, byte))
        .collect();

    if rendered.is_empty() {
        handler.mnemonic().to_string()
    } else {
        format!("{} {}", handler.mnemonic(), rendered.join(", "))
    }
}

/// Returns the encoded length of the instruction at `opcode`; `HLT` and unknown opcodes
/// occupy one byte.
pub fn instruction_length(dispatcher: &Dispatcher, opcode: u8) -> usize {
    dispatcher.lookup(opcode).map_or(1, |handler| handler.length())
}

/// Walks a program image and disassembles each instruction in order.
///
/// Operands missing from a truncated image are shown as zero.
pub fn disassemble_program(dispatcher: &Dispatcher, image: &[u8]) -> Vec<(usize, String)> {
    let byte_at = |addr: usize| image.get(addr).copied().unwrap_or(0);
    let mut listing = Vec::new();
    let mut addr = 0;
    while let Some(&opcode) = image.get(addr) {
        let text = disassemble(dispatcher, opcode, byte_at(addr + 1), byte_at(addr + 2));
        listing.push((addr, text));
        addr += instruction_length(dispatcher, opcode);
    }
    listing
}
