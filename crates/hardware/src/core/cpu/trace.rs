//! State dumps and trace lines.
//!
//! Neither function can fault: bytes outside memory render as `--`.

use std::fmt::Write;

use super::Cpu;
use crate::common::constants::FETCH_WINDOW;

impl Cpu {
    /// Formats the machine state before an instruction executes.
    ///
    /// Layout: `TRACE: PC | FL IR | b0 b1 b2 | R0 R1 R2 R3 R4 R5 R6 R7`, all two-digit hex,
    /// where `b0..b2` are the three bytes starting at PC.
    pub fn trace_state(&self) -> String {
        let mut line = format!(
            "TRACE: {:02X} | {:02X} {:02X} |",
            self.pc,
            self.fl_bits(),
            self.ir
        );
        for offset in 0..FETCH_WINDOW {
            match self.ram.peek(self.pc + offset) {
                Some(byte) => {
                    let _ = write!(line, " {byte:02X}");
                }
                None => line.push_str(" --"),
            }
        }
        line.push_str(" |");
        for val in self.regs.snapshot() {
            let _ = write!(line, " {val:02X}");
        }
        line
    }

    /// Returns a multi-line summary of registers, flags, and the stack top.
    pub fn dump_state(&self) -> String {
        let flag = self.fl.map_or_else(|| "-".to_string(), |f| f.to_string());
        let stack_top = self
            .ram
            .peek(usize::from(self.sp()))
            .map_or_else(|| "--".to_string(), |b| format!("{b:02X}"));
        format!(
            "PC={:#04x} IR={:#04x} FL={} SP={:#04x} [SP]={}\n{}",
            self.pc,
            self.ir,
            flag,
            self.sp(),
            stack_top,
            self.regs.dump()
        )
    }
}
