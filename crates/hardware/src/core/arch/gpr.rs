//! LS8 General-Purpose Register File.
//!
//! This module implements the eight 8-bit general-purpose registers. It performs the following:
//! 1. **Storage:** Maintains registers `R0`-`R7`.
//! 2. **Bounds Enforcement:** Rejects indices outside `0..=7` instead of panicking.
//! 3. **Stack Pointer Alias:** `R7` doubles as the stack pointer.

use crate::common::MachineError;
use crate::common::constants::{NUM_REGISTERS, SP_DEFAULT, SP_INDEX};

/// General-Purpose Register file.
///
/// Values are unsigned bytes; arithmetic performed on them elsewhere wraps modulo 256.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gpr {
    regs: [u8; NUM_REGISTERS],
}

impl Gpr {
    /// Creates a register file with every register zero except the stack pointer.
    ///
    /// # Arguments
    ///
    /// * `initial_sp` - Reset value of `R7`.
    pub const fn new(initial_sp: u8) -> Self {
        let mut regs = [0; NUM_REGISTERS];
        regs[SP_INDEX] = initial_sp;
        Self { regs }
    }

    /// Validates a register index without touching any register.
    ///
    /// # Errors
    ///
    /// [`MachineError::RegisterOutOfBounds`] if `idx > 7`.
    pub const fn check_index(idx: usize) -> Result<usize, MachineError> {
        if idx < NUM_REGISTERS {
            Ok(idx)
        } else {
            Err(MachineError::RegisterOutOfBounds { index: idx })
        }
    }

    /// Reads a general-purpose register.
    ///
    /// # Errors
    ///
    /// [`MachineError::RegisterOutOfBounds`] if `idx > 7`.
    pub fn read(&self, idx: usize) -> Result<u8, MachineError> {
        self.regs
            .get(idx)
            .copied()
            .ok_or(MachineError::RegisterOutOfBounds { index: idx })
    }

    /// Writes a general-purpose register.
    ///
    /// # Errors
    ///
    /// [`MachineError::RegisterOutOfBounds`] if `idx > 7`.
    pub fn write(&mut self, idx: usize, val: u8) -> Result<(), MachineError> {
        let slot = self
            .regs
            .get_mut(idx)
            .ok_or(MachineError::RegisterOutOfBounds { index: idx })?;
        *slot = val;
        Ok(())
    }

    /// Returns the stack pointer (`R7`).
    pub const fn sp(&self) -> u8 {
        self.regs[SP_INDEX]
    }

    /// Sets the stack pointer (`R7`). Identical to writing register 7.
    pub const fn set_sp(&mut self, val: u8) {
        self.regs[SP_INDEX] = val;
    }

    /// Returns a copy of all eight registers.
    pub const fn snapshot(&self) -> [u8; NUM_REGISTERS] {
        self.regs
    }

    /// Renders the registers on one line, e.g. `R0=00 R1=2A ... R7=F4`.
    pub fn dump(&self) -> String {
        self.regs
            .iter()
            .enumerate()
            .map(|(i, v)| format!("R{i}={v:02X}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new(SP_DEFAULT)
    }
}
