//! CPU-side memory access.
//!
//! Thin wrappers over [`Memory`](crate::soc::Memory) that take the address and data as
//! parameters, the way the LS8 datapath drives MAR and MDR.

use super::Cpu;
use crate::common::MachineError;

impl Cpu {
    /// Reads the byte at `addr`.
    ///
    /// # Errors
    ///
    /// [`MachineError::MemoryOutOfBounds`] if `addr > 255`.
    pub fn ram_read(&self, addr: usize) -> Result<u8, MachineError> {
        self.ram.read(addr)
    }

    /// Writes `val` to `addr`.
    ///
    /// # Errors
    ///
    /// [`MachineError::MemoryOutOfBounds`] if `addr > 255`.
    pub fn ram_write(&mut self, addr: usize, val: u8) -> Result<(), MachineError> {
        self.ram.write(addr, val)
    }

    /// Reads the operand byte `offset` bytes after the current PC.
    ///
    /// # Errors
    ///
    /// [`MachineError::MemoryOutOfBounds`] if the operand lies past address 255.
    pub fn read_operand(&self, offset: usize) -> Result<u8, MachineError> {
        self.ram_read(self.pc + offset)
    }
}
