//! Main Memory.
//!
//! This module provides the LS8's 256-byte address space. It provides:
//! 1. **Checked Access:** Reads and writes outside `0..=255` fail instead of wrapping or clamping.
//! 2. **Program Loading:** Copies an image into memory starting at address 0.
//! 3. **Inspection:** Non-failing peeks for diagnostics that must never fault.

use crate::common::MachineError;
use crate::common::constants::MEMORY_SIZE;

/// Flat byte-addressable memory, zero-initialized.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    data: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Creates a zeroed memory.
    pub const fn new() -> Self {
        Self {
            data: [0; MEMORY_SIZE],
        }
    }

    /// Reads the byte at `addr`.
    ///
    /// # Errors
    ///
    /// [`MachineError::MemoryOutOfBounds`] if `addr > 255`.
    pub fn read(&self, addr: usize) -> Result<u8, MachineError> {
        self.data
            .get(addr)
            .copied()
            .ok_or_else(|| MachineError::memory(addr))
    }

    /// Writes `val` to `addr`.
    ///
    /// # Errors
    ///
    /// [`MachineError::MemoryOutOfBounds`] if `addr > 255`.
    pub fn write(&mut self, addr: usize, val: u8) -> Result<(), MachineError> {
        let slot = self
            .data
            .get_mut(addr)
            .ok_or_else(|| MachineError::memory(addr))?;
        *slot = val;
        Ok(())
    }

    /// Reads the byte at `addr` if it exists; used by tracing, which must not fault.
    pub fn peek(&self, addr: usize) -> Option<u8> {
        self.data.get(addr).copied()
    }

    /// Copies `program` into memory starting at address 0.
    ///
    /// Bytes past the end of the image are left untouched.
    ///
    /// # Errors
    ///
    /// [`MachineError::ProgramTooLarge`] if the image is longer than 256 bytes. Memory is
    /// unchanged in that case.
    pub fn load(&mut self, program: &[u8]) -> Result<(), MachineError> {
        let dest = self
            .data
            .get_mut(..program.len())
            .ok_or(MachineError::ProgramTooLarge { len: program.len() })?;
        dest.copy_from_slice(program);
        Ok(())
    }

    /// Returns the whole address space.
    pub const fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Size of memory in bytes.
    pub const fn len(&self) -> usize {
        MEMORY_SIZE
    }

    /// Always `false`; present for API symmetry with `len`.
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.data.iter().filter(|b| **b != 0).count();
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .field("nonzero_bytes", &used)
            .finish()
    }
}
