//! Stack Operations.
//!
//! The stack lives in main memory and grows downward from the reset value of `R7`.
//! A push decrements SP and then writes; a pop reads and then increments SP, so SP always
//! addresses the most recently pushed byte.
//!
//! SP never wraps. Stepping below address 0 or above address 255 is reported as a memory
//! bounds violation at `-1` or `256`, and a failed step leaves SP where it was.

use super::Cpu;
use crate::common::MachineError;
use crate::common::constants::MAX_ADDRESS;

/// Returns the stack pointer one byte below `sp`.
///
/// # Errors
///
/// [`MachineError::MemoryOutOfBounds`] with address `-1` if `sp` is 0.
pub(crate) fn sp_below(sp: u8) -> Result<u8, MachineError> {
    sp.checked_sub(1)
        .ok_or(MachineError::MemoryOutOfBounds { address: -1 })
}

/// Returns the stack pointer one byte above `sp`.
///
/// # Errors
///
/// [`MachineError::MemoryOutOfBounds`] with address `256` if `sp` is 255.
pub(crate) fn sp_above(sp: u8) -> Result<u8, MachineError> {
    sp.checked_add(1).ok_or(MachineError::MemoryOutOfBounds {
        address: MAX_ADDRESS as isize + 1,
    })
}

impl Cpu {
    /// Moves SP down one byte and returns the new value. SP is unchanged on error.
    ///
    /// # Errors
    ///
    /// [`MachineError::MemoryOutOfBounds`] with address `-1` if SP is already 0.
    pub fn decrement_sp(&mut self) -> Result<u8, MachineError> {
        let sp = sp_below(self.sp())?;
        self.regs.set_sp(sp);
        Ok(sp)
    }

    /// Moves SP up one byte. SP is unchanged on error.
    ///
    /// # Errors
    ///
    /// [`MachineError::MemoryOutOfBounds`] with address `256` if SP is already 255.
    pub fn increment_sp(&mut self) -> Result<(), MachineError> {
        let sp = sp_above(self.sp())?;
        self.regs.set_sp(sp);
        Ok(())
    }

    /// Pushes `val` onto the stack.
    ///
    /// # Errors
    ///
    /// See [`Cpu::decrement_sp`].
    pub fn push_byte(&mut self, val: u8) -> Result<(), MachineError> {
        let sp = self.decrement_sp()?;
        self.ram_write(usize::from(sp), val)
    }

    /// Pops the top byte off the stack.
    ///
    /// # Errors
    ///
    /// See [`Cpu::increment_sp`].
    pub fn pop_byte(&mut self) -> Result<u8, MachineError> {
        let val = self.ram_read(usize::from(self.sp()))?;
        self.increment_sp()?;
        Ok(val)
    }
}
