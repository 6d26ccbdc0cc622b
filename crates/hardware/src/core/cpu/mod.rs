//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which holds the entire machine state.
//! It coordinates the following:
//! 1. **State Management:** General-purpose registers, PC, IR, and FL.
//! 2. **Memory:** The 256-byte address space and the stack inside it.
//! 3. **Output:** The console `PRN` writes to.
//! 4. **Observability:** Execution statistics and state dumps.
//!
//! There are no memory-address or memory-data registers. Every memory access passes its
//! address and data as arguments, so neither value outlives the handler that uses it.

/// Checked memory access.
pub mod memory;

/// Stack push/pop with checked stack-pointer movement.
pub mod stack;

/// State dumps and trace lines.
pub mod trace;

use crate::common::MachineError;
use crate::config::Config;
use crate::core::arch::{Flag, Gpr};
use crate::soc::{Console, Memory, StdoutConsole};
use crate::stats::ExecStats;

/// Main CPU structure containing all machine state.
///
/// Each instance owns its state exclusively; independent instances share nothing. Fields are
/// private to the crate: collaborators observe through accessors, and the setters exist to
/// prepare state before a run.
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose registers; `R7` is the stack pointer.
    pub(crate) regs: Gpr,
    /// Program Counter: address of the instruction being fetched.
    ///
    /// Held wider than a byte so an advance past 255 is caught by the next fetch
    /// instead of wrapping.
    pub(crate) pc: usize,
    /// Instruction Register: copy of the opcode currently executing.
    pub(crate) ir: u8,
    /// Flags Register: outcome of the most recent `CMP`, or `None` before the first one.
    pub(crate) fl: Option<Flag>,
    /// Main memory.
    pub(crate) ram: Memory,
    /// Destination of `PRN` output.
    pub(crate) console: Box<dyn Console>,
    /// Execution statistics.
    pub(crate) stats: ExecStats,
    /// Emit a trace event before every instruction.
    pub(crate) trace: bool,
}

impl Cpu {
    /// Creates a CPU that prints to standard output.
    pub fn new(config: &Config) -> Self {
        Self::with_console(config, Box::new(StdoutConsole))
    }

    /// Creates a CPU with the given console.
    ///
    /// Memory and registers are zero except `R7` (`config.system.initial_sp`) and PC
    /// (`config.system.start_pc`).
    pub fn with_console(config: &Config, console: Box<dyn Console>) -> Self {
        Self {
            regs: Gpr::new(config.system.initial_sp),
            pc: usize::from(config.system.start_pc),
            ir: 0,
            fl: None,
            ram: Memory::new(),
            console,
            stats: ExecStats::new(),
            trace: config.general.trace_instructions,
        }
    }

    /// Copies `program` into memory starting at address 0.
    ///
    /// # Errors
    ///
    /// [`MachineError::ProgramTooLarge`] if the image exceeds 256 bytes.
    pub fn load(&mut self, program: &[u8]) -> Result<(), MachineError> {
        self.ram.load(program)?;
        tracing::debug!(bytes = program.len(), "program loaded");
        Ok(())
    }

    /// Reads general-purpose register `idx`.
    ///
    /// # Errors
    ///
    /// [`MachineError::RegisterOutOfBounds`] if `idx > 7`.
    pub fn reg(&self, idx: usize) -> Result<u8, MachineError> {
        self.regs.read(idx)
    }

    /// Writes general-purpose register `idx`.
    ///
    /// # Errors
    ///
    /// [`MachineError::RegisterOutOfBounds`] if `idx > 7`.
    pub fn set_reg(&mut self, idx: usize, val: u8) -> Result<(), MachineError> {
        self.regs.write(idx, val)
    }

    /// Returns the stack pointer (`R7`).
    pub const fn sp(&self) -> u8 {
        self.regs.sp()
    }

    /// Returns the FL register encoding (`0` before any comparison).
    pub fn fl_bits(&self) -> u8 {
        self.fl.map_or(0, Flag::bits)
    }

    /// Advances the PC by `len` bytes.
    pub const fn advance_pc(&mut self, len: usize) {
        self.pc += len;
    }

    /// Returns the program counter.
    pub const fn pc(&self) -> usize {
        self.pc
    }

    /// Sets the program counter.
    pub const fn set_pc(&mut self, pc: usize) {
        self.pc = pc;
    }

    /// Returns the opcode most recently fetched.
    pub const fn ir(&self) -> u8 {
        self.ir
    }

    /// Returns the outcome of the most recent `CMP`.
    pub const fn fl(&self) -> Option<Flag> {
        self.fl
    }

    /// Sets FL, as if a `CMP` had produced `fl`.
    pub const fn set_fl(&mut self, fl: Option<Flag>) {
        self.fl = fl;
    }

    /// Sets the stack pointer (`R7`).
    pub const fn set_sp(&mut self, sp: u8) {
        self.regs.set_sp(sp);
    }

    /// Returns the register file.
    pub const fn regs(&self) -> &Gpr {
        &self.regs
    }

    /// Returns main memory.
    pub const fn ram(&self) -> &Memory {
        &self.ram
    }

    /// Returns the run statistics.
    pub const fn stats(&self) -> &ExecStats {
        &self.stats
    }
}
