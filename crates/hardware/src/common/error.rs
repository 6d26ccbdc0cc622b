//! Machine and Loader Error definitions.
//!
//! This module defines the error handling for the emulator. It provides:
//! 1. **Machine Errors:** Every condition that terminates a run (bounds, decode, invariant).
//! 2. **Loader Errors:** Failures while turning a file into a program image.
//!
//! Every machine error is fatal. The engine never retries or skips an instruction; it stops
//! and hands the error to the caller.

use std::path::PathBuf;

use thiserror::Error;

use super::constants::MEMORY_SIZE;

/// Fatal conditions raised while loading or executing a program.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MachineError {
    /// A memory access fell outside `0..=255`.
    ///
    /// The address is signed so that a stack pointer stepping below zero is reported
    /// as `-1` instead of wrapping to the top of memory.
    #[error("memory address {address} out of bounds (0..={max})", max = MEMORY_SIZE - 1)]
    MemoryOutOfBounds {
        /// The offending address.
        address: isize,
    },

    /// A general-purpose register index fell outside `0..=7`.
    #[error("register index {index} out of bounds (0..=7)")]
    RegisterOutOfBounds {
        /// The offending register index.
        index: usize,
    },

    /// A program image does not fit in memory.
    #[error("program of {len} bytes does not fit in {size} bytes of memory", size = MEMORY_SIZE)]
    ProgramTooLarge {
        /// Length of the rejected image.
        len: usize,
    },

    /// No handler is registered for the fetched opcode.
    #[error("no handler for opcode {opcode:#04x} at pc {pc:#04x}")]
    DecodeFailure {
        /// The opcode that could not be decoded.
        opcode: u8,
        /// Address the opcode was fetched from.
        pc: usize,
    },

    /// The ALU was handed an opcode that is not ADD, MUL, or CMP.
    ///
    /// Unreachable through the standard dispatch table; indicates a programming defect.
    #[error("internal invariant violated: ALU invoked with non-ALU opcode {opcode:#04x}")]
    InvariantViolation {
        /// The opcode passed to the ALU.
        opcode: u8,
    },
}

impl MachineError {
    /// Returns `true` for memory, register, and program-size violations.
    pub const fn is_bounds_violation(&self) -> bool {
        matches!(
            self,
            Self::MemoryOutOfBounds { .. }
                | Self::RegisterOutOfBounds { .. }
                | Self::ProgramTooLarge { .. }
        )
    }

    /// Builds a memory bounds error from an unsigned address.
    pub(crate) fn memory(address: usize) -> Self {
        Self::MemoryOutOfBounds {
            address: isize::try_from(address).unwrap_or(isize::MAX),
        }
    }
}

/// Errors raised while reading or parsing a program image.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The file could not be read.
    #[error("could not read '{}': {source}", .path.display())]
    Io {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line of an LS8 text program is not an 8-digit binary byte.
    #[error("line {line}: expected an 8-bit binary value, found '{text}'")]
    InvalidLine {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        text: String,
    },

    /// The image is longer than memory.
    #[error("program of {len} bytes does not fit in {size} bytes of memory", size = MEMORY_SIZE)]
    TooLarge {
        /// Length of the rejected image.
        len: usize,
    },
}
