//! Architectural state of the LS8.
//!
//! Holds the program-visible register file and the comparison flags. The program counter
//! and instruction register are plain fields on [`Cpu`](crate::core::Cpu).

/// Comparison flags register.
pub mod flags;

/// General-purpose register file (R0-R7).
pub mod gpr;

pub use flags::Flag;
pub use gpr::Gpr;
