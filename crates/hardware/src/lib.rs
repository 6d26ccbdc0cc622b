//! LS8 emulator library.
//!
//! This crate implements an emulator for the LS8, a small 8-bit teaching CPU:
//! 1. **Core:** 8 general-purpose registers, PC/IR/FL internal registers, and the ALU.
//! 2. **Memory:** A flat 256-byte address space with a downward-growing stack.
//! 3. **ISA:** Opcode constants, one handler per instruction, and an opcode-indexed dispatcher.
//! 4. **Simulation:** The fetch/decode/execute loop, program loader, configuration, and statistics.
//!
//! # Example
//!
//! ```
//! use ls8_core::{Config, Simulator};
//! use ls8_core::soc::console::BufferConsole;
//!
//! // LDI R0,8; LDI R1,9; ADD R0,R1; PRN R0; HLT
//! let program = [0x82, 0, 8, 0x82, 1, 9, 0xA0, 0, 1, 0x47, 0, 0x01];
//!
//! let console = BufferConsole::new();
//! let mut sim = Simulator::with_console(&Config::default(), Box::new(console.clone()));
//! sim.load(&program).unwrap();
//! sim.run().unwrap();
//!
//! assert_eq!(console.values(), vec![17]);
//! ```

/// Common types and constants (errors, machine dimensions).
pub mod common;
/// Machine configuration (fetch policy, tracing, reset values).
pub mod config;
/// CPU core (architectural registers, ALU, CPU aggregate).
pub mod core;
/// Instruction set (opcodes, handlers, dispatcher, disassembler).
pub mod isa;
/// Program loading and the execution loop.
pub mod sim;
/// Memory and output devices.
pub mod soc;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Error taxonomy for a machine run.
pub use crate::common::MachineError;
/// Main CPU type; holds registers, memory, console, and stats.
pub use crate::core::Cpu;
/// Top-level machine (CPU plus dispatcher); construct with `Simulator::new`.
pub use crate::sim::{Simulator, State};
