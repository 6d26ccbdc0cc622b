//! Machine peripherals: main memory and the output console.
//!
//! The LS8 has no bus or memory-mapped devices. Memory is a flat byte array and
//! `PRN` output goes to whatever [`Console`](console::Console) the machine was built with.

/// Output console for `PRN`.
pub mod console;

/// 256-byte main memory.
pub mod memory;

pub use console::{BufferConsole, Console, StdoutConsole};
pub use memory::Memory;
