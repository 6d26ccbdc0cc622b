//! Output Console.
//!
//! `PRN` is the only data channel out of the machine. This module defines the trait the
//! CPU writes through and two implementations:
//! 1. **`StdoutConsole`:** One decimal value per line on standard output.
//! 2. **`BufferConsole`:** Records values in memory; clones share the same buffer so a caller
//!    can keep a handle after moving one into the machine.
//!
//! A console observes values only. It has no access to registers or memory.

use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

/// Sink for values printed by `PRN`.
pub trait Console: fmt::Debug + Send {
    /// Emits one register value.
    fn print(&mut self, value: u8);
}

/// Writes each value as a decimal line on standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn print(&mut self, value: u8) {
        let mut out = std::io::stdout().lock();
        // A closed stdout must not stop the machine; the value is simply lost.
        if writeln!(out, "{value}").is_err() {
            tracing::warn!(value, "stdout closed; PRN output dropped");
        }
    }
}

/// In-memory console; clones share one buffer.
#[derive(Debug, Default, Clone)]
pub struct BufferConsole {
    values: Arc<Mutex<Vec<u8>>>,
}

impl BufferConsole {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every value printed so far, in order.
    pub fn values(&self) -> Vec<u8> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Renders the printed values the way `StdoutConsole` would, one line each.
    pub fn text(&self) -> String {
        self.values()
            .iter()
            .map(|v| format!("{v}\n"))
            .collect()
    }
}

impl Console for BufferConsole {
    fn print(&mut self, value: u8) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(value);
    }
}
