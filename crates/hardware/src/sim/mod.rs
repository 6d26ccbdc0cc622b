//! Simulation driver and program loading.
//!
//! Provides the fetch/decode/execute loop and utilities for turning files into
//! program images.

/// Program image loading (raw binary and LS8 text).
pub mod loader;

/// The execution loop.
pub mod simulator;

pub use simulator::{Simulator, State};
