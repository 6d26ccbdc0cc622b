//! Configuration system for the LS8 emulator.
//!
//! This module defines the configuration structures used to parameterize a machine. It provides:
//! 1. **Defaults:** Reset values for the stack pointer and program counter.
//! 2. **Structures:** General (tracing, fetch policy) and system (reset state) settings.
//! 3. **Enums:** The operand fetch policy applied at the top of the address space.
//!
//! Configuration is read from JSON (`Config::from_json`) or built with `Config::default()`.

use serde::Deserialize;

/// Default configuration constants.
mod defaults {
    use crate::common::constants;

    /// Reset value of the stack pointer (R7).
    pub const INITIAL_SP: u8 = constants::SP_DEFAULT;

    /// Reset value of the program counter.
    pub const START_PC: u8 = constants::PC_DEFAULT;
}

/// How many bytes the execution loop reads per cycle.
///
/// The LS8 datapath always reads the opcode and the two bytes after it, even for
/// instructions that take no operands. Near address 255 that read can leave memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum FetchPolicy {
    /// Always read opcode + two operand bytes; any read past 255 is a bounds violation.
    #[default]
    Strict,
    /// Read only the operand bytes the instruction declares; undeclared operands are zero.
    Lenient,
}

/// Root configuration structure containing all machine settings.
///
/// # Examples
///
/// ```
/// use ls8_core::config::{Config, FetchPolicy};
///
/// let config = Config::default();
/// assert!(!config.general.trace_instructions);
/// assert_eq!(config.general.fetch_policy, FetchPolicy::Strict);
/// assert_eq!(config.system.initial_sp, 0xF4);
/// ```
///
/// Deserializing from JSON; omitted fields take their defaults:
///
/// ```
/// use ls8_core::config::{Config, FetchPolicy};
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "fetch_policy": "Lenient" },
///     "system": { "initial_sp": 240 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.fetch_policy, FetchPolicy::Lenient);
/// assert_eq!(config.system.initial_sp, 0xF0);
/// assert_eq!(config.system.start_pc, 0);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General execution settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Reset state of the machine.
    #[serde(default)]
    pub system: SystemConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the document is malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// General execution settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `tracing` event with the machine state before every instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Operand fetch policy.
    #[serde(default)]
    pub fetch_policy: FetchPolicy,
}

/// Reset state of the machine.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Initial stack pointer (R7).
    #[serde(default = "SystemConfig::default_initial_sp")]
    pub initial_sp: u8,

    /// Initial program counter.
    #[serde(default = "SystemConfig::default_start_pc")]
    pub start_pc: u8,
}

impl SystemConfig {
    /// Returns the default initial stack pointer.
    const fn default_initial_sp() -> u8 {
        defaults::INITIAL_SP
    }

    /// Returns the default starting program counter.
    const fn default_start_pc() -> u8 {
        defaults::START_PC
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            initial_sp: defaults::INITIAL_SP,
            start_pc: defaults::START_PC,
        }
    }
}
