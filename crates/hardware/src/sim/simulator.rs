//! Simulator: owns the CPU and the dispatcher side by side.
//!
//! Handlers borrow the CPU mutably while the dispatcher is borrowed immutably, so the two
//! live in separate fields rather than the table sitting inside `Cpu`.
//!
//! Each [`Simulator::step`] is one cycle:
//! 1. **Fetch:** Opcode at PC into IR, plus operand bytes per the [`FetchPolicy`].
//! 2. **Halt check:** `HLT` stops the machine without touching the PC.
//! 3. **Decode:** Opcode lookup in the dispatcher.
//! 4. **Execute:** The handler updates state and decides the next PC.

use crate::common::MachineError;
use crate::config::{Config, FetchPolicy};
use crate::core::Cpu;
use crate::isa::disasm;
use crate::isa::dispatch::{Dispatcher, Operands};
use crate::isa::opcodes;
use crate::soc::Console;

/// Execution state of a machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// The loop will fetch another instruction.
    Running,
    /// `HLT` was executed; further steps do nothing.
    Halted,
}

/// Top-level machine: CPU state + instruction dispatch.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, memory, console, stats).
    pub cpu: Cpu,
    /// Opcode-to-handler table.
    pub dispatcher: Dispatcher,
    state: State,
    fetch_policy: FetchPolicy,
}

impl Simulator {
    /// Creates a machine that prints to standard output.
    pub fn new(config: &Config) -> Self {
        Self::from_parts(Cpu::new(config), Dispatcher::new(), config)
    }

    /// Creates a machine with the given console.
    pub fn with_console(config: &Config, console: Box<dyn Console>) -> Self {
        Self::from_parts(
            Cpu::with_console(config, console),
            Dispatcher::new(),
            config,
        )
    }

    /// Assembles a machine from an existing CPU and dispatcher.
    pub fn from_parts(cpu: Cpu, dispatcher: Dispatcher, config: &Config) -> Self {
        Self {
            cpu,
            dispatcher,
            state: State::Running,
            fetch_policy: config.general.fetch_policy,
        }
    }

    /// Copies `program` into memory starting at address 0.
    ///
    /// # Errors
    ///
    /// [`MachineError::ProgramTooLarge`] if the image exceeds 256 bytes.
    pub fn load(&mut self, program: &[u8]) -> Result<(), MachineError> {
        self.cpu.load(program)
    }

    /// Returns the current execution state.
    pub const fn state(&self) -> State {
        self.state
    }

    /// Runs until `HLT`.
    ///
    /// A program that never halts never returns.
    ///
    /// # Errors
    ///
    /// The first [`MachineError`] raised; the machine stops at the faulting instruction.
    pub fn run(&mut self) -> Result<(), MachineError> {
        while self.step()? == State::Running {}
        Ok(())
    }

    /// Executes one fetch/decode/execute cycle.
    ///
    /// Returns [`State::Halted`] once `HLT` has been fetched; stepping a halted machine is
    /// a no-op.
    ///
    /// A faulting instruction changes nothing but IR. Registers, memory, FL, and the PC
    /// are left as they were, so stepping again reports the same fault.
    ///
    /// # Errors
    ///
    /// Bounds violations on fetch or execute, decode failures, and ALU invariant violations.
    pub fn step(&mut self) -> Result<State, MachineError> {
        if self.state == State::Halted {
            return Ok(State::Halted);
        }
        self.cycle().inspect_err(|e| {
            tracing::warn!(pc = self.cpu.pc, ir = self.cpu.ir, error = %e, "machine fault");
        })
    }

    fn cycle(&mut self) -> Result<State, MachineError> {
        let pc = self.cpu.pc;
        let opcode = self.cpu.ram_read(pc)?;
        self.cpu.ir = opcode;

        let strict = match self.fetch_policy {
            FetchPolicy::Strict => Some(Operands::new(
                self.cpu.read_operand(1)?,
                self.cpu.read_operand(2)?,
            )),
            FetchPolicy::Lenient => None,
        };

        if self.cpu.trace {
            tracing::trace!(target: "ls8::trace", "{}", self.trace_line());
        }

        if opcode == opcodes::HLT {
            self.state = State::Halted;
            tracing::debug!(
                pc,
                retired = self.cpu.stats.instructions_retired,
                "halted"
            );
            return Ok(State::Halted);
        }

        let handler = self.dispatcher.decode(opcode, pc)?;
        let ops = match strict {
            Some(ops) => ops,
            None => {
                let mut bytes = [0u8; 2];
                for (i, slot) in bytes.iter_mut().take(handler.operand_count()).enumerate() {
                    *slot = self.cpu.read_operand(i + 1)?;
                }
                Operands::new(bytes[0], bytes[1])
            }
        };

        handler.execute(&mut self.cpu, opcode, ops)?;
        self.cpu.stats.instructions_retired += 1;
        Ok(State::Running)
    }

    /// Formats the current state and the instruction at PC for tracing.
    pub fn trace_line(&self) -> String {
        let byte_at = |offset: usize| self.cpu.ram.peek(self.cpu.pc + offset).unwrap_or(0);
        let text = disasm::disassemble(&self.dispatcher, byte_at(0), byte_at(1), byte_at(2));
        format!("{} {}", self.cpu.trace_state(), text)
    }
}
