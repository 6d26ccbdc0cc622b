//! Execution statistics collection and reporting.
//!
//! This module tracks what a run did. It provides:
//! 1. **Retirement:** Instructions executed (`HLT` is not counted).
//! 2. **Instruction mix:** ALU, stack, and print counts.
//! 3. **Control flow:** Taken jumps, calls, and returns.
//!
//! Statistics are observational only; nothing reads them back into the machine.

use serde::Serialize;
use std::time::Instant;

/// Run statistics for one machine.
#[derive(Clone, Debug, Serialize)]
pub struct ExecStats {
    #[serde(skip)]
    start_time: Instant,
    /// Number of instructions executed to completion.
    pub instructions_retired: u64,
    /// ADD, MUL, and CMP executions.
    pub inst_alu: u64,
    /// PUSH and POP executions.
    pub inst_stack: u64,
    /// PRN executions.
    pub inst_print: u64,
    /// JMP, and JEQ/JNE that were taken.
    pub branches_taken: u64,
    /// JEQ/JNE that fell through.
    pub branches_not_taken: u64,
    /// CALL executions.
    pub calls: u64,
    /// RET executions.
    pub returns: u64,
}

impl ExecStats {
    /// Creates zeroed statistics and starts the wall clock.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            inst_stack: 0,
            inst_print: 0,
            branches_taken: 0,
            branches_not_taken: 0,
            calls: 0,
            returns: 0,
        }
    }

    /// Records a conditional jump outcome.
    pub const fn record_branch(&mut self, taken: bool) {
        if taken {
            self.branches_taken += 1;
        } else {
            self.branches_not_taken += 1;
        }
    }

    /// Renders a human-readable summary.
    pub fn report(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let ips = if seconds > 0.0 {
            self.instructions_retired as f64 / seconds
        } else {
            0.0
        };
        let rule = "----------------------------------------------------------";
        [
            rule.to_string(),
            "LS8 EXECUTION STATISTICS".to_string(),
            rule.to_string(),
            format!("host_seconds             {seconds:.4} s"),
            format!("sim_insts                {}", self.instructions_retired),
            format!("sim_ips                  {ips:.0}"),
            format!("inst.alu                 {}", self.inst_alu),
            format!("inst.stack               {}", self.inst_stack),
            format!("inst.print               {}", self.inst_print),
            format!("branch.taken             {}", self.branches_taken),
            format!("branch.not_taken         {}", self.branches_not_taken),
            format!("call                     {}", self.calls),
            format!("ret                      {}", self.returns),
            rule.to_string(),
        ]
        .join("\n")
    }

    /// Prints the summary to stderr so it never mixes with `PRN` output.
    pub fn print(&self) {
        eprintln!("{}", self.report());
    }
}

impl Default for ExecStats {
    fn default() -> Self {
        Self::new()
    }
}
