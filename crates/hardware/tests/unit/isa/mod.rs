//! Instruction set tests.


/// Dispatch table contents and extension.
pub mod dispatch;
