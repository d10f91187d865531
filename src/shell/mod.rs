//! Shell execution module.
//!
//! Approved commands are handed as opaque text to `sh -c` and run under a
//! wall-clock timeout; output is captured whole, never streamed.

mod runner;

pub use runner::{CommandRunner, ExecutionOutcome, ShellRunner, TIMEOUT_EXIT_CODE};
