//! Naturally Linux - translate natural language into safe Linux commands
//!
//! This library provides the core functionality for Naturally Linux, including:
//! - Groq-backed command generation and explanation
//! - Substring and heuristic safety analysis of generated commands
//! - A confirmation gate that decides whether a command may run
//! - Bounded shell execution with captured output
//!
//! # Example
//!
//! ```
//! use naturally_linux::security::{danger_reasons, heuristic_warnings, risk_level};
//! use naturally_linux::RiskLevel;
//!
//! let reasons = danger_reasons("rm -rf /tmp/cache");
//! assert_eq!(reasons, vec!["Recursive delete detected"]);
//!
//! let warnings = heuristic_warnings("sudo du -a /");
//! assert_eq!(risk_level(&warnings), RiskLevel::High);
//! ```

pub mod ai;
pub mod cli;
pub mod config;
pub mod gate;
pub mod security;
pub mod shell;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use gate::{ExecutionGate, GateOptions, GateOutcome};
pub use security::{HeuristicWarning, RiskLevel, Severity};
pub use shell::{CommandRunner, ExecutionOutcome, ShellRunner};
