//! Security module for command risk analysis.
//!
//! This module holds the static rule catalog and the pure classifier
//! functions that turn generated command text into danger reasons,
//! heuristic warnings, and an aggregate risk level.

mod analyzer;
mod rules;

pub use analyzer::{danger_reasons, heuristic_warnings, is_safe_command, risk_level};

use std::fmt;

/// Severity attached to a single heuristic rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Medium => write!(f, "MEDIUM"),
            Severity::High => write!(f, "HIGH"),
        }
    }
}

/// Aggregate risk collapsed from all heuristic matches of one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::High => write!(f, "HIGH"),
        }
    }
}

/// A single heuristic match: what was flagged and how severe it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicWarning {
    pub message: &'static str,
    pub severity: Severity,
}
