//! Console output for the command pipeline.
//!
//! All user-facing text goes through here so the color scheme stays in
//! one place: cyan for proposals, red for danger, magenta for heuristic
//! risk, green for explanations and clean verdicts, yellow for warnings
//! and command stderr.

use std::io::{self, IsTerminal as _};
use std::time::Duration;

use colored::Colorize as _;
use dialoguer::Confirm;
use indicatif::ProgressBar;

use crate::gate::Confirmation;
use crate::security::{HeuristicWarning, RiskLevel};
use crate::shell::ExecutionOutcome;

const SPINNER_TICK_RATE: Duration = Duration::from_millis(80);

pub fn print_proposed(command: &str) {
    println!("{}", "Proposed command:".cyan());
    println!("{command}");
}

pub fn print_danger_reasons(reasons: &[&str]) {
    println!("{}", "Potentially unsafe command detected:".red());
    for reason in reasons {
        println!("{}", format!("- {reason}").red());
    }
}

pub fn print_heuristic_alert(warnings: &[HeuristicWarning]) {
    println!(
        "\n{}",
        "This command may scan the entire filesystem or require privileges.".magenta()
    );
    for warning in warnings {
        println!(
            "{}",
            format!("- {} ({})", warning.message, warning.severity).magenta()
        );
    }
}

pub fn print_explanation(text: &str) {
    println!("\n{}", "Explanation:".green());
    println!("{text}");
}

pub fn print_safety_verdict(safe: bool) {
    if safe {
        println!("\n{}", "Safety check: SAFE".green());
    } else {
        println!("\n{}", "Safety check: UNSAFE".red());
    }
}

pub fn print_risk_summary(level: RiskLevel, warnings: &[HeuristicWarning]) {
    println!("\n{}", format!("Heuristic risk: {level}").magenta());
    for warning in warnings {
        println!(
            "{}",
            format!("- {} ({})", warning.message, warning.severity).magenta()
        );
    }
}

/// Echo captured output: stdout as-is, stderr in yellow. Both streams go
/// to our stdout so redirecting the program captures the whole record.
pub fn print_outcome(outcome: &ExecutionOutcome) {
    if !outcome.stdout.is_empty() {
        println!("{}", outcome.stdout);
    }
    if !outcome.stderr.is_empty() {
        println!("{}", outcome.stderr.yellow());
    }
}

pub fn print_not_executed() {
    println!("\n{}", "Dry run mode — command not executed.".yellow());
}

pub fn print_warning(message: &str) {
    println!("{}", message.yellow());
}

pub fn print_error(message: &str) {
    eprintln!("{}", message.red());
}

pub fn print_aborted() {
    eprintln!("{}", "Aborted!".red());
}

/// Interactive yes/no prompt defaulting to no. A closed or non-tty stdin
/// reads as a decline.
pub struct TerminalConfirm;

impl Confirmation for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

/// Spinner for long calls, hidden when stderr is not a terminal.
pub fn spinner(message: &str) -> ProgressBar {
    if !io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(SPINNER_TICK_RATE);
    pb
}
