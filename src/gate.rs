//! Confirmation gate between command generation and execution.
//!
//! Every generated command passes through the same pipeline: show it,
//! stop on known-dangerous substrings, stop on heuristic risk patterns,
//! then either preview it (dry run) or ask before running it. Declining
//! any checkpoint aborts the whole run. Auto-approve silences the danger
//! prompt and the final run prompt, but a heuristic hit always asks.

use std::time::Duration;

use crate::ai::CommandGenerator;
use crate::security::{danger_reasons, heuristic_warnings, is_safe_command, risk_level};
use crate::shell::{CommandRunner, ExecutionOutcome};
use crate::ui;

/// Conventional exit code for a run the user declined, mirroring a
/// SIGINT death (128 + 2).
pub const USER_ABORT_EXIT_CODE: i32 = 130;

/// Yes/no prompt, answered by a terminal in production and by a script
/// in tests.
pub trait Confirmation {
    fn confirm(&mut self, prompt: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateDecision {
    Proceed,
    Abort,
}

#[derive(Debug, Clone, Copy)]
pub struct GateOptions {
    pub auto_approve: bool,
    pub dry_run: bool,
    pub timeout: Duration,
}

/// Terminal state of one gated run.
#[derive(Debug)]
pub enum GateOutcome {
    /// The command ran; the outcome carries its output and exit code.
    Executed(ExecutionOutcome),
    /// Dry run finished without the user asking for execution.
    NotExecuted,
    /// The user declined a checkpoint.
    Aborted,
    /// Generation or execution failed before any exit code existed.
    Failed(anyhow::Error),
}

impl GateOutcome {
    /// Process exit code for this outcome. Executed commands pass their
    /// own code through unchanged.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Executed(outcome) => outcome.exit_code,
            Self::NotExecuted => 0,
            Self::Aborted => USER_ABORT_EXIT_CODE,
            Self::Failed(_) => 1,
        }
    }
}

pub struct ExecutionGate<'a> {
    generator: &'a dyn CommandGenerator,
    runner: &'a dyn CommandRunner,
    confirm: &'a mut dyn Confirmation,
    options: GateOptions,
}

impl<'a> ExecutionGate<'a> {
    pub fn new(
        generator: &'a dyn CommandGenerator,
        runner: &'a dyn CommandRunner,
        confirm: &'a mut dyn Confirmation,
        options: GateOptions,
    ) -> Self {
        Self {
            generator,
            runner,
            confirm,
            options,
        }
    }

    /// Drive one prompt through the full pipeline.
    pub async fn run(&mut self, prompt: &str) -> GateOutcome {
        let spinner = ui::spinner("Generating command");
        let generated = self.generator.generate(prompt).await;
        spinner.finish_and_clear();

        let command = match generated {
            Ok(command) => command,
            Err(e) => {
                tracing::error!("Command generation failed: {e:#}");
                return GateOutcome::Failed(e);
            }
        };
        tracing::info!(command = %command, "Generated command");
        ui::print_proposed(&command);

        if self.danger_checkpoint(&command) == GateDecision::Abort {
            return GateOutcome::Aborted;
        }
        if self.heuristic_checkpoint(&command) == GateDecision::Abort {
            return GateOutcome::Aborted;
        }

        if self.options.dry_run {
            self.preview_then_execute(&command).await
        } else {
            self.confirm_then_execute(&command).await
        }
    }

    /// Substring rules: a hit needs explicit approval unless the run is
    /// auto-approved.
    fn danger_checkpoint(&mut self, command: &str) -> GateDecision {
        let reasons = danger_reasons(command);
        if reasons.is_empty() {
            return GateDecision::Proceed;
        }
        tracing::warn!(command = %command, ?reasons, "Dangerous command detected");
        ui::print_danger_reasons(&reasons);
        if self.options.auto_approve || self.confirm.confirm("Proceed anyway?") {
            GateDecision::Proceed
        } else {
            GateDecision::Abort
        }
    }

    /// Heuristic rules: a hit always asks, auto-approve included.
    fn heuristic_checkpoint(&mut self, command: &str) -> GateDecision {
        let warnings = heuristic_warnings(command);
        if warnings.is_empty() {
            return GateDecision::Proceed;
        }
        tracing::warn!(command = %command, count = warnings.len(), "Heuristic risk detected");
        ui::print_heuristic_alert(&warnings);
        if self.confirm.confirm("Proceed anyway?") {
            GateDecision::Proceed
        } else {
            GateDecision::Abort
        }
    }

    /// Dry run: explain the command and print the safety summary, then
    /// only execute on explicit request.
    async fn preview_then_execute(&mut self, command: &str) -> GateOutcome {
        let spinner = ui::spinner("Explaining command");
        let explained = self.generator.explain(command).await;
        spinner.finish_and_clear();

        match explained {
            Ok(text) if !text.is_empty() => ui::print_explanation(&text),
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("Explanation request failed: {e:#}");
                ui::print_warning(&format!("{e:#}"));
            }
        }

        ui::print_safety_verdict(is_safe_command(command));
        let warnings = heuristic_warnings(command);
        ui::print_risk_summary(risk_level(&warnings), &warnings);

        if self.options.auto_approve || self.confirm.confirm("Run this command now?") {
            self.execute(command).await
        } else {
            ui::print_not_executed();
            GateOutcome::NotExecuted
        }
    }

    async fn confirm_then_execute(&mut self, command: &str) -> GateOutcome {
        if !self.options.auto_approve && !self.confirm.confirm("Run this command?") {
            return GateOutcome::Aborted;
        }
        self.execute(command).await
    }

    async fn execute(&mut self, command: &str) -> GateOutcome {
        match self.runner.run(command, self.options.timeout).await {
            Ok(outcome) => {
                tracing::info!(
                    exit_code = outcome.exit_code,
                    timed_out = outcome.timed_out,
                    "Command finished"
                );
                ui::print_outcome(&outcome);
                GateOutcome::Executed(outcome)
            }
            Err(e) => {
                tracing::error!("Execution failed: {e:#}");
                GateOutcome::Failed(e)
            }
        }
    }
}
