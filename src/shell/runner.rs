//! Bounded command execution.
//!
//! The command runs as a single string through `sh -c`, not a parsed
//! argument vector. That trust boundary is deliberate: the confirmation
//! workflow upstream is what stands between the user and the shell.

use std::process::Stdio;
use std::time::Duration;

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;

/// Exit code reported when the runner kills a command at the deadline,
/// matching conventional shell `timeout` semantics.
pub const TIMEOUT_EXIT_CODE: i32 = 124;

/// Captured result of one execution attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub timed_out: bool,
}

impl ExecutionOutcome {
    fn after_timeout() -> Self {
        Self {
            stdout: String::new(),
            stderr: "Command timed out.".to_string(),
            exit_code: TIMEOUT_EXIT_CODE,
            timed_out: true,
        }
    }
}

/// Executes approved command text. The gate depends on this trait so
/// tests can substitute a recording runner.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &str, time_limit: Duration) -> Result<ExecutionOutcome>;
}

/// The real runner: `sh -c <command>` with the deadline enforced by tokio.
pub struct ShellRunner;

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str, time_limit: Duration) -> Result<ExecutionOutcome> {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command);
        c.kill_on_drop(true);
        c.stdin(Stdio::null());

        tracing::debug!(
            command = %command,
            timeout_secs = time_limit.as_secs_f64(),
            "spawning shell"
        );

        let output = match timeout(time_limit, c.output()).await {
            Ok(result) => result.context("Failed to spawn shell process")?,
            Err(_) => {
                tracing::warn!(command = %command, "command exceeded its time limit");
                return Ok(ExecutionOutcome::after_timeout());
            }
        };

        Ok(ExecutionOutcome {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: exit_code_of(&output.status),
            timed_out: false,
        })
    }
}

/// Children killed by a signal report no exit code; map them to the shell
/// convention 128 + signal number.
fn exit_code_of(status: &std::process::ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    -1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_captures_stdout_and_exit_code() {
        let outcome = ShellRunner
            .run("echo hello", Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(outcome.exit_code, 0);
        assert!(outcome.stdout.contains("hello"));
        assert!(outcome.stderr.is_empty());
        assert!(!outcome.timed_out);
    }

    #[tokio::test]
    async fn test_run_captures_stderr() {
        let outcome = ShellRunner
            .run("echo oops 1>&2", Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(outcome.exit_code, 0);
        assert!(outcome.stderr.contains("oops"));
        assert!(!outcome.timed_out);
    }

    #[tokio::test]
    async fn test_run_reports_nonzero_exit() {
        let outcome = ShellRunner
            .run("exit 3", Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(outcome.exit_code, 3);
        assert!(!outcome.timed_out);
    }

    #[tokio::test]
    async fn test_run_times_out_with_sentinel() {
        let started = std::time::Instant::now();
        let outcome = ShellRunner
            .run("sleep 5", Duration::from_millis(200))
            .await
            .unwrap();
        assert!(outcome.timed_out);
        assert_eq!(outcome.exit_code, TIMEOUT_EXIT_CODE);
        assert!(outcome.stderr.contains("timed out"));
        assert!(outcome.stdout.is_empty());
        // The caller must not hang for the full sleep
        assert!(started.elapsed() < Duration::from_secs(2));
    }
}
