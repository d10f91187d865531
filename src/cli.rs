//! Command line surface.
//!
//! The first positional argument is the natural-language prompt, so
//! `naturally-linux "list files here"` works without a subcommand. The
//! `config` subcommand manages the stored API key.

use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::ai::GroqClient;
use crate::config::{ConfigStore, mask_key};
use crate::gate::{ExecutionGate, GateOptions, GateOutcome};
use crate::shell::ShellRunner;
use crate::ui;

const EXAMPLES: &str = "\
Examples:
  naturally-linux \"list files in this folder\"
  naturally-linux \"find files larger than 10MB\" --dry-run
  naturally-linux config set-key YOUR_GROQ_API_KEY

Commands:
  config set-key   Store Groq API key
  config show      Show stored API key (masked)
  config delete    Remove stored API key

Notes:
  Set GROQ_API_KEY or use the config commands to store it.";

#[derive(Parser, Debug)]
#[command(name = "naturally-linux", version)]
#[command(about = "Naturally Linux: translate natural language into safe Linux commands.")]
#[command(after_help = EXAMPLES, args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Natural language task description.
    #[arg(required = true)]
    prompt: Option<String>,

    /// Skip confirmation prompts and execute immediately.
    #[arg(short = 'y', long = "yes")]
    auto_approve: bool,

    /// Show explanation and safety verdict without executing.
    #[arg(long)]
    dry_run: bool,

    /// Execution timeout in seconds.
    #[arg(long, value_name = "SECONDS", default_value_t = 15.0, value_parser = parse_timeout)]
    timeout: f64,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage Naturally Linux configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Store the Groq API key in the user config file.
    SetKey {
        /// Groq API key to store locally.
        api_key: String,
    },
    /// Show whether an API key is configured (masked if present).
    Show,
    /// Delete the stored API key from the config file.
    Delete,
}

fn parse_timeout(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if !value.is_finite() || value <= 0.0 {
        return Err("timeout must be a positive number of seconds".to_string());
    }
    // Duration::from_secs_f64 panics past Duration's range
    if Duration::try_from_secs_f64(value).is_err() {
        return Err("timeout is too large".to_string());
    }
    Ok(value)
}

/// Dispatch a parsed invocation and return the process exit code.
pub async fn execute(cli: Cli) -> i32 {
    match cli.command {
        Some(Commands::Config { action }) => handle_config(action),
        None => match cli.prompt {
            Some(ref prompt) => {
                handle_prompt(prompt, cli.auto_approve, cli.dry_run, cli.timeout).await
            }
            // clap enforces the prompt whenever no subcommand is given
            None => 2,
        },
    }
}

async fn handle_prompt(prompt: &str, auto_approve: bool, dry_run: bool, timeout: f64) -> i32 {
    let store = ConfigStore::default_location();
    let client = match GroqClient::from_store(&store) {
        Ok(client) => client,
        Err(e) => {
            ui::print_warning(&format!("{e:#}"));
            return 1;
        }
    };
    let runner = ShellRunner;
    let mut confirm = ui::TerminalConfirm;
    let options = GateOptions {
        auto_approve,
        dry_run,
        timeout: Duration::from_secs_f64(timeout),
    };

    let mut gate = ExecutionGate::new(&client, &runner, &mut confirm, options);
    let outcome = gate.run(prompt).await;
    match &outcome {
        GateOutcome::Aborted => ui::print_aborted(),
        GateOutcome::Failed(e) => ui::print_warning(&format!("{e:#}")),
        _ => {}
    }
    outcome.exit_code()
}

fn handle_config(action: ConfigAction) -> i32 {
    let store = ConfigStore::default_location();
    match action {
        ConfigAction::SetKey { api_key } => match store.set_api_key(&api_key) {
            Ok(()) => {
                println!("Saved API key to {}", store.path().display());
                0
            }
            Err(e) => {
                ui::print_error(&format!("{e:#}"));
                1
            }
        },
        ConfigAction::Show => {
            match store.resolve_api_key() {
                Some(key) => println!("GROQ_API_KEY: {}", mask_key(&key)),
                None => println!("No API key configured."),
            }
            0
        }
        ConfigAction::Delete => match store.delete_api_key() {
            Ok(true) => {
                println!("API key removed.");
                0
            }
            Ok(false) => {
                println!("No API key found to delete.");
                0
            }
            Err(e) => {
                ui::print_error(&format!("{e:#}"));
                1
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory as _;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_prompt_with_flags() {
        let cli = Cli::try_parse_from(["naturally-linux", "clean old caches", "--dry-run", "-y"])
            .unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.prompt.as_deref(), Some("clean old caches"));
        assert!(cli.auto_approve);
        assert!(cli.dry_run);
        assert_eq!(cli.timeout, 15.0);
    }

    #[test]
    fn test_parses_config_set_key() {
        let cli = Cli::try_parse_from(["naturally-linux", "config", "set-key", "gsk_abc"]).unwrap();
        match cli.command {
            Some(Commands::Config {
                action: ConfigAction::SetKey { api_key },
            }) => assert_eq!(api_key, "gsk_abc"),
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn test_timeout_flag_overrides_default() {
        let cli = Cli::try_parse_from(["naturally-linux", "check disk space", "--timeout", "30"])
            .unwrap();
        assert_eq!(cli.timeout, 30.0);
    }

    #[test]
    fn test_timeout_must_be_positive() {
        assert!(Cli::try_parse_from(["naturally-linux", "x", "--timeout", "0"]).is_err());
        assert!(Cli::try_parse_from(["naturally-linux", "x", "--timeout=-5"]).is_err());
        assert!(Cli::try_parse_from(["naturally-linux", "x", "--timeout", "abc"]).is_err());
    }

    #[test]
    fn test_timeout_rejects_values_beyond_duration_range() {
        assert!(parse_timeout("2e19").is_err());
        assert!(parse_timeout("1e308").is_err());
        assert!(Cli::try_parse_from(["naturally-linux", "x", "--timeout", "2e19"]).is_err());
    }

    #[test]
    fn test_prompt_is_required_without_subcommand() {
        assert!(Cli::try_parse_from(["naturally-linux"]).is_err());
        assert!(Cli::try_parse_from(["naturally-linux", "--dry-run"]).is_err());
    }
}
