//! Main entry point for the naturally-linux CLI.
//!
//! This file loads environment configuration, initializes logging, parses
//! the command line, and exits with the code the gate pipeline decided on.

use clap::Parser as _;

use naturally_linux::cli::{self, Cli};
use naturally_linux::utils;

#[tokio::main]
async fn main() {
    // Let a local .env file provide GROQ_API_KEY during development
    dotenv::dotenv().ok();

    // Initialize logging before anything else
    utils::logger::init_logging();

    let exit_code = cli::execute(Cli::parse()).await;
    std::process::exit(exit_code);
}
