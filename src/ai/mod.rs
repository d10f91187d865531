//! Generation-service integration.
//!
//! The gate talks to the model through the `CommandGenerator` trait; the
//! real implementation is `GroqClient`. Tests substitute scripted fakes.

mod client;
pub mod prompt;

pub use client::{DEFAULT_MODEL, GROQ_API_BASE, GroqClient};

use anyhow::Result;
use async_trait::async_trait;

/// Prompt-to-command and command-to-explanation service.
///
/// Both calls can fail (missing credential, remote error). The gate
/// treats a failed `generate` as fatal and a failed `explain` as
/// recoverable.
#[async_trait]
pub trait CommandGenerator: Send + Sync {
    /// Turn a natural-language task into a single-line shell command.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Produce a plain-text explanation of a shell command.
    async fn explain(&self, command: &str) -> Result<String>;
}
