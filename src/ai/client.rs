//! Groq-backed implementation of the generation service.
//!
//! Groq exposes an OpenAI-compatible API, so this is the regular
//! async-openai client pointed at the Groq base URL.

use anyhow::{Context as _, Result, anyhow};
use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;

use crate::config::ConfigStore;

use super::CommandGenerator;
use super::prompt::{EXPLAIN_PROMPT, SYSTEM_PROMPT};

pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

const TEMPERATURE: f32 = 0.2;
const MAX_TOKENS: u32 = 200;

pub struct GroqClient {
    client: Client<OpenAIConfig>,
    pub model: String,
}

impl GroqClient {
    /// Build a client with an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        let config = OpenAIConfig::new()
            .with_api_base(GROQ_API_BASE)
            .with_api_key(api_key.into());
        Self {
            client: Client::with_config(config),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Build a client from the resolved credential (environment first,
    /// then the config file). Fails when no key is available.
    pub fn from_store(store: &ConfigStore) -> Result<Self> {
        let api_key = store.resolve_api_key().ok_or_else(|| {
            anyhow!(
                "Missing Groq API key. Run 'naturally-linux config set-key' or export GROQ_API_KEY."
            )
        })?;
        Ok(Self::new(api_key))
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let system_msg = ChatCompletionRequestSystemMessageArgs::default()
            .content(system)
            .build()
            .context("Failed to build system message")?;
        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user)
            .build()
            .context("Failed to build user message")?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([system_msg.into(), user_msg.into()])
            .temperature(TEMPERATURE)
            .max_tokens(MAX_TOKENS)
            .build()
            .context("Failed to build completion request")?;

        tracing::debug!(model = %self.model, "sending completion request");

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .context("Groq request failed")?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_default();
        Ok(content)
    }
}

#[async_trait]
impl CommandGenerator for GroqClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let completion = self.complete(SYSTEM_PROMPT, prompt).await?;
        first_command_line(&completion).ok_or_else(|| anyhow!("The model returned an empty command"))
    }

    async fn explain(&self, command: &str) -> Result<String> {
        let completion = self.complete(EXPLAIN_PROMPT, command).await?;
        Ok(completion.trim().to_string())
    }
}

/// Reduce a completion to its first line, trimmed. Models occasionally
/// answer with trailing prose despite the prompt.
fn first_command_line(completion: &str) -> Option<String> {
    let line = completion.trim().lines().next()?.trim();
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}
