//! OpenAI-compatible completion client.

use super::Completer;
use crate::error::{GlimtError, Result};
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

/// Default timeout for completion requests (2 minutes).
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Groq serves an OpenAI-compatible chat API under this base.
const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Chat-completion backed [`Completer`].
///
/// Works against OpenAI directly (key from `OPENAI_API_KEY`) or any
/// OpenAI-compatible endpoint via [`OpenAiCompleter::for_groq`].
pub struct OpenAiCompleter {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
}

impl OpenAiCompleter {
    /// Create a completer against the OpenAI API.
    pub fn new(model: &str, temperature: f32) -> Self {
        Self {
            client: create_client(OpenAIConfig::default()),
            model: model.to_string(),
            temperature,
        }
    }

    /// Create a completer against Groq's OpenAI-compatible API.
    pub fn for_groq(api_key: &str, model: &str, temperature: f32) -> Self {
        let config = OpenAIConfig::new()
            .with_api_base(GROQ_API_BASE)
            .with_api_key(api_key);

        Self {
            client: create_client(config),
            model: model.to_string(),
            temperature,
        }
    }
}

/// Build a chat client with a configured request timeout.
fn create_client(config: OpenAIConfig) -> Client<OpenAIConfig> {
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client");

    Client::with_config(config).with_http_client(http_client)
}

#[async_trait]
impl Completer for OpenAiCompleter {
    #[instrument(skip(self, system, user))]
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(system)
                .build()
                .map_err(|e| GlimtError::Rag(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(user)
                .build()
                .map_err(|e| GlimtError::Rag(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(self.temperature)
            .build()
            .map_err(|e| GlimtError::Rag(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| GlimtError::OpenAI(format!("Completion request failed: {e}")))?;

        let answer = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .ok_or_else(|| GlimtError::Rag("Empty response from LLM".to_string()))?
            .clone();

        debug!("Completion of {} chars", answer.len());
        Ok(answer)
    }
}
