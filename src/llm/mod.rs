//! LLM completion abstraction.
//!
//! Answer and quiz generation only need "prompt in, text out"; the trait
//! keeps them independent of which chat API serves the completion.

mod openai;

pub use openai::OpenAiCompleter;

use crate::config::LlmSettings;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

/// Trait for LLM text completion.
#[async_trait]
pub trait Completer: Send + Sync {
    /// Generate a completion for a system/user prompt pair.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

/// Supported LLM providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LlmProvider {
    #[default]
    OpenAi,
    /// Groq's OpenAI-compatible API.
    Groq,
    /// LLM features disabled.
    None,
}

impl std::str::FromStr for LlmProvider {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(LlmProvider::OpenAi),
            "groq" => Ok(LlmProvider::Groq),
            "none" | "" => Ok(LlmProvider::None),
            _ => Err(format!("Unknown LLM provider: {s}")),
        }
    }
}

impl std::fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LlmProvider::OpenAi => write!(f, "openai"),
            LlmProvider::Groq => write!(f, "groq"),
            LlmProvider::None => write!(f, "none"),
        }
    }
}

/// Build a completer from settings, or `None` when LLM features are off.
///
/// An unknown provider name or a missing Groq key degrades to `None` with a
/// warning rather than failing the command; retrieval still works without
/// an LLM.
pub fn create_completer(settings: &LlmSettings) -> Option<Arc<dyn Completer>> {
    let provider = match settings.provider.parse::<LlmProvider>() {
        Ok(p) => p,
        Err(e) => {
            warn!("{e}, disabling LLM features");
            return None;
        }
    };

    match provider {
        LlmProvider::OpenAi => {
            if std::env::var("OPENAI_API_KEY").is_err() {
                warn!("OPENAI_API_KEY is not set, disabling LLM features");
                return None;
            }
            Some(Arc::new(OpenAiCompleter::new(
                &settings.model,
                settings.temperature,
            )))
        }
        LlmProvider::Groq => match std::env::var("GROQ_API_KEY") {
            Ok(key) => Some(Arc::new(OpenAiCompleter::for_groq(
                &key,
                &settings.model,
                settings.temperature,
            ))),
            Err(_) => {
                warn!("GROQ_API_KEY is not set, disabling LLM features");
                None
            }
        },
        LlmProvider::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_parsing() {
        assert_eq!("openai".parse::<LlmProvider>().unwrap(), LlmProvider::OpenAi);
        assert_eq!("Groq".parse::<LlmProvider>().unwrap(), LlmProvider::Groq);
        assert_eq!("none".parse::<LlmProvider>().unwrap(), LlmProvider::None);
        assert!("gemini".parse::<LlmProvider>().is_err());
    }
}
