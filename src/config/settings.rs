//! Configuration settings for Glimt.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub videodb: VideoDbSettings,
    pub search: SearchSettings,
    pub llm: LlmSettings,
    pub prompts: PromptSettings,
}


/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// VideoDB backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoDbSettings {
    /// API key; falls back to the VIDEODB_API_KEY environment variable.
    pub api_key: Option<String>,
    /// API endpoint.
    pub base_url: String,
    /// Default collection name for uploads and collection-wide search.
    pub collection: String,
}

impl Default for VideoDbSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.videodb.io/".to_string(),
            collection: "educational_videos".to_string(),
        }
    }
}

impl VideoDbSettings {
    /// Resolve the API key from config or environment.
    pub fn resolve_api_key(&self) -> crate::error::Result<String> {
        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var("VIDEODB_API_KEY").ok().filter(|k| !k.is_empty()))
            .ok_or_else(|| {
                crate::error::GlimtError::Config(
                    "VideoDB API key not set. Add videodb.api_key to the config file or export VIDEODB_API_KEY.".to_string(),
                )
            })
    }
}

/// Retrieval settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Maximum segments returned per question.
    pub max_results: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { max_results: 5 }
    }
}

/// LLM settings for answer and quiz generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// Provider (openai, groq, none).
    pub provider: String,
    /// Chat model for response generation.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.5,
        }
    }
}

/// Prompt customization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PromptSettings {
    /// Directory for custom prompts (overrides defaults).
    pub custom_dir: Option<String>,
    /// Custom variables available in all prompts as {{variable_name}}.
    pub variables: std::collections::HashMap<String, String>,
}


impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to the default configuration file.
    pub fn save(&self) -> crate::error::Result<()> {
        self.save_to(&Self::default_config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::GlimtError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("glimt")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.search.max_results, 5);
        assert_eq!(settings.llm.provider, "openai");
        assert_eq!(settings.videodb.collection, "educational_videos");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [videodb]
            collection = "lectures"

            [llm]
            provider = "none"
            "#,
        )
        .unwrap();

        assert_eq!(settings.videodb.collection, "lectures");
        assert_eq!(settings.llm.provider, "none");
        // Untouched sections keep their defaults.
        assert_eq!(settings.search.max_results, 5);
        assert_eq!(settings.llm.model, "gpt-4o-mini");
    }
}
