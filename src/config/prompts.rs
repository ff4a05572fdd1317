//! Prompt templates for Glimt.
//!
//! Prompts can be customized by placing TOML files in the custom prompts directory.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Prompts {
    pub answer: AnswerPrompts,
    pub quiz: QuizPrompts,
    /// Custom variables from config, available in all prompts.
    #[serde(skip)]
    pub variables: std::collections::HashMap<String, String>,
}


/// Prompts for answering questions from retrieved segments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerPrompts {
    pub system: String,
    pub user: String,
}

impl Default for AnswerPrompts {
    fn default() -> Self {
        Self {
            system: r#"You answer questions about a video using transcript excerpts tagged with MM:SS timestamps.

Guidelines:
- Answer using only the provided lines
- Be concise
- End by citing the best timestamp in [MM:SS] format
- If the lines do not cover the question, say so instead of guessing"#
                .to_string(),

            user: r#"Question: {{question}}

Context:
{{context}}"#
                .to_string(),
        }
    }
}

/// Prompts for quiz generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizPrompts {
    pub system: String,
    pub user: String,
}

impl Default for QuizPrompts {
    fn default() -> Self {
        Self {
            system: "You create multiple choice quizzes from timestamped video transcript excerpts."
                .to_string(),

            user: r#"Create {{count}} multiple choice questions from the context lines. Each item should have a question, 4 options A-D, the correct letter, and the timestamp it is drawn from. Return as markdown with headings.

{{context}}"#
                .to_string(),
        }
    }
}

impl Prompts {
    /// Load prompts from the default location, with optional custom directory and variables.
    pub fn load(
        custom_dir: Option<&str>,
        custom_variables: Option<&std::collections::HashMap<String, String>>,
    ) -> crate::error::Result<Self> {
        let mut prompts = Prompts::default();

        // Store custom variables
        if let Some(vars) = custom_variables {
            prompts.variables = vars.clone();
        }

        if let Some(dir) = custom_dir {
            let custom_path = PathBuf::from(shellexpand::tilde(dir).to_string());

            // Load answer prompts if file exists
            let answer_path = custom_path.join("answer.toml");
            if answer_path.exists() {
                let content = std::fs::read_to_string(&answer_path)?;
                prompts.answer = toml::from_str(&content)?;
            }

            // Load quiz prompts if file exists
            let quiz_path = custom_path.join("quiz.toml");
            if quiz_path.exists() {
                let content = std::fs::read_to_string(&quiz_path)?;
                prompts.quiz = toml::from_str(&content)?;
            }
        }

        Ok(prompts)
    }

    /// Render a prompt template with the given variables.
    pub fn render(template: &str, vars: &std::collections::HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{{{}}}}}", key), value);
        }
        result
    }

    /// Render a prompt template with both provided variables and custom config variables.
    /// Provided variables take precedence over custom config variables.
    pub fn render_with_custom(
        &self,
        template: &str,
        vars: &std::collections::HashMap<String, String>,
    ) -> String {
        // Start with custom variables, then override with provided vars
        let mut merged = self.variables.clone();
        for (key, value) in vars {
            merged.insert(key.clone(), value.clone());
        }
        Self::render(template, &merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompts() {
        let prompts = Prompts::default();
        assert!(!prompts.answer.system.is_empty());
        assert!(!prompts.quiz.user.is_empty());
        assert!(prompts.answer.user.contains("{{question}}"));
        assert!(prompts.quiz.user.contains("{{count}}"));
    }

    #[test]
    fn test_render_template() {
        let template = "Question: {{question}}\n\nContext:\n{{context}}";
        let mut vars = std::collections::HashMap::new();
        vars.insert("question".to_string(), "What is covered?".to_string());
        vars.insert("context".to_string(), "00:10: intro".to_string());

        let result = Prompts::render(template, &vars);
        assert_eq!(result, "Question: What is covered?\n\nContext:\n00:10: intro");
    }

    #[test]
    fn test_custom_variables_are_overridden() {
        let mut prompts = Prompts::default();
        prompts
            .variables
            .insert("count".to_string(), "3".to_string());

        let mut vars = std::collections::HashMap::new();
        vars.insert("count".to_string(), "7".to_string());

        let result = prompts.render_with_custom("{{count}} questions", &vars);
        assert_eq!(result, "7 questions");
    }
}
