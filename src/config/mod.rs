//! Configuration module for Glimt.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::{AnswerPrompts, Prompts, QuizPrompts};
pub use settings::{
    GeneralSettings, LlmSettings, PromptSettings, SearchSettings, Settings, VideoDbSettings,
};
