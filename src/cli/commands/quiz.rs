//! Quiz command implementation.

use super::{build_client, build_rag};
use crate::cli::Output;
use crate::config::{Prompts, Settings};
use crate::llm;
use crate::rag::QuizBuilder;
use anyhow::Result;

/// Run the quiz command.
pub async fn run_quiz(
    topic: &str,
    video_id: &str,
    questions: usize,
    settings: Settings,
) -> Result<()> {
    let client = build_client(&settings)?;
    let rag = build_rag(&client, &settings, video_id).await?;

    let prompts = Prompts::load(
        settings.prompts.custom_dir.as_deref(),
        Some(&settings.prompts.variables),
    )?;

    let mut builder = QuizBuilder::new(rag).with_prompts(prompts);
    if let Some(completer) = llm::create_completer(&settings.llm) {
        builder = builder.with_completer(completer);
    }

    let spinner = Output::spinner("Building quiz...");
    let result = builder.build(topic, questions).await;
    spinner.finish_and_clear();

    match result {
        Ok(quiz_md) => {
            println!("{quiz_md}");
            Ok(())
        }
        Err(e) => {
            Output::error(&format!("Quiz generation failed: {e}"));
            Err(e.into())
        }
    }
}
