//! Ask command implementation.

use super::{build_client, build_rag};
use crate::cli::output::youtube_watch_link;
use crate::cli::Output;
use crate::config::{Prompts, Settings};
use crate::llm;
use crate::rag::AnswerEngine;
use anyhow::Result;

/// Run the ask command.
pub async fn run_ask(
    question: &str,
    video_id: &str,
    max_results: Option<usize>,
    model: Option<String>,
    url: Option<String>,
    settings: Settings,
) -> Result<()> {
    let client = build_client(&settings)?;
    let rag = build_rag(&client, &settings, video_id).await?;

    let mut llm_settings = settings.llm.clone();
    if let Some(model) = model {
        llm_settings.model = model;
    }

    let completer = llm::create_completer(&llm_settings);
    if completer.is_none() {
        Output::info("AI is disabled. Answers will show top matching segments.");
    }

    let prompts = Prompts::load(
        settings.prompts.custom_dir.as_deref(),
        Some(&settings.prompts.variables),
    )?;

    let mut engine = AnswerEngine::new(rag).with_prompts(prompts);
    if let Some(completer) = completer {
        engine = engine.with_completer(completer);
    }

    let max_results = max_results.unwrap_or(settings.search.max_results);

    let spinner = Output::spinner("Searching...");
    let response = engine.ask(question, max_results).await;
    spinner.finish_and_clear();

    println!("\n{}\n", response.answer);

    if response.has_sources() {
        Output::header("Top matches");
        for segment in &response.sources {
            let link = url
                .as_deref()
                .and_then(|u| youtube_watch_link(u, segment.start_time));
            Output::segment(
                &segment.timestamp(),
                segment.score,
                &segment.text,
                link.as_deref(),
            );
        }
    }

    Ok(())
}
