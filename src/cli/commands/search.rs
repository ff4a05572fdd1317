//! Search command implementation.

use super::{build_client, build_rag};
use crate::cli::output::youtube_watch_link;
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Run the search command.
pub async fn run_search(
    query: &str,
    video_id: &str,
    limit: Option<usize>,
    url: Option<String>,
    settings: Settings,
) -> Result<()> {
    let client = build_client(&settings)?;
    let rag = build_rag(&client, &settings, video_id).await?;
    let limit = limit.unwrap_or(settings.search.max_results);

    let spinner = Output::spinner("Searching...");
    let segments = rag.search_video_content(query, limit).await;
    spinner.finish_and_clear();

    if segments.is_empty() {
        Output::warning("No matches. Try simpler keywords like overview, definition, or example.");
        return Ok(());
    }

    Output::success(&format!("Found {} matching segments", segments.len()));

    for segment in &segments {
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

    Ok(())
}
