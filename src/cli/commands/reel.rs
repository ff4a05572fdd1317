//! Reel command implementation.

use super::{build_client, build_rag};
use crate::cli::output::youtube_watch_link;
use crate::cli::Output;
use crate::config::Settings;
use crate::reel::{build_timeline, collect_topic_segments, parse_topics};
use crate::search::format_timestamp;
use anyhow::Result;

/// Run the reel command.
pub async fn run_reel(
    topics: &str,
    video_id: &str,
    url: Option<String>,
    settings: Settings,
) -> Result<()> {
    let topic_list = parse_topics(topics);
    if topic_list.is_empty() {
        anyhow::bail!("No topics given. Pass a comma-separated list, e.g. \"overview, example\".");
    }

    let client = build_client(&settings)?;
    let rag = build_rag(&client, &settings, video_id).await?;

    let spinner = Output::spinner("Collecting segments...");
    let segments = collect_topic_segments(&rag, &topic_list).await;
    let timeline = build_timeline(segments);
    spinner.finish_and_clear();

    if timeline.is_empty() {
        Output::warning("No segments found for a reel. Try different topics.");
        return Ok(());
    }

    Output::success(&format!("Segments: {}", timeline.len()));

    let video = client.video(video_id);
    match video.generate_stream(&timeline).await {
        Some(stream_url) => {
            Output::kv("Stream", &stream_url);
        }
        None => {
            Output::warning("Could not generate stitched stream. Showing first match instead.");
            let (start, _) = timeline[0];
            Output::kv("First match", &format_timestamp(start));
            if let Some(link) = url.as_deref().and_then(|u| youtube_watch_link(u, start)) {
                Output::kv("Link", &link);
            }
        }
    }

    Ok(())
}
