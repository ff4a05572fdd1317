//! Transcript command implementation.

use super::build_client;
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Run the transcript command.
pub async fn run_transcript(
    video_id: &str,
    output: Option<String>,
    settings: Settings,
) -> Result<()> {
    let client = build_client(&settings)?;
    let video = client.video(video_id);

    let spinner = Output::spinner("Loading transcript...");
    let text = video.transcript_text().await;
    spinner.finish_and_clear();

    if text.is_empty() {
        Output::warning("Transcript not available yet.");
        return Ok(());
    }

    match output {
        Some(path) => {
            std::fs::write(&path, &text)?;
            Output::success(&format!("Wrote transcript to {path}"));
        }
        None => println!("{text}"),
    }

    Ok(())
}
