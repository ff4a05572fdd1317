//! Upload command implementation.

use super::build_client;
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Run the upload command.
pub async fn run_upload(url: &str, collection: Option<String>, settings: Settings) -> Result<()> {
    let client = build_client(&settings)?;
    let collection_name = collection.unwrap_or_else(|| settings.videodb.collection.clone());

    let spinner = Output::spinner("Uploading and indexing...");

    let result = async {
        let collection = client.ensure_collection(&collection_name).await?;
        let video_id = collection.upload(url).await?;
        client.video(&video_id).ensure_spoken_index().await?;
        anyhow::Ok((collection, video_id))
    }
    .await;

    spinner.finish_and_clear();

    match result {
        Ok((collection, video_id)) => {
            Output::success("Indexed spoken words. Ready for search.");
            Output::kv("Video id", &video_id);
            Output::kv("Collection", collection.id());
            println!();
            Output::info(&format!(
                "Try: glimt ask \"What is the main topic?\" --video {video_id}"
            ));
            Ok(())
        }
        Err(e) => {
            Output::error(&format!("Upload failed: {e}"));
            Err(e)
        }
    }
}
