//! CLI command implementations.

mod ask;
mod config;
mod quiz;
mod reel;
mod search;
mod serve;
mod transcript;
mod upload;

pub use ask::run_ask;
pub use config::run_config;
pub use quiz::run_quiz;
pub use reel::run_reel;
pub use search::run_search;
pub use serve::run_serve;
pub use transcript::run_transcript;
pub use upload::run_upload;

use crate::config::Settings;
use crate::rag::VideoRag;
use crate::search::VideoDbClient;
use anyhow::Result;
use std::sync::Arc;

/// Build the backend client from settings.
fn build_client(settings: &Settings) -> Result<VideoDbClient> {
    let api_key = settings.videodb.resolve_api_key()?;
    let client = VideoDbClient::with_base_url(&api_key, &settings.videodb.base_url)?;
    Ok(client)
}

/// Build a retrieval engine over one video, with the configured collection
/// as the last-resort search tier.
async fn build_rag(
    client: &VideoDbClient,
    settings: &Settings,
    video_id: &str,
) -> Result<VideoRag> {
    let video = Arc::new(client.video(video_id));
    let collection = client
        .ensure_collection(&settings.videodb.collection)
        .await?;

    Ok(VideoRag::new(video).with_collection(Arc::new(collection)))
}
