//! VideoDB HTTP adapter.
//!
//! Implements the search capability traits against the hosted VideoDB API,
//! plus the surrounding collaborator operations the CLI drives (upload,
//! spoken-word indexing, transcripts, stitched streams).

use super::{CollectionSearch, SearchMode, ShotPayload, VideoSearch};
use crate::error::{GlimtError, Result};
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

const DEFAULT_BASE_URL: &str = "https://api.videodb.io/";

/// Default timeout for backend requests (2 minutes).
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Low-level client for the VideoDB REST API.
///
/// Cheap to clone; the underlying HTTP client is shared.
#[derive(Clone)]
pub struct VideoDbClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl VideoDbClient {
    /// Create a client against the hosted API.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom API endpoint.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        let base_url = Url::parse(base_url)
            .map_err(|e| GlimtError::Config(format!("Invalid VideoDB base URL: {e}")))?;

        Ok(Self {
            http,
            base_url,
            api_key: api_key.to_string(),
        })
    }

    /// Bind a handle to a specific video.
    pub fn video(&self, video_id: &str) -> VideoHandle {
        VideoHandle {
            client: self.clone(),
            video_id: video_id.to_string(),
        }
    }

    /// Bind a handle to a specific collection.
    pub fn collection(&self, collection_id: &str) -> CollectionHandle {
        CollectionHandle {
            client: self.clone(),
            collection_id: collection_id.to_string(),
        }
    }

    /// Create a collection by name, or fetch it if it already exists.
    #[instrument(skip(self))]
    pub async fn ensure_collection(&self, name: &str) -> Result<CollectionHandle> {
        let body = json!({ "name": name, "description": format!("Collection {name}") });

        let id = match self.post("collection", body).await {
            Ok(response) => extract_id(&response)?,
            Err(e) => {
                debug!("Collection create failed ({e}), fetching existing");
                let response = self.get(&format!("collection/{name}")).await?;
                extract_id(&response)?
            }
        };

        Ok(self.collection(&id))
    }

    async fn post(&self, path: &str, body: serde_json::Value) -> Result<serde_json::Value> {
        let url = self.endpoint(path)?;
        debug!("POST {url}");

        let response = self
            .http
            .post(url)
            .header("x-access-token", &self.api_key)
            .json(&body)
            .send()
            .await?;

        Self::into_json(response).await
    }

    async fn get(&self, path: &str) -> Result<serde_json::Value> {
        let url = self.endpoint(path)?;
        debug!("GET {url}");

        let response = self
            .http
            .get(url)
            .header("x-access-token", &self.api_key)
            .send()
            .await?;

        Self::into_json(response).await
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| GlimtError::Backend(format!("Invalid endpoint {path}: {e}")))
    }

    async fn into_json(response: reqwest::Response) -> Result<serde_json::Value> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(GlimtError::Backend(extract_error_message(
                status.as_u16(),
                &body,
            )))
        }
    }
}

/// Pull a human-readable message out of an error body, falling back to the
/// raw text when it is not the usual `{"message": ...}` shape.
fn extract_error_message(status: u16, body: &str) -> String {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(|m| m.as_str())
                .map(ToString::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string());

    format!("HTTP {status}: {message}")
}

fn extract_id(response: &serde_json::Value) -> Result<String> {
    response
        .get("id")
        .and_then(|id| id.as_str())
        .map(ToString::to_string)
        .ok_or_else(|| GlimtError::Backend("Response missing 'id' field".to_string()))
}

/// A client bound to one video.
pub struct VideoHandle {
    client: VideoDbClient,
    video_id: String,
}

impl VideoHandle {
    /// The backend's video id.
    pub fn id(&self) -> &str {
        &self.video_id
    }

    /// Trigger spoken-word indexing for this video.
    ///
    /// The backend rejects re-indexing with an "already indexed" error;
    /// that case is treated as success.
    #[instrument(skip(self), fields(video_id = %self.video_id))]
    pub async fn ensure_spoken_index(&self) -> Result<()> {
        let path = format!("video/{}/index", self.video_id);
        match self
            .client
            .post(&path, json!({ "index_type": "spoken_word" }))
            .await
        {
            Ok(_) => Ok(()),
            Err(e) if e.to_string().to_lowercase().contains("already") => {
                debug!("Spoken words already indexed");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Fetch the transcript as plain text.
    ///
    /// Tries the text endpoint first, then reassembles from structured
    /// transcript segments. Returns an empty string when neither works.
    pub async fn transcript_text(&self) -> String {
        let path = format!("video/{}/transcript?text=true", self.video_id);
        if let Ok(body) = self.client.get(&path).await {
            if let Some(text) = body.get("text").and_then(|t| t.as_str()) {
                return text.to_string();
            }
        }

        let path = format!("video/{}/transcript", self.video_id);
        match self.client.get(&path).await {
            Ok(body) => body
                .get("segments")
                .and_then(|s| s.as_array())
                .map(|segments| {
                    segments
                        .iter()
                        .filter_map(|s| s.get("text").and_then(|t| t.as_str()))
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .unwrap_or_default(),
            Err(e) => {
                warn!("Transcript fetch failed: {e}");
                String::new()
            }
        }
    }

    /// Request a stitched stream covering the given (start, end) ranges.
    ///
    /// Stream generation is best-effort; any failure yields `None`.
    #[instrument(skip(self, timeline), fields(video_id = %self.video_id, ranges = timeline.len()))]
    pub async fn generate_stream(&self, timeline: &[(u32, u32)]) -> Option<String> {
        let path = format!("video/{}/stream", self.video_id);
        let ranges: Vec<[u32; 2]> = timeline.iter().map(|&(s, e)| [s, e]).collect();

        match self.client.post(&path, json!({ "timeline": ranges })).await {
            Ok(body) => body
                .get("stream_url")
                .and_then(|u| u.as_str())
                .map(ToString::to_string),
            Err(e) => {
                debug!("Stream generation failed: {e}");
                None
            }
        }
    }
}

#[async_trait]
impl VideoSearch for VideoHandle {
    async fn search(&self, query: &str, mode: SearchMode, top_k: usize) -> Result<ShotPayload> {
        let path = format!("video/{}/search", self.video_id);
        let body = json!({
            "query": query,
            "search_type": mode.to_string(),
            "index_type": "spoken_word",
            "result_threshold": top_k,
        });

        let response = self.client.post(&path, body).await?;
        // Unexpected result shapes count as no shots, not as an error.
        Ok(serde_json::from_value(response).unwrap_or_else(|_| ShotPayload::empty()))
    }
}

/// A client bound to one collection.
pub struct CollectionHandle {
    client: VideoDbClient,
    collection_id: String,
}

impl CollectionHandle {
    /// The backend's collection id.
    pub fn id(&self) -> &str {
        &self.collection_id
    }

    /// Register a video into this collection by URL and return its id.
    #[instrument(skip(self))]
    pub async fn upload(&self, url: &str) -> Result<String> {
        let path = format!("collection/{}/upload", self.collection_id);
        let response = self.client.post(&path, json!({ "url": url })).await?;
        extract_id(&response)
    }
}

#[async_trait]
impl CollectionSearch for CollectionHandle {
    async fn search(&self, query: &str, top_k: usize) -> Result<ShotPayload> {
        let path = format!("collection/{}/search", self.collection_id);
        let body = json!({
            "query": query,
            "result_threshold": top_k,
        });

        let response = self.client.post(&path, body).await?;
        Ok(serde_json::from_value(response).unwrap_or_else(|_| ShotPayload::empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message_json() {
        let msg = extract_error_message(404, r#"{"message": "No results found"}"#);
        assert_eq!(msg, "HTTP 404: No results found");
        assert!(msg.contains("No results found"));
    }

    #[test]
    fn test_extract_error_message_plain() {
        let msg = extract_error_message(500, "internal server error\n");
        assert_eq!(msg, "HTTP 500: internal server error");
    }

    #[test]
    fn test_extract_id() {
        let ok = serde_json::json!({ "id": "m-abc123" });
        assert_eq!(extract_id(&ok).unwrap(), "m-abc123");

        let missing = serde_json::json!({ "name": "whatever" });
        assert!(extract_id(&missing).is_err());
    }
}
