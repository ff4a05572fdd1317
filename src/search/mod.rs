//! Search capability abstraction for Glimt.
//!
//! Provides trait-based interfaces over the external video search backend,
//! plus normalization of its raw results into display-ready segments.

mod segment;
mod shots;
mod videodb;

pub use segment::{
    dedupe_by_start, format_timestamp, normalize_score, shots_to_segments, Segment, MAX_TEXT_CHARS,
};
pub use shots::{RawShot, ShotPayload};
pub use videodb::{CollectionHandle, VideoDbClient, VideoHandle};

use crate::error::Result;
use async_trait::async_trait;

/// Search strategy against the spoken-word index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Embedding-based similarity search.
    Semantic,
    /// Literal keyword match.
    Keyword,
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Semantic => write!(f, "semantic"),
            SearchMode::Keyword => write!(f, "keyword"),
        }
    }
}

/// Trait for searching a single video's spoken-word index.
#[async_trait]
pub trait VideoSearch: Send + Sync {
    /// Search the video's spoken-word index, returning up to `top_k` raw shots.
    async fn search(&self, query: &str, mode: SearchMode, top_k: usize) -> Result<ShotPayload>;
}

/// Trait for searching across a whole collection.
#[async_trait]
pub trait CollectionSearch: Send + Sync {
    /// Search the collection, returning up to `top_k` raw shots.
    async fn search(&self, query: &str, top_k: usize) -> Result<ShotPayload>;
}
