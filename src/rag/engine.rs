//! Tiered retrieval engine.

use crate::error::GlimtError;
use crate::query;
use crate::search::{
    dedupe_by_start, shots_to_segments, CollectionSearch, SearchMode, Segment, VideoSearch,
};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Raw matches requested from the backend per search call.
const TIER_TOP_K: usize = 10;

/// Retrieval engine over one video, with an optional collection fallback.
///
/// Holds no state between questions; every call is a pure function of the
/// question, the handles, and `max_results`.
pub struct VideoRag {
    video: Arc<dyn VideoSearch>,
    collection: Option<Arc<dyn CollectionSearch>>,
}

impl VideoRag {
    /// Create an engine over a single video.
    pub fn new(video: Arc<dyn VideoSearch>) -> Self {
        Self {
            video,
            collection: None,
        }
    }

    /// Enable the collection-wide fallback tier.
    pub fn with_collection(mut self, collection: Arc<dyn CollectionSearch>) -> Self {
        self.collection = Some(collection);
        self
    }

    /// Retrieve up to `max_results` deduplicated segments for a question.
    ///
    /// Three tiers run in fixed order, each only when every earlier tier
    /// came up empty: semantic spoken-word search over the expanded
    /// candidates, keyword spoken-word search over the same candidates,
    /// then a single collection-wide search with the original question.
    ///
    /// Individual search failures never propagate: a "No results found"
    /// error counts as an empty result, anything else is logged and the
    /// remaining candidates and tiers continue. The returned list may be
    /// empty, but this method never errors.
    #[instrument(skip(self), fields(question = %question))]
    pub async fn search_video_content(&self, question: &str, max_results: usize) -> Vec<Segment> {
        let candidates = query::expand(question);
        debug!("Expanded into {} candidate queries", candidates.len());

        let mut all_segments = Vec::new();

        for candidate in &candidates {
            match self
                .video
                .search(candidate, SearchMode::Semantic, TIER_TOP_K)
                .await
            {
                Ok(payload) => all_segments.extend(shots_to_segments(payload, max_results)),
                Err(e) => log_search_failure("Semantic", &e),
            }
        }

        if all_segments.is_empty() {
            for candidate in &candidates {
                match self
                    .video
                    .search(candidate, SearchMode::Keyword, TIER_TOP_K)
                    .await
                {
                    Ok(payload) => all_segments.extend(shots_to_segments(payload, max_results)),
                    Err(e) => log_search_failure("Keyword", &e),
                }
            }
        }

        if all_segments.is_empty() {
            if let Some(collection) = &self.collection {
                match collection.search(question, TIER_TOP_K).await {
                    Ok(payload) => all_segments.extend(shots_to_segments(payload, max_results)),
                    Err(e) => log_search_failure("Collection", &e),
                }
            }
        }

        let mut unique = dedupe_by_start(all_segments);
        unique.truncate(max_results);
        unique
    }
}

/// A backend "No results found" is an empty result, not a failure.
fn log_search_failure(tier: &str, error: &GlimtError) {
    if !error.to_string().contains("No results found") {
        warn!("{tier} search warning: {error}");
    }
}
