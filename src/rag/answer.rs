//! Answer generation from retrieved segments.

use super::context::{best_segment_summary, format_context_for_prompt};
use super::VideoRag;
use crate::config::Prompts;
use crate::llm::Completer;
use crate::search::Segment;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Segments feeding the answer context.
const CONTEXT_SEGMENTS: usize = 3;

const NO_MATCHES_ANSWER: &str =
    "No matching moments found. Try simpler keywords like overview, definition, or example.";

/// Question answering over one video's retrieved segments.
pub struct AnswerEngine {
    rag: VideoRag,
    completer: Option<Arc<dyn Completer>>,
    prompts: Prompts,
}

impl AnswerEngine {
    /// Create an engine without an LLM; answers fall back to the best segment.
    pub fn new(rag: VideoRag) -> Self {
        Self {
            rag,
            completer: None,
            prompts: Prompts::default(),
        }
    }

    /// Enable LLM answer generation.
    pub fn with_completer(mut self, completer: Arc<dyn Completer>) -> Self {
        self.completer = Some(completer);
        self
    }

    /// Set custom prompts (with user-defined variables).
    pub fn with_prompts(mut self, prompts: Prompts) -> Self {
        self.prompts = prompts;
        self
    }

    /// Ask a question and get an answer with segment sources.
    ///
    /// Retrieval failures and LLM failures both degrade instead of erroring:
    /// no segments yields a canned answer, and a failed completion falls
    /// back to summarizing the best-matching segment.
    #[instrument(skip(self), fields(question = %question))]
    pub async fn ask(&self, question: &str, max_results: usize) -> AnswerResponse {
        let segments = self.rag.search_video_content(question, max_results).await;

        if segments.is_empty() {
            return AnswerResponse {
                answer: NO_MATCHES_ANSWER.to_string(),
                sources: Vec::new(),
            };
        }

        let context =
            format_context_for_prompt(&segments[..segments.len().min(CONTEXT_SEGMENTS)]);

        if let Some(completer) = &self.completer {
            if !context.is_empty() {
                let mut vars = HashMap::new();
                vars.insert("question".to_string(), question.to_string());
                vars.insert("context".to_string(), context);

                let user = self
                    .prompts
                    .render_with_custom(&self.prompts.answer.user, &vars);

                match completer.complete(&self.prompts.answer.system, &user).await {
                    Ok(answer) => {
                        info!("Generated answer with {} sources", segments.len());
                        return AnswerResponse {
                            answer,
                            sources: segments,
                        };
                    }
                    Err(e) => warn!("LLM answer failed, falling back to best segment: {e}"),
                }
            }
        }

        AnswerResponse {
            answer: best_segment_summary(&segments[0]),
            sources: segments,
        }
    }
}

/// An answer with the segments it was drawn from.
#[derive(Debug, Clone)]
pub struct AnswerResponse {
    /// The generated (or fallback) answer.
    pub answer: String,
    /// Segments used as sources, in retrieval order.
    pub sources: Vec<Segment>,
}

impl AnswerResponse {
    /// Whether retrieval found anything at all.
    pub fn has_sources(&self) -> bool {
        !self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GlimtError, Result};
    use crate::search::{RawShot, SearchMode, ShotPayload, VideoSearch};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticVideo {
        shots: Vec<RawShot>,
    }

    #[async_trait]
    impl VideoSearch for StaticVideo {
        async fn search(&self, _: &str, _: SearchMode, _: usize) -> Result<ShotPayload> {
            Ok(ShotPayload::Bare(self.shots.clone()))
        }
    }

    struct ScriptedCompleter {
        reply: Option<&'static str>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Completer for ScriptedCompleter {
        async fn complete(&self, _: &str, _: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.reply {
                Some(reply) => Ok(reply.to_string()),
                None => Err(GlimtError::OpenAI("rate limited".to_string())),
            }
        }
    }

    fn shots(n: usize) -> Vec<RawShot> {
        (0..n)
            .map(|i| {
                serde_json::from_value(serde_json::json!({
                    "start": i as f64 * 30.0,
                    "text": format!("point number {i}"),
                    "search_score": 0.9,
                }))
                .unwrap()
            })
            .collect()
    }

    #[tokio::test]
    async fn test_no_segments_skips_llm() {
        let rag = VideoRag::new(Arc::new(StaticVideo { shots: vec![] }));
        let completer = Arc::new(ScriptedCompleter {
            reply: Some("should not appear"),
            calls: AtomicUsize::new(0),
        });

        let engine = AnswerEngine::new(rag).with_completer(completer.clone());
        let response = engine.ask("anything", 5).await;

        assert!(!response.has_sources());
        assert_eq!(response.answer, NO_MATCHES_ANSWER);
        assert_eq!(completer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_llm_answer_used_when_available() {
        let rag = VideoRag::new(Arc::new(StaticVideo { shots: shots(4) }));
        let completer = Arc::new(ScriptedCompleter {
            reply: Some("The video covers testing. [00:00]"),
            calls: AtomicUsize::new(0),
        });

        let engine = AnswerEngine::new(rag).with_completer(completer.clone());
        let response = engine.ask("anything", 5).await;

        assert_eq!(response.answer, "The video covers testing. [00:00]");
        assert_eq!(response.sources.len(), 4);
        assert_eq!(completer.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_llm_failure_falls_back_to_best_segment() {
        let rag = VideoRag::new(Arc::new(StaticVideo { shots: shots(2) }));
        let completer = Arc::new(ScriptedCompleter {
            reply: None,
            calls: AtomicUsize::new(0),
        });

        let engine = AnswerEngine::new(rag).with_completer(completer);
        let response = engine.ask("anything", 5).await;

        assert!(response.answer.starts_with("Found at 00:00"));
        assert!(response.answer.contains("point number 0"));
        assert_eq!(response.sources.len(), 2);
    }

    #[tokio::test]
    async fn test_no_completer_means_best_segment_answer() {
        let rag = VideoRag::new(Arc::new(StaticVideo { shots: shots(1) }));
        let engine = AnswerEngine::new(rag);

        let response = engine.ask("anything", 5).await;
        assert!(response.answer.starts_with("Found at 00:00"));
    }
}
