//! Quiz generation from retrieved segments.

use super::context::format_context_for_prompt;
use super::VideoRag;
use crate::config::Prompts;
use crate::error::{GlimtError, Result};
use crate::llm::Completer;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

/// Segments retrieved per quiz topic.
const QUIZ_SEGMENTS: usize = 8;

/// Builds multiple-choice quizzes from a video's segments.
pub struct QuizBuilder {
    rag: VideoRag,
    completer: Option<Arc<dyn Completer>>,
    prompts: Prompts,
}

impl QuizBuilder {
    pub fn new(rag: VideoRag) -> Self {
        Self {
            rag,
            completer: None,
            prompts: Prompts::default(),
        }
    }

    /// Enable LLM quiz generation.
    pub fn with_completer(mut self, completer: Arc<dyn Completer>) -> Self {
        self.completer = Some(completer);
        self
    }

    /// Set custom prompts (with user-defined variables).
    pub fn with_prompts(mut self, prompts: Prompts) -> Self {
        self.prompts = prompts;
        self
    }

    /// Build a markdown quiz of `num_questions` questions about a topic.
    ///
    /// Unlike answering, quiz generation has no degraded mode: without an
    /// LLM or without transcript context there is nothing sensible to emit,
    /// so both cases are errors for the caller to report.
    #[instrument(skip(self), fields(topic = %topic))]
    pub async fn build(&self, topic: &str, num_questions: usize) -> Result<String> {
        let completer = self.completer.as_ref().ok_or_else(|| {
            GlimtError::Rag("Quiz generation requires an LLM provider (llm.provider)".to_string())
        })?;

        let segments = self.rag.search_video_content(topic, QUIZ_SEGMENTS).await;
        let context = format_context_for_prompt(&segments);

        if context.is_empty() {
            return Err(GlimtError::Rag(format!(
                "No transcript context found for topic '{topic}'"
            )));
        }

        let mut vars = HashMap::new();
        vars.insert("count".to_string(), num_questions.to_string());
        vars.insert("context".to_string(), context);

        let user = self.prompts.render_with_custom(&self.prompts.quiz.user, &vars);
        completer.complete(&self.prompts.quiz.system, &user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{RawShot, SearchMode, ShotPayload, VideoSearch};
    use async_trait::async_trait;

    struct StaticVideo {
        shots: Vec<RawShot>,
    }

    #[async_trait]
    impl VideoSearch for StaticVideo {
        async fn search(&self, _: &str, _: SearchMode, _: usize) -> Result<ShotPayload> {
            Ok(ShotPayload::Bare(self.shots.clone()))
        }
    }

    struct EchoCompleter;

    #[async_trait]
    impl Completer for EchoCompleter {
        async fn complete(&self, _: &str, user: &str) -> Result<String> {
            Ok(user.to_string())
        }
    }

    fn text_shot(start: f64, text: &str) -> RawShot {
        serde_json::from_value(serde_json::json!({ "start": start, "text": text })).unwrap()
    }

    #[tokio::test]
    async fn test_quiz_requires_completer() {
        let rag = VideoRag::new(Arc::new(StaticVideo {
            shots: vec![text_shot(0.0, "content")],
        }));
        let builder = QuizBuilder::new(rag);

        assert!(builder.build("main concepts", 5).await.is_err());
    }

    #[tokio::test]
    async fn test_quiz_requires_context() {
        // Shots with empty text carry no context.
        let rag = VideoRag::new(Arc::new(StaticVideo {
            shots: vec![text_shot(0.0, "")],
        }));
        let builder = QuizBuilder::new(rag).with_completer(Arc::new(EchoCompleter));

        assert!(builder.build("main concepts", 5).await.is_err());
    }

    #[tokio::test]
    async fn test_quiz_prompt_carries_count_and_context() {
        let rag = VideoRag::new(Arc::new(StaticVideo {
            shots: vec![text_shot(75.0, "recursion explained")],
        }));
        let builder = QuizBuilder::new(rag).with_completer(Arc::new(EchoCompleter));

        let prompt = builder.build("recursion", 7).await.unwrap();
        assert!(prompt.contains("Create 7 multiple choice questions"));
        assert!(prompt.contains("01:15: recursion explained"));
    }
}
