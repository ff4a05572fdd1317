//! RAG (Retrieval-Augmented Generation) over indexed video content.
//!
//! The engine retrieves time-coded segments for a question; the answer and
//! quiz layers turn those segments into LLM-generated output with citations.

mod answer;
pub mod context;
mod engine;
mod quiz;

pub use answer::{AnswerEngine, AnswerResponse};
pub use engine::VideoRag;
pub use quiz::QuizBuilder;
