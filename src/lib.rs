//! Glimt - Conversational Video Search
//!
//! A CLI tool for asking questions against already-indexed video content and
//! jumping straight to the matching moments.
//!
//! The name "Glimt" comes from the Norwegian/Scandinavian word for "glimpse."
//!
//! # Overview
//!
//! Glimt allows you to:
//! - Register videos with a VideoDB collection and index their spoken words
//! - Ask questions and get AI-powered answers cited with timestamps
//! - Search spoken content with semantic and keyword fallback tiers
//! - Build quizzes and highlight reels from matching segments
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `query` - Question-to-candidate query expansion
//! - `search` - Search capability traits, segment normalization, VideoDB adapter
//! - `rag` - Tiered retrieval engine, answer and quiz generation
//! - `reel` - Highlight reel timeline building
//! - `llm` - LLM completion abstraction
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use glimt::config::Settings;
//! use glimt::search::VideoDbClient;
//! use glimt::rag::VideoRag;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let client = VideoDbClient::new(&settings.videodb.resolve_api_key()?)?;
//!     let video = client.video("m-1234");
//!
//!     let rag = VideoRag::new(Arc::new(video));
//!     let segments = rag.search_video_content("What is the main topic?", 5).await;
//!     for s in &segments {
//!         println!("{} ({}%) {}", s.timestamp(), s.score, s.text);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod query;
pub mod rag;
pub mod reel;
pub mod search;

pub use error::{GlimtError, Result};
