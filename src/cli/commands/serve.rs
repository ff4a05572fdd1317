//! HTTP API server for integration with other systems.
//!
//! Provides REST endpoints for segment search and question answering.

use crate::cli::Output;
use crate::config::{Prompts, Settings};
use crate::llm;
use crate::rag::{AnswerEngine, VideoRag};
use crate::search::{CollectionHandle, Segment, VideoDbClient};
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared application state.
struct AppState {
    client: VideoDbClient,
    collection: Arc<CollectionHandle>,
    settings: Settings,
    prompts: Prompts,
}

/// Run the HTTP API server.
pub async fn run_serve(host: &str, port: u16, settings: Settings) -> anyhow::Result<()> {
    let api_key = settings.videodb.resolve_api_key()?;
    let client = VideoDbClient::with_base_url(&api_key, &settings.videodb.base_url)?;
    let collection = Arc::new(client.ensure_collection(&settings.videodb.collection).await?);

    let prompts = Prompts::load(
        settings.prompts.custom_dir.as_deref(),
        Some(&settings.prompts.variables),
    )?;

    let state = Arc::new(AppState {
        client,
        collection,
        settings,
        prompts,
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/search", post(search))
        .route("/ask", post(ask))
        .layer(cors)
        .with_state(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("Glimt API Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Health", "GET  /health");
    Output::kv("Search", "POST /search");
    Output::kv("Ask (RAG)", "POST /ask");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app).await?;

    Ok(())
}

// === Request/Response Types ===

#[derive(Deserialize)]
struct SearchRequest {
    /// Video id returned by upload.
    video_id: String,
    query: String,
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    5
}

#[derive(Serialize)]
struct SearchResponse {
    results: Vec<SegmentInfo>,
}

#[derive(Serialize)]
struct SegmentInfo {
    start_time: u32,
    end_time: u32,
    timestamp: String,
    text: String,
    score: f64,
}

impl From<&Segment> for SegmentInfo {
    fn from(segment: &Segment) -> Self {
        Self {
            start_time: segment.start_time,
            end_time: segment.end_time,
            timestamp: segment.timestamp(),
            text: segment.text.clone(),
            score: segment.score,
        }
    }
}

#[derive(Deserialize)]
struct AskRequest {
    /// Video id returned by upload.
    video_id: String,
    question: String,
    #[serde(default)]
    max_results: Option<usize>,
}

#[derive(Serialize)]
struct AskResponse {
    answer: String,
    sources: Vec<SegmentInfo>,
}

// === Handlers ===

async fn health() -> &'static str {
    "ok"
}

fn rag_for(state: &AppState, video_id: &str) -> VideoRag {
    let video = Arc::new(state.client.video(video_id));
    VideoRag::new(video).with_collection(state.collection.clone())
}

async fn search(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> impl IntoResponse {
    if request.video_id.is_empty() {
        return (StatusCode::BAD_REQUEST, "video_id is required").into_response();
    }

    let rag = rag_for(&state, &request.video_id);
    let segments = rag.search_video_content(&request.query, request.limit).await;

    Json(SearchResponse {
        results: segments.iter().map(SegmentInfo::from).collect(),
    })
    .into_response()
}

async fn ask(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AskRequest>,
) -> impl IntoResponse {
    if request.video_id.is_empty() {
        return (StatusCode::BAD_REQUEST, "video_id is required").into_response();
    }

    let rag = rag_for(&state, &request.video_id);
    let mut engine = AnswerEngine::new(rag).with_prompts(state.prompts.clone());
    if let Some(completer) = llm::create_completer(&state.settings.llm) {
        engine = engine.with_completer(completer);
    }

    let max_results = request
        .max_results
        .unwrap_or(state.settings.search.max_results);
    let response = engine.ask(&request.question, max_results).await;

    Json(AskResponse {
        answer: response.answer,
        sources: response.sources.iter().map(SegmentInfo::from).collect(),
    })
    .into_response()
}
