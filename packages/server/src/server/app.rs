//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use competitor_analysis::{
    AnalysisService, ChatModel, CompletionModel, Embedder, HttpPageFetcher, IndexRegistry,
    OpenAiModels, PageFetcher, ResultCache,
};
use openai_client::OpenAIClient;

use crate::config::Config;
use crate::server::routes::{
    analyze_handler, chat_handler, generate_note_handler, health_handler, root_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub analysis: Arc<AnalysisService>,
    pub note_model: Arc<dyn CompletionModel>,
}

/// Build the Axum application with OpenAI-backed collaborators.
pub fn build_app(config: &Config) -> anyhow::Result<Router> {
    let models = OpenAiModels::new(OpenAIClient::new(config.openai_api_key.clone()))
        .with_chat_model(&config.chat_model)
        .with_completion_model(&config.completion_model)
        .with_embedding_model(&config.embedding_model);

    let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpPageFetcher::new()?);
    let chat: Arc<dyn ChatModel> = Arc::new(models.clone());
    let embedder: Arc<dyn Embedder> = Arc::new(models.clone());
    let note_model: Arc<dyn CompletionModel> = Arc::new(models);

    let analysis = Arc::new(AnalysisService::new(
        fetcher,
        chat,
        embedder,
        ResultCache::new(&config.cache_dir),
        Arc::new(IndexRegistry::new()),
    ));

    Ok(build_router(AppState {
        analysis,
        note_model,
    }))
}

/// Wire routes and middleware around the given state.
///
/// Split from [`build_app`] so tests can inject mock-backed state.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/linkedin/generate_note", post(generate_note_handler))
        .route("/value/analyze", get(analyze_handler))
        .route("/value/chat", post(chat_handler))
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
