// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::application::diagnostics_service::DiagnosticsService;
use crate::application::generation_service::GenerationService;
use crate::application::session::SessionState;
use crate::infrastructure::config::load_backend_config;
use crate::infrastructure::gemini_backend::GeminiBackend;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    download_source, generate, get_workspace, health_check, run_diagnostics, update_selection,
};
use tokio::sync::RwLock;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration (API key arrives via SDV_GEMINI__API_KEY)
    let config = load_backend_config()?;

    // Create backend adapter (infrastructure layer)
    let backend = Arc::new(GeminiBackend::new(
        config.gemini.host,
        config.gemini.api_key,
    ));

    // Create services (application layer)
    let generation_service = GenerationService::new(backend, config.gemini.default_model);
    let diagnostics_service = DiagnosticsService::new();

    // Create application state with a fresh session
    let state = Arc::new(AppState {
        generation_service,
        diagnostics_service,
        session: RwLock::new(SessionState::new()),
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/workspace", get(get_workspace))
        .route("/workspace/selection", put(update_selection))
        .route("/workspace/generate", post(generate))
        .route("/workspace/diagnostics", post(run_diagnostics))
        .route("/workspace/download", get(download_source))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.listen.parse()?;
    println!("Starting sdv-workbench service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
