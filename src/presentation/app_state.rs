// Application state for HTTP handlers
use crate::application::diagnostics_service::DiagnosticsService;
use crate::application::generation_service::GenerationService;
use crate::application::session::SessionState;
use tokio::sync::RwLock;

pub struct AppState {
    pub generation_service: GenerationService,
    pub diagnostics_service: DiagnosticsService,
    /// One interactive session per process. The lock exists because axum
    /// handlers must be Sync; it is uncontended in practice.
    pub session: RwLock<SessionState>,
}
