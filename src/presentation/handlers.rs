// HTTP request handlers
use crate::application::diagnostics_service::DiagnosticsReport;
use crate::domain::diagnostics::{DiagnosticStatus, SensorReading};
use crate::domain::generation::{GenerationRequest, GenerationResult};
use crate::domain::telemetry::TelemetrySeries;
use crate::domain::vehicle::{SensorProfile, TargetLanguage, VehicleDomain};
use crate::infrastructure::download::source_download_response;
use crate::presentation::app_state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize)]
pub struct OptionView {
    pub value: serde_json::Value,
    pub label: &'static str,
}

/// Everything the rendering surface needs to draw the workspace.
#[derive(Serialize)]
pub struct WorkspaceView {
    pub available_models: Vec<String>,
    pub domains: Vec<OptionView>,
    pub languages: Vec<OptionView>,
    pub selected_domain: VehicleDomain,
    pub selected_language: TargetLanguage,
    pub requirement_text: String,
    pub sensor_profile: SensorProfile,
    pub sensor_values: SensorReading,
    pub last_result: Option<GenerationResult>,
    pub last_error: Option<String>,
    pub diagnostic_status: Option<DiagnosticStatus>,
    pub telemetry_series: Option<TelemetrySeries>,
}

#[derive(Deserialize)]
pub struct SelectionBody {
    pub domain: VehicleDomain,
    pub language: TargetLanguage,
}

#[derive(Serialize)]
pub struct SelectionView {
    pub selected_domain: VehicleDomain,
    pub selected_language: TargetLanguage,
    pub requirement_text: String,
    pub sensor_profile: SensorProfile,
    pub sensor_values: SensorReading,
}

#[derive(Deserialize)]
pub struct GenerateBody {
    pub requirement_text: String,
    pub model_id: Option<String>,
}

/// Outcome of a generation attempt. A backend failure is a normal view-model
/// update (the session keeps going), not a server error.
#[derive(Serialize)]
pub struct GenerateView {
    pub result: Option<GenerationResult>,
    pub error: Option<String>,
}

#[derive(Deserialize)]
pub struct DiagnosticsBody {
    pub value_1: f64,
    pub value_2: f64,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Full view-model for the rendering surface
pub async fn get_workspace(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let available_models = state.generation_service.available_models().await;
    let session = state.session.read().await;

    let view = WorkspaceView {
        available_models,
        domains: domain_options(),
        languages: language_options(),
        selected_domain: session.domain,
        selected_language: session.language,
        requirement_text: session.requirement_text.clone(),
        sensor_profile: session.domain.sensor_profile(),
        sensor_values: session.reading,
        last_result: session.last_result.clone(),
        last_error: session.last_error.clone(),
        diagnostic_status: session.diagnostics.as_ref().map(|d| d.status),
        telemetry_series: session.diagnostics.as_ref().map(|d| d.series.clone()),
    };

    Json(view)
}

/// Switch domain/language; re-seeds the requirement text and sensor defaults
pub async fn update_selection(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SelectionBody>,
) -> impl IntoResponse {
    let mut session = state.session.write().await;
    session.select(body.domain, body.language);

    Json(SelectionView {
        selected_domain: session.domain,
        selected_language: session.language,
        requirement_text: session.requirement_text.clone(),
        sensor_profile: session.domain.sensor_profile(),
        sensor_values: session.reading,
    })
}

/// Run the generation pipeline against the selected model
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GenerateBody>,
) -> impl IntoResponse {
    let request = {
        let mut session = state.session.write().await;
        session.requirement_text = body.requirement_text.clone();
        GenerationRequest::new(session.domain, session.language, body.requirement_text)
    };

    if let Err(e) = state.generation_service.validate(&request) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorBody {
                error: e.to_string(),
            }),
        )
            .into_response();
    }

    let model_id = body
        .model_id
        .unwrap_or_else(|| state.generation_service.default_model().to_string());

    // The backend call is awaited outside the session lock; the lock is
    // taken again only to record the outcome.
    match state.generation_service.submit(&model_id, &request).await {
        Ok(result) => {
            let mut session = state.session.write().await;
            session.record_success(result.clone());
            Json(GenerateView {
                result: Some(result),
                error: None,
            })
            .into_response()
        }
        Err(e) => {
            tracing::warn!("generation failed on model {}: {}", model_id, e);
            let message = e.to_string();
            let mut session = state.session.write().await;
            session.record_failure(message.clone());
            Json(GenerateView {
                result: None,
                error: Some(message),
            })
            .into_response()
        }
    }
}

/// Evaluate the current slider values
pub async fn run_diagnostics(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DiagnosticsBody>,
) -> Json<DiagnosticsReport> {
    let mut session = state.session.write().await;
    let report = state
        .diagnostics_service
        .evaluate(session.domain, body.value_1, body.value_2);
    session.record_diagnostics(report.clone());

    Json(report)
}

/// Download the most recently generated source
pub async fn download_source(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let session = state.session.read().await;

    match &session.last_result {
        Some(result) => match source_download_response(result) {
            Ok(response) => response.into_response(),
            Err(status) => status.into_response(),
        },
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorBody {
                error: "nothing has been generated yet".to_string(),
            }),
        )
            .into_response(),
    }
}

fn domain_options() -> Vec<OptionView> {
    VehicleDomain::ALL
        .iter()
        .map(|d| OptionView {
            value: serde_json::to_value(d).unwrap_or_default(),
            label: d.label(),
        })
        .collect()
}

fn language_options() -> Vec<OptionView> {
    TargetLanguage::ALL
        .iter()
        .map(|l| OptionView {
            value: serde_json::to_value(l).unwrap_or_default(),
            label: l.label(),
        })
        .collect()
}
