//! Axum route handlers for the Settings API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::settings::{Settings, API_SERVICES};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SettingsUpdateResponse {
    pub message: String,
    pub settings: Settings,
}

#[derive(Debug, Deserialize)]
pub struct TestConnectionRequest {
    pub service: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Success,
    Failure,
}

#[derive(Debug, Serialize)]
pub struct TestConnectionResponse {
    pub service: String,
    pub status: ConnectionStatus,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SystemInfo {
    pub version: String,
    pub status: String,
    pub environment: String,
    pub debug: bool,
    pub uptime_seconds: u64,
    pub total_jobs: usize,
    pub total_applications: usize,
}

/// GET /api/settings
pub async fn handle_get_settings(State(state): State<AppState>) -> Json<Settings> {
    Json(state.store.settings().await)
}

/// POST /api/settings
///
/// Fields present in the body replace the stored ones; everything else is kept.
pub async fn handle_update_settings(
    State(state): State<AppState>,
    AppJson(patch): AppJson<Value>,
) -> Result<Json<SettingsUpdateResponse>, AppError> {
    let settings = state.store.update_settings(patch).await?;
    info!("Settings updated");
    Ok(Json(SettingsUpdateResponse {
        message: "Settings updated successfully".to_string(),
        settings,
    }))
}

/// POST /api/settings/test_connection
///
/// No network traffic: succeeds for any configured platform or known API integration.
pub async fn handle_test_connection(
    State(state): State<AppState>,
    AppJson(request): AppJson<TestConnectionRequest>,
) -> Result<Json<TestConnectionResponse>, AppError> {
    let service = request.service.trim().to_string();
    if service.is_empty() {
        return Err(AppError::Validation("service cannot be empty".to_string()));
    }

    let settings = state.store.settings().await;
    let known = settings.platform(&service).is_some()
        || API_SERVICES
            .iter()
            .any(|s| s.eq_ignore_ascii_case(&service));

    let (status, message) = if known {
        (
            ConnectionStatus::Success,
            format!("Conexão com {service} testada com sucesso"),
        )
    } else {
        (
            ConnectionStatus::Failure,
            format!("Serviço {service} não configurado"),
        )
    };

    info!(service = %service, ?status, "Connection test");
    Ok(Json(TestConnectionResponse {
        service,
        status,
        message,
    }))
}

/// GET /api/settings/system_info
pub async fn handle_system_info(State(state): State<AppState>) -> Json<SystemInfo> {
    Json(SystemInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
        environment: state.config.environment.clone(),
        debug: state.config.debug(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        total_jobs: state.store.job_count().await,
        total_applications: state.store.application_count().await,
    })
}
