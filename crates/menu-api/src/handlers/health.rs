use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::{response::ApiResponse, state::AppState};

#[derive(Serialize)]
pub struct HealthStatus {
    status: String,
    version: String,
}

pub async fn health_check() -> (StatusCode, Json<ApiResponse<HealthStatus>>) {
    (
        StatusCode::OK,
        Json(ApiResponse::success(HealthStatus {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })),
    )
}

/// Ready when the backend answers the menu request.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<HealthStatus>>) {
    match state.source.load_menu(None).await {
        Ok(_) => health_check().await,
        Err(e) => {
            tracing::warn!(error = %e, "Backend not ready");
            (StatusCode::SERVICE_UNAVAILABLE, Json(ApiResponse::failure()))
        }
    }
}
