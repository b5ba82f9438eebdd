use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - liveness check
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /api/health - checks the database connection
pub async fn api_health(State(state): State<AppState>) -> Response {
    if let Err(e) = sqlx::query("SELECT 1").fetch_one(&state.pool).await {
        tracing::error!("Health check failed: database unavailable - {e}");

        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"detail": "Service unhealthy"})),
        )
            .into_response();
    }

    let timestamp = match jexla_shared::format_rfc3339(jexla_shared::now_millis()) {
        Ok(timestamp) => timestamp,
        Err(e) => {
            tracing::error!("Health check failed: {e}");

            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"detail": "Service unhealthy"})),
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "database": "connected",
            "timestamp": timestamp,
        })),
    )
        .into_response()
}
