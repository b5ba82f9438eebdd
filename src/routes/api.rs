use axum::{
    Json, Router,
    extract::{FromRequest, Query, State},
    http::{HeaderValue, Method, header},
    routing::get,
};
use jexla_contact::{ContactMessage, ContactSubmission, MAX_LIST};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::{
    error::ApiError,
    query::{StatusCheck, StatusCheckInput},
    routes::{AppState, health},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
        .route("/api/contact", get(list_contact).post(create_contact))
        .route("/api/status", get(list_status).post(create_status))
        .route("/api/health", get(health::api_health))
}

/// `*` opens the API to every origin. Anything else is an explicit list.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let origins = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin: {e}");
                None
            }
        })
        .collect::<Vec<_>>();

    layer.allow_origin(AllowOrigin::list(origins))
}

/// `Json` whose rejection renders as an [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
struct ApiJson<T>(T);

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<u64>,
}

async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": format!("{} API - {}", state.config.site.name, state.config.site.tagline)
    }))
}

async fn create_contact(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ContactSubmission>,
) -> Result<Json<ContactMessage>, ApiError> {
    let message = state
        .store
        .create(input)
        .await
        .map_err(|e| ApiError::from(e).with_detail("Failed to process contact message"))?;

    tracing::info!(id = %message.id, "contact message stored");

    Ok(Json(message))
}

async fn list_contact(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ContactMessage>>, ApiError> {
    let messages = state
        .store
        .list(query.limit.unwrap_or(MAX_LIST))
        .await
        .map_err(|e| ApiError::from(e).with_detail("Failed to retrieve contact messages"))?;

    Ok(Json(messages))
}

async fn create_status(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<StatusCheckInput>,
) -> Result<Json<StatusCheck>, ApiError> {
    let check = crate::query::create_status_check(&state.pool, input).await?;

    Ok(Json(check))
}

async fn list_status(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<StatusCheck>>, ApiError> {
    let checks = crate::query::list_status_checks(
        &state.pool,
        query.limit.unwrap_or(crate::query::MAX_STATUS_CHECKS),
    )
    .await?;

    Ok(Json(checks))
}

