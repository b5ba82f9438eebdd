use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::Response,
    routing::{get, post},
};
use jexla_contact::{ContactClient, Store};
use sqlx::SqlitePool;

use crate::template::{NotFoundTemplate, Template};

mod api;
mod assets;
mod contact;
mod health;
mod index;

pub use assets::AssetsService;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub store: Store,
    pub contact_client: Arc<dyn ContactClient>,
    pub pool: SqlitePool,
}

pub async fn fallback(template: Template) -> Response {
    template.render_status(
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            site: template.site(),
        },
    )
}

pub fn router(app_state: AppState) -> Router {
    let cors = api::cors_layer(&app_state.config.api.cors_origins);

    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/contact", post(contact::action))
        .merge(api::router().layer(cors))
        .nest_service("/static", AssetsService)
        .fallback(fallback)
        .with_state(app_state)
}
