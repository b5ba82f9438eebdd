//! Shared setup for the integration tests

#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
    routing::post,
};
use http_body_util::BodyExt;
use jexla::{
    AppState, Config,
    config::{ApiConfig, DatabaseConfig, ObservabilityConfig, ServerConfig, SiteConfig},
};
use jexla_contact::{ContactClient, ContactSubmission, HttpContactClient, Store};
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use tokio::net::TcpListener;
use tower::ServiceExt;

pub fn jane() -> ContactSubmission {
    ContactSubmission::new("Jane Doe", "jane@example.com", "555-0100", "Hello")
}

pub fn test_config(base_url: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 8000,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_owned(),
            max_connections: 1,
        },
        api: ApiConfig {
            base_url: base_url.to_owned(),
            timeout_secs: 2,
            cors_origins: vec!["*".to_owned()],
        },
        site: SiteConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

/// Single connection so every query sees the same in-memory database.
pub async fn setup_pool() -> anyhow::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    jexla::db::migrate(&pool).await?;

    Ok(pool)
}

/// The full app, submitting contact forms to `base_url`.
pub async fn setup_app(base_url: &str) -> anyhow::Result<(Router, SqlitePool)> {
    let config = test_config(base_url);
    let client = HttpContactClient::new(&config.api.base_url, config.api.timeout())?;

    setup_app_with_client(config, Arc::new(client)).await
}

pub async fn setup_app_with_client(
    config: Config,
    contact_client: Arc<dyn ContactClient>,
) -> anyhow::Result<(Router, SqlitePool)> {
    let pool = setup_pool().await?;
    let state = AppState {
        config,
        store: Store(pool.clone()),
        contact_client,
        pool: pool.clone(),
    };

    Ok((jexla::create_app(state), pool))
}

/// Serves the real app on a random port. Returns its base URL.
pub async fn spawn_backend() -> anyhow::Result<(String, SqlitePool)> {
    let (app, pool) = setup_app("http://127.0.0.1:9").await?;
    let addr = serve(app).await?;

    Ok((format!("http://{addr}"), pool))
}

/// A contact endpoint that always answers `status`. Counts the requests it
/// receives.
pub async fn spawn_stub(status: StatusCode) -> anyhow::Result<(String, Arc<AtomicUsize>)> {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();

    let app = Router::new().route(
        "/api/contact",
        post(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                status
            }
        }),
    );

    let addr = serve(app).await?;

    Ok((format!("http://{addr}"), hits))
}

/// A base URL nothing listens on.
pub async fn unreachable_base_url() -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    Ok(format!("http://{addr}"))
}

async fn serve(app: Router) -> anyhow::Result<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    // Give the listener task a chance to start accepting.
    tokio::time::sleep(Duration::from_millis(10)).await;

    Ok(addr)
}

pub async fn get(app: &Router, uri: &str) -> anyhow::Result<Response> {
    Ok(app
        .clone()
        .oneshot(Request::get(uri).body(Body::empty())?)
        .await?)
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    body: &serde_json::Value,
) -> anyhow::Result<Response> {
    Ok(app
        .clone()
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(body)?))?,
        )
        .await?)
}

pub async fn post_form(
    app: &Router,
    uri: &str,
    fields: &[(&str, &str)],
    fragment: bool,
) -> anyhow::Result<Response> {
    let mut request = Request::post(uri).header(
        header::CONTENT_TYPE,
        "application/x-www-form-urlencoded",
    );

    if fragment {
        request = request.header("x-requested-with", "fetch");
    }

    let body = serde_urlencoded::to_string(fields)?;

    Ok(app.clone().oneshot(request.body(Body::from(body))?).await?)
}

pub fn jane_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Jane Doe"),
        ("email", "jane@example.com"),
        ("phone", "555-0100"),
        ("message", "Hello"),
    ]
}

pub async fn body_string(response: Response) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(String::from_utf8(bytes.to_vec())?)
}

pub async fn body_json(response: Response) -> anyhow::Result<serde_json::Value> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(serde_json::from_slice(&bytes)?)
}
