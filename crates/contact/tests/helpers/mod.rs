#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use axum::{Json, Router, http::StatusCode, routing::post};
use jexla_contact::{ContactClient, ContactSubmission, Store, SubmitError};
use sqlx::sqlite::SqlitePoolOptions;
use tokio::sync::Notify;

pub fn jane() -> ContactSubmission {
    ContactSubmission::new("Jane Doe", "jane@example.com", "555-0100", "Hello")
}

pub async fn setup_store() -> anyhow::Result<Store> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    sqlx::migrate!("../../migrations").run(&pool).await?;

    Ok(Store(pool))
}

/// Records every submission and answers with a fixed result.
pub struct RecordingClient {
    pub calls: Mutex<Vec<ContactSubmission>>,
    result: Result<(), SubmitError>,
}

impl RecordingClient {
    pub fn ok() -> Self {
        Self {
            calls: Mutex::new(vec![]),
            result: Ok(()),
        }
    }

    pub fn failing(err: SubmitError) -> Self {
        Self {
            calls: Mutex::new(vec![]),
            result: Err(err),
        }
    }

    pub fn calls(&self) -> Vec<ContactSubmission> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactClient for RecordingClient {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        self.calls.lock().unwrap().push(submission.clone());
        self.result.clone()
    }
}

/// Holds every request open until `release` is notified.
pub struct GatedClient {
    pub calls: Mutex<Vec<ContactSubmission>>,
    pub entered: Notify,
    pub release: Notify,
}

impl GatedClient {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(vec![]),
            entered: Notify::new(),
            release: Notify::new(),
        }
    }
}

#[async_trait]
impl ContactClient for GatedClient {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        self.calls.lock().unwrap().push(submission.clone());
        self.entered.notify_one();
        self.release.notified().await;
        Ok(())
    }
}

/// Never answers.
pub struct HungClient;

#[async_trait]
impl ContactClient for HungClient {
    async fn submit(&self, _submission: &ContactSubmission) -> Result<(), SubmitError> {
        std::future::pending().await
    }
}

/// Bodies received by a stub contact endpoint.
pub type Received = Arc<Mutex<Vec<serde_json::Value>>>;

/// Serves `POST /api/contact` on a random local port, answering `status`
/// after `delay`. Returns the base URL to configure clients with.
pub async fn spawn_endpoint(status: StatusCode, delay: Duration) -> anyhow::Result<(String, Received)> {
    let received: Received = Arc::default();
    let sink = received.clone();

    let app = Router::new().route(
        "/api/contact",
        post(move |Json(body): Json<serde_json::Value>| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push(body);
                tokio::time::sleep(delay).await;
                status
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok((format!("http://{addr}"), received))
}
