use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::ContactSubmission;

pub const CONTACT_PATH: &str = "api/contact";

/// Every way a submission attempt can fail. Visitors only ever see one
/// retry message; the variant is kept for the logs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("contact endpoint unreachable: {0}")]
    Transport(String),

    #[error("contact endpoint responded with status {0}")]
    Status(u16),

    #[error("contact endpoint did not respond within {0:?}")]
    Timeout(Duration),

    #[error("invalid contact endpoint: {0}")]
    Endpoint(String),
}

/// The collaborator that receives contact submissions.
#[async_trait]
pub trait ContactClient: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError>;
}

/// Resolves `{base_url}/api/contact`, keeping any path prefix of the base.
pub fn contact_endpoint(base_url: &str) -> Result<Url, SubmitError> {
    let base = Url::parse(base_url.trim()).map_err(|e| SubmitError::Endpoint(e.to_string()))?;

    if !matches!(base.scheme(), "http" | "https") {
        return Err(SubmitError::Endpoint(format!(
            "unsupported scheme `{}`",
            base.scheme()
        )));
    }

    let endpoint = format!("{}/{CONTACT_PATH}", base.as_str().trim_end_matches('/'));

    Url::parse(&endpoint).map_err(|e| SubmitError::Endpoint(e.to_string()))
}

/// POSTs submissions as JSON to the configured contact endpoint.
#[derive(Clone, Debug)]
pub struct HttpContactClient {
    http: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl HttpContactClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SubmitError> {
        let endpoint = contact_endpoint(base_url)?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            endpoint,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ContactClient for HttpContactClient {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(submission)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SubmitError::Timeout(self.timeout)
                } else {
                    SubmitError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status.as_u16()));
        }

        Ok(())
    }
}
