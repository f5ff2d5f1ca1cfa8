use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;
use tracing::{debug, warn};

/// Provenance tag attached to every submission from the landing page.
pub const CONTACT_SOURCE: &str = "landing/contact";

#[derive(Clone, Debug)]
pub struct ContactClientConfig {
    /// Backend base URL without trailing slash. Empty means relative to `origin`.
    pub base_url: String,
    /// Origin used to resolve a relative `base_url`, e.g. "https://example.com"
    pub origin: Option<String>,
    pub timeout: Duration,
}

impl ContactClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            origin: None,
            timeout: Duration::from_secs(10),
        }
    }

    /// Load from `BACKEND_URL`, `PORTFOLIO_PUBLIC_ORIGIN` and `CONTACT_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let base_url = std::env::var("BACKEND_URL").unwrap_or_default();

        let origin = std::env::var("PORTFOLIO_PUBLIC_ORIGIN")
            .ok()
            .map(|s| s.trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty());

        let timeout = std::env::var("CONTACT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(10));

        Self {
            origin,
            timeout,
            ..Self::new(base_url)
        }
    }

    /// Full URL of the contact endpoint.
    pub fn endpoint(&self) -> Result<String, ContactError> {
        let relative = !self.base_url.contains("://");
        match (&self.origin, relative) {
            (_, false) => Ok(format!("{}/contact", self.base_url)),
            (Some(origin), true) => {
                let base = self.base_url.trim_start_matches('/');
                if base.is_empty() {
                    Ok(format!("{origin}/contact"))
                } else {
                    Ok(format!("{origin}/{base}/contact"))
                }
            }
            (None, true) => Err(ContactError::InvalidEndpoint(format!(
                "{}/contact is relative and no public origin is configured",
                self.base_url
            ))),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("contact backend returned status {status}")]
    Rejected { status: StatusCode },

    #[error("invalid contact endpoint: {0}")]
    InvalidEndpoint(String),
}

/// JSON body posted to the contact backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub source: &'static str,
}

/// Delivers contact messages to the backend.
pub trait ContactSender {
    fn send(
        &self,
        message: &ContactMessage,
    ) -> impl Future<Output = Result<(), ContactError>> + Send;
}

#[derive(Clone)]
pub struct ContactClient {
    config: ContactClientConfig,
    http: reqwest::Client,
}

impl ContactClient {
    pub fn new(config: ContactClientConfig) -> Result<Self, ContactError> {
        let http = reqwest::Client::builder()
            .user_agent("portfolio-site")
            .build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ContactClientConfig {
        &self.config
    }
}

impl ContactSender for ContactClient {
    /// POST the message once. Any 2xx is success; the response body is never read.
    async fn send(&self, message: &ContactMessage) -> Result<(), ContactError> {
        let url = self.config.endpoint()?;
        let resp = self
            .http
            .post(&url)
            .timeout(self.config.timeout)
            .json(message)
            .send()
            .await
            .inspect_err(|e| warn!(error = %e, url, "contact request failed"))?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%status, url, "contact backend rejected submission");
            return Err(ContactError::Rejected { status });
        }
        debug!(%status, "contact submission accepted");
        Ok(())
    }
}
