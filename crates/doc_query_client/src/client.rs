//! HTTP client: POST a query to `<base_url>/query` and decode `{"result": ...}`.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use tracing::debug;

use crate::config::Config;
use crate::messages::{QueryRequest, QueryResponse};

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors returned by [`Client::query_documentation`].
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("failed to encode query: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with something other than 200. `body` is the raw response text.
    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl QueryError {
    /// True when the transport gave up because the request timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, QueryError::Transport(e) if e.is_timeout())
    }
}

/// Documentation service client. Cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Client for `base_url` with the default 10 second timeout.
    /// The address is not validated until the first request.
    pub fn new(base_url: impl Into<String>) -> Result<Self, QueryError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Client for `base_url` whose requests give up after `timeout`, covering
    /// connect, send and reading the whole response body.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, QueryError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Client {
            base_url: base_url.into(),
            http,
        })
    }

    /// Client for the base URL and timeout named in `config`.
    pub fn from_config(config: &Config) -> Result<Self, QueryError> {
        Self::with_timeout(config.base_url(), config.timeout())
    }

    /// Base address exactly as given at construction.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `<base_url>/query`, concatenated without rewriting the base.
    fn query_url(&self) -> String {
        format!("{}/query", self.base_url)
    }

    /// Send `query` and return the service's `result` text.
    pub async fn query_documentation(&self, query: &str) -> Result<String, QueryError> {
        let body = serde_json::to_vec(&QueryRequest::new(query)).map_err(QueryError::Encode)?;
        let url = self.query_url();
        debug!(%url, bytes = body.len(), "sending documentation query");

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "documentation service responded");

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(QueryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let decoded: QueryResponse = serde_json::from_slice(&bytes).map_err(QueryError::Decode)?;
        Ok(decoded.result)
    }
}
