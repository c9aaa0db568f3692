//! HTTP client for the remote collection store.

use reqwest::{header, Client, StatusCode};
use thiserror::Error;

use crate::config::ClientConfig;
use crate::models::{CreatePostRequest, HealthReport, Post, Record};

/// Why a remote call did not produce a usable result.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Transport failure, timeout, or an undecodable body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store does not serve this path
    #[error("Not found: {0}")]
    NotFound(String),

    /// The store answered with a non-success status
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },
}

/// Result type for remote store calls
pub type Result<T> = std::result::Result<T, RemoteError>;

/// Thin typed wrapper over the store's REST surface. Never retries.
pub struct RemoteStore {
    base_url: String,
    http: Client,
}

impl RemoteStore {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Any 2xx reply counts as healthy; the body is only read if it parses.
    pub async fn health(&self) -> Result<HealthReport> {
        let response = self.http.get(self.url("health")).send().await?;
        let body = ensure_success(response).await?.bytes().await?;

        Ok(serde_json::from_slice(&body).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "Unrecognized health body, treating store as connected");
            HealthReport::acknowledged()
        }))
    }

    pub async fn list<T: Record>(&self) -> Result<Vec<T>> {
        let response = self
            .http
            .get(self.url(T::COLLECTION.path()))
            .send()
            .await?;
        handle_response(response).await
    }

    pub async fn append_post(&self, draft: &CreatePostRequest) -> Result<Post> {
        let response = self
            .http
            .post(self.url(Post::COLLECTION.path()))
            .json(draft)
            .send()
            .await?;
        handle_response(response).await
    }
}

async fn handle_response<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    Ok(ensure_success(response).await?.json().await?)
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status() == StatusCode::NOT_FOUND {
        return Err(RemoteError::NotFound(response.url().path().to_string()));
    }

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        return Err(RemoteError::Server { status, message });
    }

    Ok(response)
}
