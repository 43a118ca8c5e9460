//! HTTP transport seam.
//!
//! The protocol layer builds a [`FormRequest`] as plain data and hands it to a
//! [`Transport`]. The default [`HttpTransport`] submits it with `reqwest`;
//! tests and callers with special needs (proxies, retries, recording) can
//! inject their own.

use async_trait::async_trait;
use cloudflare_core::{CloudflareError, Result};
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::Client as HttpClient;
use std::time::Duration;
use tracing::{debug, warn};

/// Content type of every request body
pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// A form-encoded POST request described as plain data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRequest {
    /// Absolute endpoint URL
    pub url: String,
    /// Value of the `User-Agent` header
    pub user_agent: String,
    /// `application/x-www-form-urlencoded` body
    pub body: String,
}

impl FormRequest {
    /// HTTP method used for every call
    pub const METHOD: &'static str = "POST";

    /// Look up a field in the encoded body
    #[must_use]
    pub fn field(&self, name: &str) -> Option<String> {
        url::form_urlencoded::parse(self.body.as_bytes())
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }
}

/// Submits a request and returns the raw response body.
///
/// Implementations report connection, timeout and body-read failures as
/// [`CloudflareError::Transport`]. They must not interpret the body.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Submit `request` and return the response body
    async fn send(&self, request: FormRequest) -> Result<String>;
}

/// Default transport backed by a shared `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: HttpClient,
}

impl HttpTransport {
    /// Build a transport with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(|e| CloudflareError::Transport(e.to_string()))?;
        Ok(Self { http })
    }

    /// Wrap an existing `reqwest` client
    #[must_use]
    pub const fn with_client(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: FormRequest) -> Result<String> {
        debug!(url = %request.url, "POST form request");

        let response = self
            .http
            .post(&request.url)
            .header(USER_AGENT, &request.user_agent)
            .header(CONTENT_TYPE, CONTENT_TYPE_FORM)
            .body(request.body)
            .send()
            .await
            .map_err(|e| CloudflareError::Transport(e.to_string()))?;

        // The envelope decides success; the status code is informational only.
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), url = %request.url, "non-success HTTP status");
        }

        response
            .text()
            .await
            .map_err(|e| CloudflareError::Transport(e.to_string()))
    }
}
