//! Comparison service client.
//!
//! Provides an async HTTP client that:
//! - Uploads both PDFs as one multipart POST
//! - Maps every non-success answer to a uniform transport error
//! - Never retries: a multipart upload is sent exactly once

mod multipart;

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::models::{ComparisonRequest, ComparisonResult, ServiceStatus};

/// Something that can compare two PDFs.
///
/// The upload form talks to the service through this trait so tests can
/// substitute a local double.
#[async_trait::async_trait]
pub trait Comparator: Send + Sync {
    /// Submit both files and return the parsed result.
    async fn compare(&self, request: ComparisonRequest<'_>) -> ClientResult<ComparisonResult>;
}

/// HTTP client for the comparison service.
#[derive(Clone)]
pub struct ComparisonClient {
    /// HTTP client.
    client: Client,

    /// Service base URL.
    base_url: String,

    /// Comparison endpoint URL.
    compare_url: String,

    /// Liveness endpoint URL.
    status_url: String,
}

impl ComparisonClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is invalid or HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            compare_url: config.compare_url(),
            status_url: config.status_url(),
            base_url: config.base_url,
        })
    }

    /// Service base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upload both PDFs to the comparison endpoint.
    ///
    /// # Errors
    ///
    /// Returns error on network failure, non-success status, or a body that
    /// isn't a comparison result.
    pub async fn compare_pdfs(
        &self,
        request: ComparisonRequest<'_>,
    ) -> ClientResult<ComparisonResult> {
        let form = multipart::build_form(request)?;

        tracing::debug!(
            url = %self.compare_url,
            file1 = request.file1.name(),
            file2 = request.file2.name(),
            bytes = request.file1.len() + request.file2.len(),
            "Submitting comparison"
        );

        let response = self.client.post(&self.compare_url).multipart(form).send().await?;
        let response = Self::handle_response(response).await?;
        let result: ComparisonResult = Self::parse_json(response).await?;

        tracing::debug!(matches = result.match_count(), "Comparison received");
        Ok(result)
    }

    /// Fetch the service liveness message.
    ///
    /// # Errors
    ///
    /// Returns error on network failure or non-success status.
    pub async fn status(&self) -> ClientResult<ServiceStatus> {
        let response = self.client.get(&self.status_url).send().await?;
        let response = Self::handle_response(response).await?;
        Self::parse_json(response).await
    }

    /// Parse a JSON body.
    async fn parse_json<T>(response: reqwest::Response) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(ClientError::from)
    }

    /// Handle service response status codes.
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), body = %text, "Comparison service returned an error");

        if status.is_server_error() {
            Err(ClientError::server(status.as_u16(), text))
        } else {
            Err(ClientError::unexpected_status(status.as_u16(), text))
        }
    }
}

#[async_trait::async_trait]
impl Comparator for ComparisonClient {
    async fn compare(&self, request: ComparisonRequest<'_>) -> ClientResult<ComparisonResult> {
        self.compare_pdfs(request).await
    }
}

impl std::fmt::Debug for ComparisonClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComparisonClient").field("base_url", &self.base_url).finish()
    }
}
