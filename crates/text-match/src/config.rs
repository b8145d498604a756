//! Configuration for the comparison service client.

use std::time::Duration;

/// Service configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL baked in at build time, falling back to a local service.
    pub const DEFAULT_BASE_URL: &str = match option_env!("TEXT_MATCH_BASE_URL") {
        Some(url) => url,
        None => "http://localhost:8000",
    };

    /// Environment variable that overrides the base URL at run time.
    pub const BASE_URL_ENV: &str = "TEXT_MATCH_BASE_URL";

    /// Comparison endpoint, relative to the base URL.
    pub const COMPARE_PATH: &str = "/compare-pdfs-by-partition/";

    /// Liveness endpoint, relative to the base URL.
    pub const STATUS_PATH: &str = "/";

    /// Request timeout. The service scores every partition pair, so large
    /// documents take a while.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Multipart part names expected by the comparison endpoint.
pub mod parts {
    /// Part carrying the first PDF.
    pub const FILE1: &str = "file1";

    /// Part carrying the second PDF.
    pub const FILE2: &str = "file2";

    /// Content type sent for both parts.
    pub const PDF_MIME: &str = "application/pdf";
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the comparison service, without trailing slash.
    pub base_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a configuration pointing at `base_url` with default timeouts.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration for a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url.to_string()),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if `TEXT_MATCH_BASE_URL` is not a valid http(s) URL.
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url =
            std::env::var(api::BASE_URL_ENV).unwrap_or_else(|_| api::DEFAULT_BASE_URL.to_string());
        let config = Self::new(base_url);
        config.validate()?;
        Ok(config)
    }

    /// Override the request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Check that the base URL parses and uses http or https.
    ///
    /// # Errors
    ///
    /// Returns error describing the offending URL.
    pub fn validate(&self) -> anyhow::Result<()> {
        let url = url::Url::parse(&self.base_url)
            .map_err(|e| anyhow::anyhow!("invalid base URL '{}': {e}", self.base_url))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => anyhow::bail!("unsupported URL scheme '{other}' in '{}'", self.base_url),
        }
    }

    /// Full URL of the comparison endpoint.
    #[must_use]
    pub fn compare_url(&self) -> String {
        format!("{}{}", self.base_url, api::COMPARE_PATH)
    }

    /// Full URL of the liveness endpoint.
    #[must_use]
    pub fn status_url(&self) -> String {
        format!("{}{}", self.base_url, api::STATUS_PATH)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(api::DEFAULT_BASE_URL)
    }
}

fn normalize_base_url(mut url: String) -> String {
    let trimmed = url.trim_end_matches('/').len();
    url.truncate(trimmed);
    url
}
