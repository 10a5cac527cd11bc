use std::env;
use std::time::Duration;

use crate::domain::BooksellerError;

pub const DEFAULT_BASE_URL: &str = "http://api.book-seller-example.com/by-author";
pub const DEFAULT_USER_AGENT: &str = concat!("bookseller-client/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Per-request timeout. `None` leaves it to the transport.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            base_url: env::var("BOOKSELLER_API_URL").unwrap_or(defaults.base_url),
            user_agent: env::var("BOOKSELLER_USER_AGENT").unwrap_or(defaults.user_agent),
            timeout: env::var("BOOKSELLER_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }

    /// Parses `base_url`, rejecting anything that is not an absolute http(s) URL.
    pub fn endpoint(&self) -> Result<url::Url, BooksellerError> {
        let url = url::Url::parse(&self.base_url).map_err(|e| {
            BooksellerError::InvalidConfig(format!("Invalid base URL '{}': {}", self.base_url, e))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(BooksellerError::InvalidConfig(format!(
                "Unsupported URL scheme: {}",
                scheme
            ))),
        }
    }

    pub fn build_http_client(&self) -> Result<reqwest::Client, BooksellerError> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent.as_str());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder
            .build()
            .map_err(|e| BooksellerError::InvalidConfig(format!("Failed to build client: {}", e)))
    }
}
