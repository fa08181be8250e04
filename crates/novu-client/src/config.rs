//! Client configuration.

use std::fmt;
use std::time::Duration;

use reqwest::header::HeaderValue;
use url::Url;

use crate::error::{Error, Result};

/// Hosted Novu backend.
pub const DEFAULT_BACKEND_URL: &str = "https://api.novu.co";

/// API version segment appended to the backend URL.
pub const API_VERSION: &str = "v1";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "NOVU_API_KEY";

/// Environment variable overriding the backend URL.
pub const BACKEND_URL_ENV: &str = "NOVU_BACKEND_URL";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable settings shared by every request of a client.
#[derive(Clone)]
pub struct ClientConfig {
    backend_url: Url,
    api_key: String,
    timeout: Duration,
    user_agent: String,
}

impl ClientConfig {
    /// Load configuration from `NOVU_API_KEY` and `NOVU_BACKEND_URL`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::Config(format!("{} is not set", API_KEY_ENV)))?;

        let mut builder = ClientBuilder::new().api_key(api_key);
        if let Ok(url) = std::env::var(BACKEND_URL_ENV) {
            builder = builder.base_url(url);
        }
        builder.build_config()
    }

    /// Versioned backend URL every path is joined onto.
    pub fn backend_url(&self) -> &Url {
        &self.backend_url
    }

    /// API key sent with every request.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Default per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// User agent sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// `Authorization` header value for this key.
    pub(crate) fn authorization(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("ApiKey {}", self.api_key))
            .map_err(|_| Error::Config("API key is not a valid header value".to_string()))?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// `User-Agent` header value.
    pub(crate) fn user_agent_header(&self) -> Result<HeaderValue> {
        HeaderValue::from_str(&self.user_agent).map_err(|_| {
            Error::Config(format!(
                "user agent '{}' is not a valid header value",
                self.user_agent.escape_debug()
            ))
        })
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("backend_url", &self.backend_url.as_str())
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Builder for [`ClientConfig`] and [`NovuClient`](crate::NovuClient).
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Duration,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the backend URL. Defaults to the hosted backend.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the default request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<crate::NovuClient> {
        crate::NovuClient::from_config(self.build_config()?)
    }

    /// Validate and freeze the configuration.
    pub fn build_config(self) -> Result<ClientConfig> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::Config("api_key is required".to_string()))?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        let backend_url = versioned_url(&base_url)?;

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("novu-client/{}", env!("CARGO_PKG_VERSION")));

        let config = ClientConfig {
            backend_url,
            api_key,
            timeout: self.timeout,
            user_agent,
        };
        config.authorization()?;
        config.user_agent_header()?;
        Ok(config)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a base URL and make sure it ends with the API version segment.
fn versioned_url(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)
        .map_err(|e| Error::Config(format!("invalid base URL '{}': {}", base_url, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Config(format!(
            "base URL must use http or https, got '{}'",
            url.scheme()
        )));
    }

    let has_version = url
        .path_segments()
        .and_then(|mut segments| segments.rfind(|s| !s.is_empty()))
        .is_some_and(|last| last == API_VERSION);

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| Error::Config(format!("base URL '{}' cannot be a base", base_url)))?;
        segments.pop_if_empty();
        if !has_version {
            segments.push(API_VERSION);
        }
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
