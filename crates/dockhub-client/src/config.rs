//! Configuration types for the Docker Hub client.

use std::time::Duration;

use crate::cache::CacheConfig;
use crate::path::{DEFAULT_API_VERSION, DEFAULT_ORIGIN};

/// Configuration for [`HubClient`](crate::HubClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API origin (e.g., "<https://hub.docker.com>").
    pub origin: String,

    /// API version segment, rendered as `v{api_version}`.
    pub api_version: u32,

    /// Transport deadline applied to every request.
    pub timeout: Duration,

    /// User agent string.
    pub user_agent: String,

    /// Initial response cache settings.
    pub cache: CacheConfig,

    /// Login token to start with.
    pub token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientConfig {
    /// Creates a configuration pointing at the public Docker Hub.
    ///
    /// # Examples
    ///
    /// ```
    /// use dockhub_client::ClientConfig;
    ///
    /// let config = ClientConfig::new();
    /// assert_eq!(config.origin, "https://hub.docker.com");
    /// assert_eq!(config.api_version, 2);
    /// assert!(config.cache.enabled);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            api_version: DEFAULT_API_VERSION,
            timeout: Duration::from_secs(30),
            user_agent: format!("dockhub/{}", env!("CARGO_PKG_VERSION")),
            cache: CacheConfig::default(),
            token: None,
        }
    }

    /// Sets the API origin.
    ///
    /// # Examples
    ///
    /// ```
    /// use dockhub_client::ClientConfig;
    ///
    /// let config = ClientConfig::new().with_origin("http://localhost:8080");
    /// assert_eq!(config.origin, "http://localhost:8080");
    /// ```
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Sets the API version segment.
    #[must_use]
    pub const fn with_api_version(mut self, version: u32) -> Self {
        self.api_version = version;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the initial cache configuration.
    #[must_use]
    pub const fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.cache = cache;
        self
    }

    /// Starts the client already logged in.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}
