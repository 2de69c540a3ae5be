//! In-memory response cache for GET requests.
//!
//! Entries are keyed by the absolute URL, query string included, and
//! expire lazily: a stale entry is only removed when it is looked up.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use serde_json::Value;

use crate::clock::{Clock, SystemClock};

/// Default time-to-live for cached responses.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Effective cache settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Whether GET responses are cached and served from the cache.
    pub enabled: bool,

    /// Time-to-live for new entries (default: 300 seconds).
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl: DEFAULT_TTL,
        }
    }
}

impl CacheConfig {
    /// Returns a configuration with caching turned off.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            ttl: DEFAULT_TTL,
        }
    }

    /// Sets the TTL for cache entries.
    #[must_use]
    pub const fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Enables or disables caching.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Partial update for [`CacheConfig`].
///
/// Fields left as `None` keep their current value.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use dockhub_client::CacheOptions;
///
/// let options = CacheOptions::new().enabled(true).ttl(Duration::from_secs(1));
/// assert_eq!(options.ttl, Some(Duration::from_secs(1)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheOptions {
    /// New enablement flag.
    pub enabled: Option<bool>,

    /// New time-to-live.
    pub ttl: Option<Duration>,
}

impl CacheOptions {
    /// Creates an empty update.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            enabled: None,
            ttl: None,
        }
    }

    /// Sets the enablement flag.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Sets the time-to-live.
    #[must_use]
    pub const fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    fn apply(self, config: &mut CacheConfig) {
        if let Some(enabled) = self.enabled {
            config.enabled = enabled;
        }
        if let Some(ttl) = self.ttl {
            config.ttl = ttl;
        }
    }
}

/// A cached response payload.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Decoded response body.
    pub payload: Value,

    /// Instant at which the entry stops being served.
    pub expires_at: Instant,
}

#[derive(Debug, Default)]
struct CacheState {
    config: CacheConfig,
    entries: HashMap<String, CacheEntry>,
}

/// Response cache shared by all GET calls of a client.
#[derive(Debug)]
pub struct ResponseCache {
    state: Mutex<CacheState>,
    clock: Arc<dyn Clock>,
}

impl ResponseCache {
    /// Creates a cache with the given configuration and the system clock.
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a cache driven by a custom clock.
    #[must_use]
    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(CacheState {
                config,
                entries: HashMap::new(),
            }),
            clock,
        }
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> CacheConfig {
        self.state.lock().config
    }

    /// Applies a partial configuration update and clears every entry.
    ///
    /// The store is cleared even when the values did not change.
    pub fn configure(&self, options: CacheOptions) {
        let mut state = self.state.lock();
        options.apply(&mut state.config);
        let dropped = state.entries.len();
        state.entries.clear();

        tracing::info!(
            enabled = state.config.enabled,
            ttl_secs = state.config.ttl.as_secs_f64(),
            dropped,
            "Cache reconfigured"
        );
    }

    /// Drops every entry and keeps the configuration.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        let dropped = state.entries.len();
        state.entries.clear();
        tracing::debug!(dropped, "Cache cleared");
    }

    /// Looks up a fresh payload for `url`.
    ///
    /// Always misses while caching is disabled. An expired entry is
    /// evicted and reported as a miss.
    #[must_use]
    pub fn get(&self, url: &str) -> Option<Value> {
        let mut state = self.state.lock();
        if !state.config.enabled {
            return None;
        }

        let now = self.clock.now();
        match state.entries.get(url) {
            Some(entry) if now >= entry.expires_at => {
                tracing::debug!(url, "Cache entry expired, removing");
                state.entries.remove(url);
                None
            }
            Some(entry) => Some(entry.payload.clone()),
            None => None,
        }
    }

    /// Stores `payload` under `url`, replacing any previous entry.
    ///
    /// Does nothing while caching is disabled.
    pub fn put(&self, url: &str, payload: &Value) {
        let mut state = self.state.lock();
        if !state.config.enabled {
            return;
        }

        let expires_at = self.clock.now() + state.config.ttl;
        state.entries.insert(
            url.to_string(),
            CacheEntry {
                payload: payload.clone(),
                expires_at,
            },
        );
    }

    /// Number of stored entries, stale ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    /// Returns `true` when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}
