//! Request dispatch.
//!
//! [`HubClient`] owns the credential and the response cache of one session
//! and runs every call through the same pipeline: build the URL, consult
//! the cache (GET only), attach the credential, execute, classify, store.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Serialize;
use serde_json::Value;

use crate::cache::{CacheConfig, CacheOptions, ResponseCache};
use crate::classify::{classify, extract};
use crate::clock::{Clock, SystemClock};
use crate::config::ClientConfig;
use crate::credential::CredentialStore;
use crate::error::{HubError, Result};
use crate::path::PathBuilder;
use crate::request::Request;
use crate::transport::{HttpTransport, Method, RequestDescriptor, Transport};

/// Client session for the Docker Hub API.
///
/// Calls are independent and may run concurrently. Identical concurrent
/// GETs are not collapsed: each one that misses the cache hits the
/// network.
#[derive(Debug)]
pub struct HubClient {
    paths: PathBuilder,
    credentials: CredentialStore,
    cache: ResponseCache,
    transport: Arc<dyn Transport>,
}

impl HubClient {
    /// Creates a client that talks HTTP through `reqwest`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dockhub_client::{ClientConfig, HubClient};
    ///
    /// let client = HubClient::new(ClientConfig::new())?;
    /// # Ok::<(), dockhub_client::HubError>(())
    /// ```
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::build(config.timeout, &config.user_agent)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client over a custom transport.
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self::with_parts(config, transport, Arc::new(SystemClock))
    }

    /// Creates a client over a custom transport and clock.
    #[must_use]
    pub fn with_parts(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let credentials = config
            .token
            .map_or_else(CredentialStore::new, CredentialStore::with_token);

        Self {
            paths: PathBuilder::new(&config.origin, config.api_version),
            credentials,
            cache: ResponseCache::with_clock(config.cache, clock),
            transport,
        }
    }

    /// Returns the URL builder used by this client.
    #[must_use]
    pub const fn paths(&self) -> &PathBuilder {
        &self.paths
    }

    /// Replaces the login token used for subsequent calls.
    ///
    /// Also empties the response cache.
    pub fn set_credential(&self, token: impl Into<String>) {
        self.credentials.set(token);
        self.cache.clear();
    }

    /// Returns the current login token.
    #[must_use]
    pub fn credential(&self) -> Option<String> {
        self.credentials.get()
    }

    /// Updates the cache settings and empties the cache.
    pub fn configure_cache(&self, options: CacheOptions) {
        self.cache.configure(options);
    }

    /// Returns the effective cache settings.
    #[must_use]
    pub fn cache_config(&self) -> CacheConfig {
        self.cache.config()
    }

    /// Returns the response cache.
    #[must_use]
    pub const fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Fetches a resource, serving it from the cache while fresh.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Transport`] if the request fails, or a remote
    /// error if the body reports one.
    pub async fn get(&self, path: &str, extract_key: Option<&str>) -> Result<Value> {
        let url = self.paths.url(path);

        if let Some(payload) = self.cache.get(&url) {
            tracing::debug!(url, "Cache hit");
            return Ok(extract(payload, extract_key));
        }

        let body = self
            .dispatch(Method::Get, &url, None)
            .await?
            .unwrap_or(Value::Null);
        let body = checked(&url, body)?;

        self.cache.put(&url, &body);
        Ok(extract(body, extract_key))
    }

    /// Sends a POST with a JSON object body.
    ///
    /// Returns `None` when the service answers without a body.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::InvalidArgument`] if `data` does not serialize
    /// to a JSON object, before anything is sent.
    pub async fn post<T>(
        &self,
        path: &str,
        data: &T,
        extract_key: Option<&str>,
    ) -> Result<Option<Value>>
    where
        T: Serialize + ?Sized,
    {
        let request = Request::post(path)
            .data(to_json(data)?)
            .extract_opt(extract_key);
        self.execute(request).await
    }

    /// Sends a PATCH with a JSON object body.
    ///
    /// # Errors
    ///
    /// Same as [`HubClient::post`].
    pub async fn patch<T>(
        &self,
        path: &str,
        data: &T,
        extract_key: Option<&str>,
    ) -> Result<Option<Value>>
    where
        T: Serialize + ?Sized,
    {
        let request = Request::patch(path)
            .data(to_json(data)?)
            .extract_opt(extract_key);
        self.execute(request).await
    }

    /// Deletes a resource.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Transport`] if the request fails. A body that
    /// reports an error is still classified.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute(Request::delete(path)).await.map(|_| ())
    }

    /// Runs a request described by a [`Request`].
    ///
    /// GET always resolves with a value; the other verbs resolve with
    /// `None` when there is nothing to return.
    ///
    /// # Errors
    ///
    /// See the per-verb methods.
    pub async fn execute(&self, request: Request) -> Result<Option<Value>> {
        let Request {
            method,
            path,
            data,
            extract: extract_key,
        } = request;

        match method {
            Method::Get => self.get(&path, extract_key.as_deref()).await.map(Some),
            Method::Post | Method::Patch => {
                let data = match data {
                    Some(data) if data.is_object() => data,
                    _ => {
                        return Err(HubError::invalid_argument(format!(
                            "data must be passed to all {method} requests as a JSON object"
                        )))
                    }
                };

                let url = self.paths.url(&path);
                match self.dispatch(method, &url, Some(data)).await? {
                    Some(body) => {
                        let body = checked(&url, body)?;
                        Ok(Some(extract(body, extract_key.as_deref())))
                    }
                    None => Ok(None),
                }
            }
            Method::Delete => {
                let url = self.paths.url(&path);
                if let Some(body) = self.dispatch(method, &url, None).await? {
                    checked(&url, body)?;
                }
                Ok(None)
            }
        }
    }

    async fn dispatch(
        &self,
        method: Method,
        url: &str,
        body: Option<Value>,
    ) -> Result<Option<Value>> {
        let request = RequestDescriptor {
            url: url.to_string(),
            method,
            headers: self.auth_headers()?,
            body,
        };

        tracing::debug!(%method, url, "Dispatching request");

        self.transport.execute(request).await.map_err(|e| {
            tracing::debug!(%method, url, error = %e, "Transport failed");
            HubError::from(e)
        })
    }

    fn auth_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(value) = self.credentials.authorization() {
            let value = HeaderValue::from_str(&value).map_err(|_| HubError::InvalidHeader {
                name: AUTHORIZATION.to_string(),
            })?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }
}

fn checked(url: &str, body: Value) -> Result<Value> {
    classify(body).inspect_err(|e| {
        tracing::warn!(url, error = %e, "Remote service reported an error");
    })
}

fn to_json<T: Serialize + ?Sized>(data: &T) -> Result<Value> {
    serde_json::to_value(data)
        .map_err(|e| HubError::invalid_argument(format!("data could not be serialized: {e}")))
}
