//! Network execution layer.
//!
//! The dispatcher never talks to sockets directly; it hands a fully
//! resolved [`RequestDescriptor`] to a [`Transport`].

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, ACCEPT};
use serde_json::Value;

use crate::error::TransportError;

/// HTTP verbs used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read a resource.
    Get,
    /// Create a resource or trigger an action.
    Post,
    /// Partially update a resource.
    Patch,
    /// Remove a resource.
    Delete,
}

impl Method {
    /// Returns the verb as an uppercase string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Patch => Self::PATCH,
            Method::Delete => Self::DELETE,
        }
    }
}

/// A fully resolved request, built fresh for every call.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// Absolute URL.
    pub url: String,
    /// HTTP verb.
    pub method: Method,
    /// Extra headers, including `Authorization` when logged in.
    pub headers: HeaderMap,
    /// JSON request body.
    pub body: Option<Value>,
}

/// Executes requests against the remote service.
///
/// Implementations return the decoded JSON body, or `None` when the
/// response had no body.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Sends the request and decodes the response body.
    async fn execute(&self, request: RequestDescriptor) -> Result<Option<Value>, TransportError>;
}

/// [`Transport`] backed by a `reqwest` client.
///
/// Response status codes are not treated as failures on their own: the
/// service reports most errors as JSON bodies, which are passed on for
/// classification. A non-success response whose body is not JSON fails
/// with [`TransportError::Status`]. A successful response with a body
/// that is not JSON is returned as a JSON string.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Wraps an existing `reqwest` client.
    #[must_use]
    pub const fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Builds a client with the given deadline and user agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn build(timeout: Duration, user_agent: &str) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| TransportError::Build { source: e })?;
        Ok(Self::new(http))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: RequestDescriptor) -> Result<Option<Value>, TransportError> {
        let RequestDescriptor {
            url,
            method,
            headers,
            body,
        } = request;

        let mut builder = self
            .http
            .request(method.into(), &url)
            .headers(headers)
            .header(ACCEPT, "application/json");
        if let Some(ref body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        tracing::debug!(%method, url, status = status.as_u16(), "Response received");

        if text.trim().is_empty() {
            if status.is_success() {
                return Ok(None);
            }
            return Err(TransportError::Status {
                url,
                status: status.as_u16(),
                body: text,
            });
        }

        match serde_json::from_str(&text) {
            Ok(value) => Ok(Some(value)),
            Err(_) if status.is_success() => Ok(Some(Value::String(text))),
            Err(_) => Err(TransportError::Status {
                url,
                status: status.as_u16(),
                body: text,
            }),
        }
    }
}
