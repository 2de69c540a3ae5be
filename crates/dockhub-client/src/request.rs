//! Tagged request builder.

use serde_json::Value;

use crate::transport::Method;

/// A call to the dispatcher, described by named fields.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use dockhub_client::{Method, Request};
///
/// let request = Request::post("users/login")
///     .data(json!({"username": "alice", "password": "secret"}))
///     .extract("token");
/// assert_eq!(request.method, Method::Post);
/// assert_eq!(request.extract.as_deref(), Some("token"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// HTTP verb.
    pub method: Method,
    /// Path relative to the versioned API root.
    pub path: String,
    /// JSON body, required for POST and PATCH.
    pub data: Option<Value>,
    /// Name of a top-level field to return instead of the whole body.
    pub extract: Option<String>,
}

impl Request {
    /// Creates a request with no body and no extraction.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            data: None,
            extract: None,
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// Creates a POST request.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    /// Creates a PATCH request.
    #[must_use]
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    /// Creates a DELETE request.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Returns only the named field of the response when it is present.
    #[must_use]
    pub fn extract(mut self, key: impl Into<String>) -> Self {
        self.extract = Some(key.into());
        self
    }

    /// Same as [`Request::extract`] but takes an optional key.
    #[must_use]
    pub fn extract_opt(mut self, key: Option<&str>) -> Self {
        self.extract = key.map(ToString::to_string);
        self
    }
}
