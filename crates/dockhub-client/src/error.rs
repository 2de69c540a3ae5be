//! Error types for Docker Hub API operations.

use thiserror::Error;

/// Result alias used throughout the client.
pub type Result<T> = std::result::Result<T, HubError>;

/// Errors that can occur while dispatching a request.
#[derive(Debug, Error)]
pub enum HubError {
    /// The call was malformed and never reached the network.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message.
        message: String,
    },

    /// The transport failed before a response body was available.
    #[error("Transport error: {source}")]
    Transport {
        /// Underlying error.
        #[from]
        source: TransportError,
    },

    /// The remote service answered with a `detail` error body.
    #[error("{message}")]
    RemoteDetail {
        /// Value of the `detail` field.
        message: String,
    },

    /// The remote service answered with an `error` error body.
    #[error("{message}")]
    Remote {
        /// Value of the `error` field.
        message: String,
    },

    /// Login completed but the service did not issue a token.
    #[error("Authentication failed: {message}")]
    Authentication {
        /// Error message.
        message: String,
    },

    /// An operation that needs a credential was called without one.
    #[error("No login token found, log in or set a token first")]
    NotAuthenticated,

    /// The stored credential cannot be encoded as a header value.
    #[error("Invalid header value for {name}")]
    InvalidHeader {
        /// Header name.
        name: String,
    },
}

impl HubError {
    /// Creates an [`HubError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Returns `true` if the remote service classified the call as failed.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::RemoteDetail { .. } | Self::Remote { .. })
    }
}

/// Errors raised by a [`Transport`](crate::Transport) implementation.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP request could not be completed.
    #[error("Request to {url} failed: {source}")]
    Request {
        /// Request URL.
        url: String,
        /// Underlying error.
        #[source]
        source: reqwest::Error,
    },

    /// A non-success response carried no JSON body to classify.
    #[error("Request to {url} returned status {status}")]
    Status {
        /// Request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client: {source}")]
    Build {
        /// Underlying error.
        #[source]
        source: reqwest::Error,
    },

    /// Any other transport failure, for custom transports.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request {
            url: err
                .url()
                .map_or_else(|| "unknown".to_string(), ToString::to_string),
            source: err,
        }
    }
}
