//! Bearer credential storage.

use std::fmt;

use parking_lot::RwLock;

/// Holds at most one active login token.
///
/// There is no expiry tracking: an expired token only surfaces as a
/// failed request from the remote side.
#[derive(Default)]
pub struct CredentialStore {
    token: RwLock<Option<String>>,
}

impl CredentialStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given token.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    /// Replaces the active token.
    pub fn set(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
    }

    /// Returns a copy of the active token, if any.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// Returns `true` when a token is present.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.token.read().is_some()
    }

    /// Renders the `Authorization` header value for the active token.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.token.read().as_ref().map(|token| format!("JWT {token}"))
    }
}

impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialStore")
            .field("token", &self.is_set().then_some("<redacted>"))
            .finish()
    }
}
