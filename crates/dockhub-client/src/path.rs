//! Resource path normalization.

/// Default API origin.
pub const DEFAULT_ORIGIN: &str = "https://hub.docker.com";

/// Default API version segment.
pub const DEFAULT_API_VERSION: u32 = 2;

/// Turns relative resource paths into absolute, versioned URLs.
///
/// Query strings are never built here: callers append `?key=value&...`
/// before passing the path in. Input is not validated, so a malformed
/// path produces a malformed URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathBuilder {
    base: String,
}

impl PathBuilder {
    /// Creates a builder for the given origin and API version.
    ///
    /// # Examples
    ///
    /// ```
    /// use dockhub_client::PathBuilder;
    ///
    /// let paths = PathBuilder::new("https://hub.docker.com", 2);
    /// assert_eq!(paths.url("users/alice"), "https://hub.docker.com/v2/users/alice/");
    /// ```
    #[must_use]
    pub fn new(origin: &str, api_version: u32) -> Self {
        Self {
            base: format!("{}/v{api_version}/", origin.trim_end_matches('/')),
        }
    }

    /// Returns the versioned base URL, ending in `/`.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Builds the absolute URL for a relative path.
    ///
    /// Exactly one leading `/` is stripped. A trailing `/` is appended
    /// unless the path already ends in one or contains `?`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dockhub_client::PathBuilder;
    ///
    /// let paths = PathBuilder::default();
    /// assert_eq!(paths.url("/user"), "https://hub.docker.com/v2/user/");
    /// assert_eq!(
    ///     paths.url("repositories/library/nginx/tags?page=2"),
    ///     "https://hub.docker.com/v2/repositories/library/nginx/tags?page=2"
    /// );
    /// ```
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        let path = path.strip_prefix('/').unwrap_or(path);
        let slash = if path.ends_with('/') || path.contains('?') {
            ""
        } else {
            "/"
        };
        format!("{}{path}{slash}", self.base)
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_ORIGIN, DEFAULT_API_VERSION)
    }
}
