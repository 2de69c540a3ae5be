//! Resource methods built on top of the dispatcher.
//!
//! These only normalize arguments into paths and bodies; every call goes
//! through [`HubClient::get`], [`HubClient::post`], [`HubClient::patch`]
//! or [`HubClient::delete`].

use std::fmt;

use serde::Serialize;
use serde_json::{json, Value};

use crate::client::HubClient;
use crate::error::{HubError, Result};

/// Namespace that holds official images.
pub const OFFICIAL_NAMESPACE: &str = "library";

/// Reference to a repository as `namespace/name`.
///
/// Namespaces are lowercased and `_` stands for the official namespace.
///
/// # Examples
///
/// ```
/// use dockhub_client::RepoRef;
///
/// assert_eq!(RepoRef::official("nginx").to_string(), "library/nginx");
/// assert_eq!(RepoRef::new("_", "nginx").to_string(), "library/nginx");
/// assert_eq!(RepoRef::new("RyanTheAllmighty", "nginx").to_string(), "ryantheallmighty/nginx");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    namespace: String,
    name: String,
}

impl RepoRef {
    /// Creates a reference to a repository in `namespace`.
    #[must_use]
    pub fn new(namespace: &str, name: impl Into<String>) -> Self {
        let namespace = if namespace == "_" {
            OFFICIAL_NAMESPACE.to_string()
        } else {
            namespace.to_lowercase()
        };
        Self {
            namespace,
            name: name.into(),
        }
    }

    /// Creates a reference to an official repository.
    #[must_use]
    pub fn official(name: impl Into<String>) -> Self {
        Self::new(OFFICIAL_NAMESPACE, name)
    }

    /// Parses `name` or `namespace/name`.
    #[must_use]
    pub fn parse(reference: &str) -> Self {
        match reference.split_once('/') {
            Some((namespace, name)) => Self::new(namespace, name),
            None => Self::official(reference),
        }
    }

    /// Returns the namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the repository name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn path(&self) -> String {
        format!("repositories/{}/{}", self.namespace, self.name)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// Pagination window for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// One-based page number.
    pub page: u32,
    /// Number of results per page.
    pub per_page: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 100,
        }
    }
}

impl Page {
    /// Creates a page window.
    #[must_use]
    pub const fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    /// Renders the query string, including the leading `?`.
    #[must_use]
    pub fn query(&self) -> String {
        format!("?page_size={}&page={}", self.per_page, self.page)
    }
}

/// Repository descriptions for [`HubClient::set_repository_description`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Description {
    /// Short description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Full (markdown) description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
}

impl Description {
    /// Sets the short description.
    #[must_use]
    pub fn short(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Sets the full description.
    #[must_use]
    pub fn full(mut self, text: impl Into<String>) -> Self {
        self.full_description = Some(text.into());
        self
    }

    const fn is_empty(&self) -> bool {
        self.description.is_none() && self.full_description.is_none()
    }
}

/// Settings for [`HubClient::create_repository`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRepository {
    /// Owning namespace.
    pub namespace: String,
    /// Repository name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Full (markdown) description.
    pub full_description: String,
    /// Whether the repository is private.
    pub is_private: bool,
}

impl NewRepository {
    /// Creates settings for a public repository with empty descriptions.
    #[must_use]
    pub fn new(namespace: &str, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.to_lowercase(),
            name: name.into(),
            description: String::new(),
            full_description: String::new(),
            is_private: false,
        }
    }

    /// Marks the repository as private.
    #[must_use]
    pub const fn private(mut self) -> Self {
        self.is_private = true;
        self
    }

    /// Sets both descriptions.
    #[must_use]
    pub fn with_description(
        mut self,
        description: impl Into<String>,
        full_description: impl Into<String>,
    ) -> Self {
        self.description = description.into();
        self.full_description = full_description.into();
        self
    }
}

fn username(raw: &str) -> Result<String> {
    if raw.is_empty() {
        return Err(HubError::invalid_argument("username must be provided"));
    }
    Ok(raw.to_lowercase())
}

impl HubClient {
    /// Logs in and stores the issued token for later calls.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::InvalidArgument`] if either argument is empty and
    /// [`HubError::Authentication`] if the response carries no token.
    pub async fn login(&self, username: &str, password: &str) -> Result<Value> {
        if username.is_empty() || password.is_empty() {
            return Err(HubError::invalid_argument(
                "both username and password must be provided",
            ));
        }

        let info = self
            .post(
                "users/login/",
                &json!({"username": username, "password": password}),
                None,
            )
            .await?
            .unwrap_or(Value::Null);

        let token = info
            .get("token")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| HubError::Authentication {
                message: "no login token sent back".to_string(),
            })?;

        self.set_credential(token);
        tracing::info!(username, "Logged in");

        Ok(info)
    }

    /// Returns the account behind the current token.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::NotAuthenticated`] when no token is set.
    pub async fn logged_in_user(&self) -> Result<Value> {
        if self.credential().is_none() {
            return Err(HubError::NotAuthenticated);
        }
        self.get("user/", None).await
    }

    /// Returns details about a repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn repository(&self, repo: &RepoRef) -> Result<Value> {
        self.get(&repo.path(), None).await
    }

    /// Lists the repositories of a user.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::InvalidArgument`] for an empty username.
    pub async fn repositories(&self, user: &str) -> Result<Value> {
        let user = username(user)?;
        self.get(&format!("users/{user}/repositories"), None).await
    }

    /// Lists the repositories a user has starred.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::InvalidArgument`] for an empty username.
    pub async fn repositories_starred(&self, user: &str, page: Page) -> Result<Value> {
        let user = username(user)?;
        let path = format!("users/{user}/repositories/starred{}", page.query());
        self.get(&path, Some("results")).await
    }

    /// Lists the tags of a repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn tags(&self, repo: &RepoRef, page: Page) -> Result<Value> {
        let path = format!("{}/tags{}", repo.path(), page.query());
        self.get(&path, Some("results")).await
    }

    /// Returns details about a user.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::InvalidArgument`] for an empty username.
    pub async fn user(&self, user: &str) -> Result<Value> {
        let user = username(user)?;
        self.get(&format!("users/{user}"), None).await
    }

    /// Lists the comments on a repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn comments(&self, repo: &RepoRef, page: Page) -> Result<Value> {
        let path = format!("{}/comments{}", repo.path(), page.query());
        self.get(&path, Some("results")).await
    }

    /// Updates the short and/or full description of a repository.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::InvalidArgument`] if neither description is set.
    pub async fn set_repository_description(
        &self,
        repo: &RepoRef,
        description: &Description,
    ) -> Result<Option<Value>> {
        if description.is_empty() {
            return Err(HubError::invalid_argument(
                "a short or full description must be provided",
            ));
        }
        self.patch(&repo.path(), description, None).await
    }

    /// Stars a repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn star_repository(&self, repo: &RepoRef) -> Result<()> {
        self.post(&format!("{}/stars", repo.path()), &json!({}), None)
            .await
            .map(|_| ())
    }

    /// Removes a star from a repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn unstar_repository(&self, repo: &RepoRef) -> Result<()> {
        self.delete(&format!("{}/stars", repo.path())).await
    }

    /// Creates a repository.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::InvalidArgument`] if the namespace or name is empty.
    pub async fn create_repository(&self, settings: &NewRepository) -> Result<Option<Value>> {
        if settings.namespace.is_empty() || settings.name.is_empty() {
            return Err(HubError::invalid_argument(
                "namespace and name must be provided",
            ));
        }
        self.post("repositories", settings, None).await
    }

    /// Deletes a repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_repository(&self, repo: &RepoRef) -> Result<()> {
        self.delete(&repo.path()).await
    }

    /// Lists the webhooks of a repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn webhooks(&self, repo: &RepoRef, page: Page) -> Result<Value> {
        let path = format!("{}/webhooks{}", repo.path(), page.query());
        self.get(&path, Some("results")).await
    }

    /// Creates a named webhook on a repository.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::InvalidArgument`] for an empty name.
    pub async fn create_webhook(&self, repo: &RepoRef, name: &str) -> Result<Option<Value>> {
        if name.is_empty() {
            return Err(HubError::invalid_argument("webhook name must be provided"));
        }
        self.post(
            &format!("{}/webhooks", repo.path()),
            &json!({"name": name}),
            None,
        )
        .await
    }

    /// Attaches a target URL to an existing webhook.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::InvalidArgument`] for an empty URL.
    pub async fn create_webhook_hook(
        &self,
        repo: &RepoRef,
        id: u64,
        hook_url: &str,
    ) -> Result<Option<Value>> {
        if hook_url.is_empty() {
            return Err(HubError::invalid_argument("hook URL must be provided"));
        }
        self.post(
            &format!("{}/webhooks/{id}/hooks", repo.path()),
            &json!({"hook_url": hook_url}),
            None,
        )
        .await
    }

    /// Deletes a webhook from a repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_webhook(&self, repo: &RepoRef, id: u64) -> Result<()> {
        self.delete(&format!("{}/webhooks/{id}", repo.path())).await
    }
}
