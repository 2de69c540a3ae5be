//! Account commands.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use dockhub_client::HubClient;

use super::print_json;

/// Arguments for the user command.
#[derive(Args)]
pub struct UserArgs {
    /// Username
    pub username: String,
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Username
    #[arg(short, long, env = "DOCKHUB_USERNAME")]
    pub username: String,

    /// Password or access token
    #[arg(long, env = "DOCKHUB_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Runs the user command.
///
/// # Errors
///
/// Returns an error if the user cannot be fetched.
pub async fn run(client: &HubClient, args: &UserArgs) -> Result<()> {
    let user = client
        .user(&args.username)
        .await
        .with_context(|| format!("Failed to fetch user {}", args.username))?;
    print_json(&user)
}

/// Logs in and prints the issued token.
///
/// # Errors
///
/// Returns an error if the login is rejected.
pub async fn login(client: &HubClient, args: &LoginArgs) -> Result<()> {
    client
        .login(&args.username, &args.password)
        .await
        .context("Login failed")?;

    info!(username = %args.username, "Login succeeded");
    if let Some(token) = client.credential() {
        println!("{token}");
    }
    Ok(())
}

/// Shows the account behind the current token.
///
/// # Errors
///
/// Returns an error if no token is configured or the request fails.
pub async fn whoami(client: &HubClient) -> Result<()> {
    let me = client
        .logged_in_user()
        .await
        .context("Failed to fetch the logged in user")?;
    print_json(&me)
}
