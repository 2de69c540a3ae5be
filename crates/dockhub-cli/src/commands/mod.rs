//! CLI commands and argument parsing.

pub mod get;
pub mod repo;
pub mod user;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use dockhub_client::{CacheConfig, ClientConfig, HubClient, DEFAULT_ORIGIN};

/// dockhub - Docker Hub v2 API client
#[derive(Parser)]
#[command(name = "dockhub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a raw API path
    Get(get::GetArgs),

    /// Show repository details
    Repo(repo::RepoArgs),

    /// List repository tags
    Tags(repo::TagsArgs),

    /// Show user details
    User(user::UserArgs),

    /// Log in and print the issued token
    Login(user::LoginArgs),

    /// Show the account behind the current token
    Whoami,

    /// Print version information
    Version,
}

/// Settings shared by every command.
#[derive(Args)]
pub struct ConnectionArgs {
    /// API origin
    #[arg(long, global = true, env = "DOCKHUB_ORIGIN", default_value = DEFAULT_ORIGIN)]
    pub origin: String,

    /// Login token
    #[arg(long, global = true, env = "DOCKHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value = "30")]
    pub timeout: u64,

    /// Disable the response cache
    #[arg(long, global = true)]
    pub no_cache: bool,
}

impl ConnectionArgs {
    /// Builds the client configuration from the flags.
    pub fn config(&self) -> ClientConfig {
        let cache = if self.no_cache {
            CacheConfig::disabled()
        } else {
            CacheConfig::default()
        };

        let config = ClientConfig::new()
            .with_origin(&self.origin)
            .with_timeout(Duration::from_secs(self.timeout))
            .with_cache(cache);

        match self.token {
            Some(ref token) => config.with_token(token),
            None => config,
        }
    }

    /// Creates the API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn client(&self) -> Result<HubClient> {
        HubClient::new(self.config()).context("Failed to create Docker Hub client")
    }
}

/// Prints a JSON value in human-readable form.
pub fn print_json(value: &Value) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render response")?;
    println!("{rendered}");
    Ok(())
}
