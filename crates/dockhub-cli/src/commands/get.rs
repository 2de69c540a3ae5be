//! Raw GET command.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use dockhub_client::HubClient;

use super::print_json;

/// Arguments for the get command.
#[derive(Args)]
pub struct GetArgs {
    /// Path relative to the API root (query strings allowed)
    pub path: String,

    /// Print only this top-level field of the response
    #[arg(short, long)]
    pub extract: Option<String>,
}

/// Runs the get command.
///
/// # Errors
///
/// Returns an error if the request fails or the service reports one.
pub async fn run(client: &HubClient, args: &GetArgs) -> Result<()> {
    info!(url = %client.paths().url(&args.path), "Fetching");

    let body = client
        .get(&args.path, args.extract.as_deref())
        .await
        .with_context(|| format!("Failed to fetch {}", args.path))?;

    print_json(&body)
}
