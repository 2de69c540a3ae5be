//! Repository commands.

use anyhow::{Context, Result};
use clap::Args;

use dockhub_client::{HubClient, Page, RepoRef};

use super::print_json;

/// Arguments for the repo command.
#[derive(Args)]
pub struct RepoArgs {
    /// Repository as `name` or `namespace/name`
    pub repository: String,
}

/// Arguments for the tags command.
#[derive(Args)]
pub struct TagsArgs {
    /// Repository as `name` or `namespace/name`
    pub repository: String,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Results per page
    #[arg(long, default_value = "100")]
    pub per_page: u32,
}

/// Runs the repo command.
///
/// # Errors
///
/// Returns an error if the repository cannot be fetched.
pub async fn run(client: &HubClient, args: &RepoArgs) -> Result<()> {
    let repo = RepoRef::parse(&args.repository);
    let info = client
        .repository(&repo)
        .await
        .with_context(|| format!("Failed to fetch repository {repo}"))?;
    print_json(&info)
}

/// Runs the tags command.
///
/// # Errors
///
/// Returns an error if the tags cannot be listed.
pub async fn tags(client: &HubClient, args: &TagsArgs) -> Result<()> {
    let repo = RepoRef::parse(&args.repository);
    let tags = client
        .tags(&repo, Page::new(args.page, args.per_page))
        .await
        .with_context(|| format!("Failed to list tags for {repo}"))?;

    match tags.as_array() {
        Some(tags) => {
            for tag in tags {
                if let Some(name) = tag.get("name").and_then(|n| n.as_str()) {
                    println!("{name}");
                }
            }
            Ok(())
        }
        None => print_json(&tags),
    }
}
