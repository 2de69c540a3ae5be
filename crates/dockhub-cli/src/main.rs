//! dockhub CLI - Command-line interface for the Docker Hub v2 API.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dockhub=info,dockhub_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let client = cli.connection.client()?;

    match cli.command {
        Commands::Get(args) => commands::get::run(&client, &args).await,
        Commands::Repo(args) => commands::repo::run(&client, &args).await,
        Commands::Tags(args) => commands::repo::tags(&client, &args).await,
        Commands::User(args) => commands::user::run(&client, &args).await,
        Commands::Login(args) => commands::user::login(&client, &args).await,
        Commands::Whoami => commands::user::whoami(&client).await,
        Commands::Version => {
            println!("dockhub {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
