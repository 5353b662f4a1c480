use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use presswire::app::ContentClient;
use presswire::cli::{commands, Cli, Commands};
use presswire::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Resolve the content source once: file, then environment, then flags.
    let mut source = config.source.clone().with_env_overrides();
    if let Some(base_url) = cli.base_url {
        source.base_url = Some(base_url);
    }
    if let Some(site) = cli.site {
        source.site = Some(site);
    }
    source.install();

    let client = Arc::new(ContentClient::new(&config)?);

    match cli.command {
        Commands::Status => {
            commands::status(&client);
        }
        Commands::Section { name } => {
            commands::show_section(client, &name).await?;
        }
        Commands::Post { slug } => {
            commands::show_post(client, &slug).await?;
        }
        Commands::Posts {
            search,
            tags,
            expand,
            per_page,
        } => {
            commands::list_posts(&client, search.as_deref(), &tags, &expand, per_page).await?;
        }
    }

    Ok(())
}
