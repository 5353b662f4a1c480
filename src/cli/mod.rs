pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "presswire")]
#[command(about = "Fetch and inspect site content from a WordPress REST API", long_about = None)]
pub struct Cli {
    /// Base URL of the WordPress REST API (overrides config and environment)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Site identifier for the posts endpoint
    #[arg(long, global = true)]
    pub site: Option<String>,

    /// Config file to use instead of ~/.config/presswire/config.toml
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show whether a content source is configured
    Status,
    /// Fetch one site section and print its fetch state
    Section {
        /// Section slug: social-media, hero, about, footer, posts-page,
        /// comments-page or contact
        name: String,
    },
    /// Fetch a single post by slug
    Post {
        slug: String,
    },
    /// List recent posts through the search and tag filters
    Posts {
        /// Only show posts whose title or excerpt contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Only show posts with any of these tags (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Show the excerpt of these post ids (repeatable)
        #[arg(short, long)]
        expand: Vec<u64>,

        /// Number of posts to fetch
        #[arg(long, default_value_t = 20)]
        per_page: u32,
    },
}
