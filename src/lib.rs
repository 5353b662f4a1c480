//! # presswire
//!
//! Content layer for a static site backed by a WordPress REST API.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → Normalizer → ContentClient → FetchHook → presentation
//!                                      ↘ listing (search / tags / expand)
//! ```
//!
//! - [`fetcher`]: HTTP access, one JSON request at a time
//! - [`normalizer`]: category descriptors and posts into typed entities
//! - [`hook`]: one-shot `{data, loading, error}` fetch state
//! - [`listing`]: pure filtering over fetched posts
//!
//! ## Quick Start
//!
//! ```bash
//! # Point at a site
//! export PRESSWIRE_BASE_URL=https://public-api.wordpress.com
//! export PRESSWIRE_SITE=example.wordpress.com
//!
//! # Fetch the hero section
//! presswire section hero
//!
//! # List posts tagged react or css
//! presswire posts --tag react --tag css
//! ```

/// Content client and error types.
///
/// [`ContentClient`](app::ContentClient) wires the fetcher to the normalizers
/// for one content source.
pub mod app;

/// Command-line interface using clap.
///
/// - `status` - Show whether a source is configured
/// - `section <name>` - Fetch a section's fetch state
/// - `post <slug>` - Fetch one post
/// - `posts` - List posts through the filters
pub mod cli;

/// Configuration file, HTTP settings and the process-wide content source.
pub mod config;

/// Core domain models.
///
/// - [`Post`](domain::Post): a normalized blog post
/// - [`Section`](domain::Section): the seven site sections and their payloads
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for JSON fetching
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// One-shot fetch state for the presentation layer.
pub mod hook;

/// Search, tag filtering and row expansion for the posts page.
pub mod listing;

/// Parsing and normalization of CMS records.
pub mod normalizer;
