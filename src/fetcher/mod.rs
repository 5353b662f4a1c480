pub mod http_fetcher;

use async_trait::async_trait;
use serde_json::Value;

use crate::app::Result;

pub use http_fetcher::HttpFetcher;

/// Single point of network access.
///
/// One request per call. No retries, no caching. Failures come back as
/// [`PresswireError::Network`](crate::app::PresswireError::Network) with the
/// transport's own message.
#[async_trait]
pub trait Fetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value>;
}
