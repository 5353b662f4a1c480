use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use url::Url;

use crate::app::error::{PresswireError, Result};
use crate::config::{Config, SourceConfig};
use crate::domain::{Post, Section};
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::normalizer::{parse_section, PostNormalizer};

/// Wires the fetcher to the normalizers for one content source.
pub struct ContentClient {
    source: SourceConfig,
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    normalizer: PostNormalizer,
    requests: AtomicU64,
}

impl ContentClient {
    /// Client for the process-wide source, using the HTTP settings in `config`.
    pub fn new(config: &Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(&config.http)?);
        Ok(Self::with_fetcher(
            SourceConfig::global().clone(),
            fetcher,
            PostNormalizer::new(config.reading.words_per_minute),
        ))
    }

    pub fn with_fetcher(
        source: SourceConfig,
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        normalizer: PostNormalizer,
    ) -> Self {
        Self {
            source,
            fetcher,
            normalizer,
            requests: AtomicU64::new(0),
        }
    }

    pub fn source(&self) -> &SourceConfig {
        &self.source
    }

    pub fn is_configured(&self) -> bool {
        self.source.is_configured()
    }

    /// Number of requests this client has sent.
    pub fn request_count(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    /// Fetch and decode one section's payload from its category descriptor.
    pub async fn section<S: Section>(&self) -> Result<S::Payload> {
        let url = self.categories_url(S::DESCRIPTOR.slug)?;
        let records = self.fetch(&url).await?;
        parse_section::<S>(&records)
    }

    /// Fetch a single post by slug with its embedded relations.
    pub async fn post(&self, slug: &str) -> Result<Post> {
        let mut url = self.posts_endpoint()?;
        url.query_pairs_mut()
            .append_pair("slug", slug)
            .append_key_only("_embed");

        let records = self.fetch(&url).await?;
        self.normalizer.normalize_by_slug(&records, slug)
    }

    /// Fetch the most recent posts with their embedded relations.
    pub async fn posts(&self, per_page: u32) -> Result<Vec<Post>> {
        let mut url = self.posts_endpoint()?;
        url.query_pairs_mut()
            .append_key_only("_embed")
            .append_pair("per_page", &per_page.to_string());

        let records = self.fetch(&url).await?;
        Ok(self.normalizer.normalize_all(&records))
    }

    fn categories_url(&self, slug: &str) -> Result<Url> {
        let base = self.source.base_url().ok_or(PresswireError::NotConfigured)?;
        let mut url = Url::parse(&format!("{}/wp-json/wp/v2/categories", base))?;
        url.query_pairs_mut().append_pair("slug", slug);
        Ok(url)
    }

    fn posts_endpoint(&self) -> Result<Url> {
        let base = self.source.base_url().ok_or(PresswireError::NotConfigured)?;
        let site = self.source.site().ok_or(PresswireError::NotConfigured)?;
        Ok(Url::parse(&format!("{}/wp/v2/sites/{}/posts", base, site))?)
    }

    async fn fetch(&self, url: &Url) -> Result<serde_json::Value> {
        self.requests.fetch_add(1, Ordering::Relaxed);
        self.fetcher.fetch_json(url.as_str()).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::Value;

    use super::*;

    /// Serves canned JSON by URL and remembers what was asked for.
    #[derive(Default)]
    pub struct StaticFetcher {
        responses: HashMap<String, Value>,
        pub seen: Mutex<Vec<String>>,
    }

    impl StaticFetcher {
        pub fn with(mut self, url: &str, body: Value) -> Self {
            self.responses.insert(url.to_string(), body);
            self
        }
    }

    #[async_trait]
    impl Fetcher for StaticFetcher {
        async fn fetch_json(&self, url: &str) -> Result<Value> {
            self.seen.lock().unwrap().push(url.to_string());
            self.responses
                .get(url)
                .cloned()
                .ok_or_else(|| PresswireError::Network(format!("connection refused: {}", url)))
        }
    }

    pub fn client(fetcher: StaticFetcher) -> (ContentClient, Arc<StaticFetcher>) {
        let fetcher = Arc::new(fetcher);
        let client = ContentClient::with_fetcher(
            SourceConfig::new("https://cms.test/", Some("blog.test".into())),
            fetcher.clone(),
            PostNormalizer::default(),
        );
        (client, fetcher)
    }
}
