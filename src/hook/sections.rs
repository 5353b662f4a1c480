use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;
use tokio::task::JoinHandle;

use crate::app::ContentClient;
use crate::domain::{
    AboutSection, CommentsPageSection, ContactSection, FooterSection, HeroSection, Post,
    PostsPageSection, Section, SocialSection,
};
use crate::hook::{FetchHook, FetchState};

/// Fetch state for one site section, exposed under the section's field name.
pub struct SectionHook<S: Section> {
    inner: FetchHook<S::Data>,
    _section: PhantomData<fn() -> S>,
}

pub type SocialMediaHook = SectionHook<SocialSection>;
pub type HeroHook = SectionHook<HeroSection>;
pub type AboutHook = SectionHook<AboutSection>;
pub type FooterHook = SectionHook<FooterSection>;
pub type PostsPageHook = SectionHook<PostsPageSection>;
pub type CommentsPageHook = SectionHook<CommentsPageSection>;
pub type ContactHook = SectionHook<ContactSection>;

impl<S: Section> Default for SectionHook<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Section> SectionHook<S> {
    pub fn new() -> Self {
        Self {
            inner: FetchHook::new(),
            _section: PhantomData,
        }
    }

    pub fn activate(&self, client: Arc<ContentClient>) -> Option<JoinHandle<()>> {
        self.inner.activate(move || async move {
            client.section::<S>().await.map(Into::into)
        })
    }

    pub fn state(&self) -> FetchState<S::Data> {
        self.inner.state()
    }

    pub fn field(&self) -> &'static str {
        S::DESCRIPTOR.field
    }

    pub fn to_json(&self) -> Value {
        self.state().to_json(self.field())
    }
}

/// Fetch state for a single post looked up by slug.
pub struct PostHook {
    slug: String,
    inner: FetchHook<Option<Post>>,
}

impl PostHook {
    pub const FIELD: &'static str = "post";

    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            inner: FetchHook::new(),
        }
    }

    pub fn activate(&self, client: Arc<ContentClient>) -> Option<JoinHandle<()>> {
        let slug = self.slug.clone();
        self.inner
            .activate(move || async move { client.post(&slug).await.map(Some) })
    }

    pub fn state(&self) -> FetchState<Option<Post>> {
        self.inner.state()
    }

    pub fn to_json(&self) -> Value {
        self.state().to_json(Self::FIELD)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::app::context::testing::{client, StaticFetcher};

    fn category_url(slug: &str) -> String {
        format!("https://cms.test/wp-json/wp/v2/categories?slug={}", slug)
    }

    fn described(payload: &str) -> Value {
        json!([{ "name": "x", "description": payload }])
    }

    #[tokio::test]
    async fn test_social_hook_exposes_social_media_field() {
        let (client, _) = client(StaticFetcher::default().with(
            &category_url("social-media"),
            described(r#"{"socials":[{"platform":"github","url":"https://github.com/me"}]}"#),
        ));
        let hook = SocialMediaHook::new();

        assert_eq!(
            hook.to_json(),
            json!({ "socialMedia": [], "loading": false, "error": null })
        );

        hook.activate(Arc::new(client)).unwrap().await.unwrap();
        assert_eq!(
            hook.to_json(),
            json!({
                "socialMedia": [{ "platform": "github", "url": "https://github.com/me" }],
                "loading": false,
                "error": null
            })
        );
    }

    #[tokio::test]
    async fn test_hero_hook_error() {
        let (client, _) = client(StaticFetcher::default().with(&category_url("hero"), json!([])));
        let hook = HeroHook::new();
        hook.activate(Arc::new(client)).unwrap().await.unwrap();

        let state = hook.state();
        assert_eq!(state.data, None);
        assert_eq!(state.error.as_deref(), Some("Hero category not found"));
        assert_eq!(hook.field(), "heroData");
    }

    #[tokio::test]
    async fn test_hook_fetches_once_across_redraws() {
        let (client, fetcher) = client(StaticFetcher::default().with(
            &category_url("contact"),
            described(r#"{"email":"me@example.com"}"#),
        ));
        let client = Arc::new(client);
        let hook = ContactHook::new();

        let handle = hook.activate(client.clone()).unwrap();
        for _ in 0..3 {
            assert!(hook.activate(client.clone()).is_none());
        }
        handle.await.unwrap();

        assert_eq!(client.request_count(), 1);
        assert_eq!(fetcher.seen.lock().unwrap().len(), 1);
        assert_eq!(
            hook.state().data.and_then(|c| c.email).as_deref(),
            Some("me@example.com")
        );
    }

    #[tokio::test]
    async fn test_every_section_reports_invalid_json() {
        let mut fetcher = StaticFetcher::default();
        for descriptor in crate::domain::SECTIONS {
            fetcher = fetcher.with(&category_url(descriptor.slug), described("{oops"));
        }
        let (client, _) = client(fetcher);
        let client = Arc::new(client);

        let social = SocialMediaHook::new();
        let hero = HeroHook::new();
        let about = AboutHook::new();
        let footer = FooterHook::new();
        let posts_page = PostsPageHook::new();
        let comments_page = CommentsPageHook::new();
        let contact = ContactHook::new();

        let handles: Vec<_> = [
            social.activate(client.clone()),
            hero.activate(client.clone()),
            about.activate(client.clone()),
            footer.activate(client.clone()),
            posts_page.activate(client.clone()),
            comments_page.activate(client.clone()),
            contact.activate(client.clone()),
        ]
        .into_iter()
        .flatten()
        .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let errors = [
            social.state().error,
            hero.state().error,
            about.state().error,
            footer.state().error,
            posts_page.state().error,
            comments_page.state().error,
            contact.state().error,
        ];
        for error in errors {
            assert!(error.unwrap().contains("Invalid JSON"));
        }
        assert_eq!(posts_page.field(), "meta");
        assert_eq!(comments_page.field(), "meta");
    }

    #[tokio::test]
    async fn test_post_hook() {
        let url = "https://cms.test/wp/v2/sites/blog.test/posts?slug=hello&_embed";
        let (client, _) = client(StaticFetcher::default().with(
            url,
            json!([{ "id": 3, "slug": "hello", "title": { "rendered": "Hello" } }]),
        ));
        let hook = PostHook::new("hello");
        hook.activate(Arc::new(client)).unwrap().await.unwrap();

        let post = hook.state().data.unwrap();
        assert_eq!(post.id, 3);
        assert_eq!(post.author, "Someone");
        assert_eq!(hook.to_json()["post"]["slug"], "hello");
    }

    #[tokio::test]
    async fn test_post_hook_network_error() {
        let (client, _) = client(StaticFetcher::default());
        let hook = PostHook::new("gone");
        hook.activate(Arc::new(client)).unwrap().await.unwrap();

        let state = hook.state();
        assert!(state.data.is_none());
        assert!(state.error.unwrap().starts_with("connection refused"));
    }
}
