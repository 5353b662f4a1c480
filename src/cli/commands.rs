use std::sync::Arc;

use serde_json::Value;
use tokio::task::JoinHandle;

use crate::app::{ContentClient, PresswireError, Result};
use crate::domain::{
    AboutSection, CommentsPageSection, ContactSection, FooterSection, HeroSection,
    PostsPageSection, Section, SectionDescriptor, SocialSection, SECTIONS,
};
use crate::hook::{PostHook, SectionHook};
use crate::listing::PostListing;
use crate::normalizer::decode_html_entities;
use crate::normalizer::entities::strip_tags;

pub fn status(client: &ContentClient) {
    let source = client.source();
    match source.base_url() {
        Some(base_url) => {
            println!("Content source: {}", base_url);
            match source.site() {
                Some(site) => println!("Site: {}", site),
                None => println!("Site: (not set, posts are unavailable)"),
            }
        }
        None => print_not_configured(),
    }
}

pub async fn show_section(client: Arc<ContentClient>, name: &str) -> Result<()> {
    let descriptor = SectionDescriptor::by_slug(name).ok_or_else(|| {
        let known: Vec<&str> = SECTIONS.iter().map(|d| d.slug).collect();
        PresswireError::Config(format!(
            "Unknown section \"{}\" (expected one of: {})",
            name,
            known.join(", ")
        ))
    })?;

    if !client.is_configured() {
        print_not_configured();
        return Ok(());
    }

    let state = section_state(descriptor, client).await?;
    print_json(&state);
    Ok(())
}

async fn section_state(
    descriptor: &SectionDescriptor,
    client: Arc<ContentClient>,
) -> Result<Value> {
    match descriptor {
        d if d == SocialSection::DESCRIPTOR => run_section::<SocialSection>(client).await,
        d if d == HeroSection::DESCRIPTOR => run_section::<HeroSection>(client).await,
        d if d == AboutSection::DESCRIPTOR => run_section::<AboutSection>(client).await,
        d if d == FooterSection::DESCRIPTOR => run_section::<FooterSection>(client).await,
        d if d == PostsPageSection::DESCRIPTOR => run_section::<PostsPageSection>(client).await,
        d if d == CommentsPageSection::DESCRIPTOR => {
            run_section::<CommentsPageSection>(client).await
        }
        d if d == ContactSection::DESCRIPTOR => run_section::<ContactSection>(client).await,
        d => Err(PresswireError::Config(format!(
            "Section \"{}\" has no handler",
            d.slug
        ))),
    }
}

pub async fn show_post(client: Arc<ContentClient>, slug: &str) -> Result<()> {
    if !client.is_configured() {
        print_not_configured();
        return Ok(());
    }

    if client.source().site().is_none() {
        print_site_missing();
        return Ok(());
    }

    let hook = PostHook::new(slug);
    wait(hook.activate(client)).await?;
    print_json(&hook.to_json());
    Ok(())
}

pub async fn list_posts(
    client: &ContentClient,
    search: Option<&str>,
    tags: &[String],
    expand: &[u64],
    per_page: u32,
) -> Result<()> {
    if !client.is_configured() {
        print_not_configured();
        return Ok(());
    }

    if client.source().site().is_none() {
        print_site_missing();
        return Ok(());
    }

    let posts = client.posts(per_page).await?;
    tracing::info!("Fetched {} posts", posts.len());

    let mut listing = PostListing::new(posts);
    if let Some(search) = search {
        listing.filter.set_search(search);
    }
    for tag in tags {
        listing.filter.toggle_tag(tag);
    }
    for id in expand {
        listing.filter.toggle_expanded(*id);
    }

    let all_tags = listing.tags();
    if !all_tags.is_empty() {
        let labels: Vec<String> = all_tags
            .iter()
            .map(|tag| {
                if listing.filter.is_tag_selected(tag) {
                    format!("[{}]", tag)
                } else {
                    tag.clone()
                }
            })
            .collect();
        println!("Tags: {}", labels.join(" "));
    }

    let rows = listing.rows();
    if rows.is_empty() {
        println!("No posts");
        return Ok(());
    }

    for row in rows {
        let post = row.post;
        let date = post
            .published_on()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "          ".to_string());
        let marker = if row.expanded { "-" } else { "+" };

        println!(
            "{} {} {} ({}, {}) #{}",
            marker,
            date,
            plain_text(&post.title),
            post.author,
            post.read_time,
            post.id
        );
        if let Some(excerpt) = row.excerpt() {
            println!("    {}", plain_text(excerpt));
        }
    }

    Ok(())
}

async fn run_section<S: Section>(client: Arc<ContentClient>) -> Result<Value> {
    let hook = SectionHook::<S>::new();
    wait(hook.activate(client)).await?;
    Ok(hook.to_json())
}

async fn wait(handle: Option<JoinHandle<()>>) -> Result<()> {
    if let Some(handle) = handle {
        handle
            .await
            .map_err(|e| PresswireError::Failure(Some(e.to_string())))?;
    }
    Ok(())
}

fn plain_text(html: &str) -> String {
    let text = decode_html_entities(Some(&strip_tags(html)));
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("Could not render output: {}", e),
    }
}

fn print_not_configured() {
    println!(
        "Content source is not configured. Set [source].base_url in the config file, \
         PRESSWIRE_BASE_URL, or pass --base-url."
    );
}

fn print_site_missing() {
    println!(
        "No site is configured, so posts are unavailable. Set [source].site in the \
         config file, PRESSWIRE_SITE, or pass --site."
    );
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::app::context::testing::{client, StaticFetcher};
    use crate::config::SourceConfig;
    use crate::domain::Shape;
    use crate::normalizer::PostNormalizer;

    fn without_site(fetcher: Arc<StaticFetcher>) -> ContentClient {
        ContentClient::with_fetcher(
            SourceConfig::new("https://cms.test/", None),
            fetcher,
            PostNormalizer::default(),
        )
    }

    #[tokio::test]
    async fn test_posts_without_site_is_informational() {
        let fetcher = Arc::new(StaticFetcher::default());
        let client = without_site(fetcher.clone());

        assert!(client.is_configured());
        assert!(list_posts(&client, None, &[], &[], 20).await.is_ok());
        assert!(show_post(Arc::new(client), "hello").await.is_ok());
        assert!(fetcher.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_every_section_dispatches_to_its_own_hook() {
        let mut fetcher = StaticFetcher::default();
        for descriptor in SECTIONS {
            let url = format!(
                "https://cms.test/wp-json/wp/v2/categories?slug={}",
                descriptor.slug
            );
            fetcher = fetcher.with(&url, json!([]));
        }
        let (client, fetcher) = client(fetcher);
        let client = Arc::new(client);

        for descriptor in SECTIONS {
            let state = section_state(descriptor, client.clone()).await.unwrap();
            assert_eq!(
                state["error"],
                format!("{} category not found", descriptor.title)
            );
            assert!(state.get(descriptor.field).is_some());
        }
        assert_eq!(fetcher.seen.lock().unwrap().len(), SECTIONS.len());
    }

    #[tokio::test]
    async fn test_section_without_handler_is_rejected() {
        static NEWSLETTER: SectionDescriptor = SectionDescriptor {
            slug: "newsletter",
            title: "Newsletter",
            noun: "newsletter",
            field: "newsletterData",
            wrapper: None,
            shape: Shape::Object,
        };
        let (client, fetcher) = client(StaticFetcher::default());

        let err = section_state(&NEWSLETTER, Arc::new(client)).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Section \"newsletter\" has no handler"
        );
        assert!(fetcher.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(
            plain_text("<p>Fish &amp; <em>chips</em></p>\n<p>again</p>"),
            "Fish & chips again"
        );
    }
}
