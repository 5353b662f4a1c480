use serde_json::Value;

use crate::app::{PresswireError, Result};
use crate::domain::{Post, DEFAULT_AUTHOR};
use crate::normalizer::entities::{decode_html_entities, strip_tags};

pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

/// Flattens WordPress post records (fetched with `_embed`) into [`Post`]s.
#[derive(Debug, Clone, Copy)]
pub struct PostNormalizer {
    words_per_minute: usize,
}

impl Default for PostNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS_PER_MINUTE)
    }
}

impl PostNormalizer {
    pub fn new(words_per_minute: usize) -> Self {
        Self {
            words_per_minute: words_per_minute.max(1),
        }
    }

    /// The post a slug query returned.
    pub fn normalize_by_slug(&self, records: &Value, slug: &str) -> Result<Post> {
        records
            .as_array()
            .and_then(|list| list.first())
            .map(|record| self.normalize(record))
            .ok_or_else(|| PresswireError::PostNotFound(slug.to_string()))
    }

    /// Every post in a collection response. Non-list bodies yield nothing.
    pub fn normalize_all(&self, records: &Value) -> Vec<Post> {
        records
            .as_array()
            .map(|list| list.iter().map(|record| self.normalize(record)).collect())
            .unwrap_or_default()
    }

    /// Never fails: missing fields and relations fall back to defaults.
    pub fn normalize(&self, record: &Value) -> Post {
        let content = rendered(record, "content");
        let (categories, tags) = embedded_terms(record);

        Post {
            id: record.get("id").and_then(Value::as_u64).unwrap_or_default(),
            title: rendered(record, "title"),
            read_time: self.read_time(&content),
            content,
            excerpt: rendered(record, "excerpt"),
            slug: string_at(record, "/slug").unwrap_or_default(),
            date: string_at(record, "/date").unwrap_or_default(),
            modified: string_at(record, "/modified").unwrap_or_default(),
            author: string_at(record, "/_embedded/author/0/name")
                .map(|name| decode_html_entities(Some(&name)))
                .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            author_avatar: author_avatar(record),
            featured_image: string_at(record, "/_embedded/wp:featuredmedia/0/source_url"),
            categories,
            tags,
        }
    }

    /// `"<n> min read"`, rounding any partial minute up.
    pub fn read_time(&self, html: &str) -> String {
        let words = word_count(html);
        format!("{} min read", words.div_ceil(self.words_per_minute))
    }
}

pub fn word_count(html: &str) -> usize {
    strip_tags(html).split_whitespace().count()
}

fn string_at(record: &Value, pointer: &str) -> Option<String> {
    record
        .pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn rendered(record: &Value, field: &str) -> String {
    string_at(record, &format!("/{}/rendered", field)).unwrap_or_default()
}

/// The largest avatar WordPress offers (`avatar_urls` is keyed by pixel size).
fn author_avatar(record: &Value) -> Option<String> {
    record
        .pointer("/_embedded/author/0/avatar_urls")
        .and_then(Value::as_object)?
        .iter()
        .filter_map(|(size, url)| Some((size.parse::<u32>().ok()?, url.as_str()?)))
        .max_by_key(|(size, _)| *size)
        .map(|(_, url)| url.to_string())
}

/// Categories and tags from every embedded taxonomy group.
fn embedded_terms(record: &Value) -> (Vec<String>, Vec<String>) {
    let mut categories = Vec::new();
    let mut tags = Vec::new();

    let groups = record
        .pointer("/_embedded/wp:term")
        .and_then(Value::as_array);

    for term in groups.into_iter().flatten().filter_map(Value::as_array).flatten() {
        let Some(name) = term.get("name").and_then(Value::as_str) else {
            continue;
        };
        let target = match term.get("taxonomy").and_then(Value::as_str) {
            Some("category") => &mut categories,
            Some("post_tag") => &mut tags,
            _ => continue,
        };
        let name = decode_html_entities(Some(name));
        if !target.contains(&name) {
            target.push(name);
        }
    }

    (categories, tags)
}
