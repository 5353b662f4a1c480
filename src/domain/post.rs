use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Author shown when a post carries no embedded author.
pub const DEFAULT_AUTHOR: &str = "Someone";

/// A normalized blog post.
///
/// `title`, `content` and `excerpt` are the CMS's rendered HTML, untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub slug: String,
    pub date: String,
    pub modified: String,
    pub author: String,
    pub author_avatar: Option<String>,
    pub featured_image: Option<String>,
    /// Category names, deduplicated in first-seen order
    pub categories: Vec<String>,
    /// Tag names, deduplicated in first-seen order
    pub tags: Vec<String>,
    pub read_time: String,
}

impl Post {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Publication day, if `date` is a WordPress or RFC 3339 timestamp.
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDateTime::parse_from_str(&self.date, "%Y-%m-%dT%H:%M:%S")
            .map(|dt| dt.date())
            .or_else(|_| DateTime::parse_from_rfc3339(&self.date).map(|dt| dt.date_naive()))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_dated(date: &str) -> Post {
        Post {
            id: 1,
            title: "Title".into(),
            content: String::new(),
            excerpt: String::new(),
            slug: "title".into(),
            date: date.into(),
            modified: date.into(),
            author: DEFAULT_AUTHOR.into(),
            author_avatar: None,
            featured_image: None,
            categories: Vec::new(),
            tags: vec!["rust".into()],
            read_time: "0 min read".into(),
        }
    }

    #[test]
    fn test_published_on_wordpress_format() {
        let post = post_dated("2024-03-05T10:20:30");
        assert_eq!(post.published_on(), NaiveDate::from_ymd_opt(2024, 3, 5));
    }

    #[test]
    fn test_published_on_rfc3339() {
        let post = post_dated("2024-03-05T23:20:30+00:00");
        assert_eq!(post.published_on(), NaiveDate::from_ymd_opt(2024, 3, 5));
    }

    #[test]
    fn test_published_on_garbage() {
        assert_eq!(post_dated("yesterday").published_on(), None);
    }

    #[test]
    fn test_has_tag() {
        let post = post_dated("2024-03-05T10:20:30");
        assert!(post.has_tag("rust"));
        assert!(!post.has_tag("Rust"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(post_dated("2024-03-05T10:20:30")).unwrap();
        assert!(json.get("authorAvatar").is_some());
        assert!(json.get("readTime").is_some());
        assert!(json.get("featuredImage").is_some());
    }
}
