//! Search, tag filtering and row expansion over an in-memory post list.
//!
//! Nothing here touches the network; it runs on posts that have already
//! been fetched and normalized.

use std::collections::HashSet;

use crate::domain::Post;
use crate::normalizer::decode_html_entities;
use crate::normalizer::entities::strip_tags;

/// What the reader has typed, picked and expanded on the posts page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_text: String,
    /// Selected tags in selection order
    pub selected_tags: Vec<String>,
    pub expanded_post_ids: HashSet<u64>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn clear_search(&mut self) {
        self.search_text.clear();
    }

    /// Select the tag if it isn't selected, deselect it if it is.
    /// Returns whether the tag is selected afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if let Some(pos) = self.selected_tags.iter().position(|t| t == tag) {
            self.selected_tags.remove(pos);
            false
        } else {
            self.selected_tags.push(tag.to_string());
            true
        }
    }

    pub fn is_tag_selected(&self, tag: &str) -> bool {
        self.selected_tags.iter().any(|t| t == tag)
    }

    /// Returns whether the row is expanded afterwards.
    pub fn toggle_expanded(&mut self, post_id: u64) -> bool {
        if self.expanded_post_ids.remove(&post_id) {
            false
        } else {
            self.expanded_post_ids.insert(post_id);
            true
        }
    }

    pub fn is_expanded(&self, post_id: u64) -> bool {
        self.expanded_post_ids.contains(&post_id)
    }
}

/// Every tag used by any post, once each, in first-seen order.
pub fn unique_tags(posts: &[Post]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in posts.iter().flat_map(|p| p.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// Case-insensitive substring match on the visible text of the title or
/// excerpt. Markup is never matched.
pub fn matches_search(post: &Post, search_text: &str) -> bool {
    let needle = search_text.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    searchable_text(&post.title).contains(&needle)
        || searchable_text(&post.excerpt).contains(&needle)
}

fn searchable_text(html: &str) -> String {
    let text = decode_html_entities(Some(&strip_tags(html))).to_lowercase();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True when nothing is selected or the post has any selected tag.
pub fn matches_tags(post: &Post, selected_tags: &[String]) -> bool {
    selected_tags.is_empty() || selected_tags.iter().any(|tag| post.has_tag(tag))
}

pub fn visible_posts<'a>(posts: &'a [Post], filter: &FilterState) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|post| {
            matches_search(post, &filter.search_text) && matches_tags(post, &filter.selected_tags)
        })
        .collect()
}

/// A visible post together with its expansion state.
#[derive(Debug, Clone, Copy)]
pub struct ListingRow<'a> {
    pub post: &'a Post,
    pub expanded: bool,
}

impl<'a> ListingRow<'a> {
    /// The excerpt, only while the row is expanded.
    pub fn excerpt(&self) -> Option<&'a str> {
        self.expanded.then_some(self.post.excerpt.as_str())
    }
}

pub fn rows<'a>(posts: &'a [Post], filter: &FilterState) -> Vec<ListingRow<'a>> {
    visible_posts(posts, filter)
        .into_iter()
        .map(|post| ListingRow {
            post,
            expanded: filter.is_expanded(post.id),
        })
        .collect()
}

/// A posts page: the fetched collection plus the reader's filter.
#[derive(Debug, Clone, Default)]
pub struct PostListing {
    posts: Vec<Post>,
    pub filter: FilterState,
}

impl PostListing {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            filter: FilterState::default(),
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Swap in a fresh collection, keeping search and tags but dropping
    /// expansion for posts that are gone.
    pub fn replace_posts(&mut self, posts: Vec<Post>) {
        let ids: HashSet<u64> = posts.iter().map(|p| p.id).collect();
        self.filter.expanded_post_ids.retain(|id| ids.contains(id));
        self.posts = posts;
    }

    pub fn tags(&self) -> Vec<String> {
        unique_tags(&self.posts)
    }

    pub fn visible(&self) -> Vec<&Post> {
        visible_posts(&self.posts, &self.filter)
    }

    pub fn rows(&self) -> Vec<ListingRow<'_>> {
        rows(&self.posts, &self.filter)
    }
}
