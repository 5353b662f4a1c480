//! The seven site sections served from category descriptors.
//!
//! Every section is one row of [`SECTIONS`] plus a marker type implementing
//! [`Section`]. The parser and the fetch hook are generic over the marker,
//! so adding a section means adding a row, a payload type and a marker.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Top-level JSON shape a section's payload must have once unwrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    List,
    Object,
}

impl Shape {
    pub fn accepts(self, value: &serde_json::Value) -> bool {
        match self {
            Shape::List => value.is_array(),
            Shape::Object => value.is_object(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct SectionDescriptor {
    /// Category slug holding the payload
    pub slug: &'static str,
    /// Capitalized name, used in "not found" messages
    pub title: &'static str,
    /// Lowercase name, used in every other message
    pub noun: &'static str,
    /// Field name the fetch hook exposes its data under
    pub field: &'static str,
    /// Key the payload may arrive nested under
    pub wrapper: Option<&'static str>,
    pub shape: Shape,
}

pub const SOCIAL_MEDIA: SectionDescriptor = SectionDescriptor {
    slug: "social-media",
    title: "Social media",
    noun: "social media",
    field: "socialMedia",
    wrapper: Some("socials"),
    shape: Shape::List,
};

pub const HERO: SectionDescriptor = SectionDescriptor {
    slug: "hero",
    title: "Hero",
    noun: "hero",
    field: "heroData",
    wrapper: None,
    shape: Shape::Object,
};

pub const ABOUT: SectionDescriptor = SectionDescriptor {
    slug: "about",
    title: "About",
    noun: "about",
    field: "aboutData",
    wrapper: None,
    shape: Shape::Object,
};

pub const FOOTER: SectionDescriptor = SectionDescriptor {
    slug: "footer",
    title: "Footer",
    noun: "footer",
    field: "footerData",
    wrapper: Some("footer"),
    shape: Shape::Object,
};

pub const POSTS_PAGE: SectionDescriptor = SectionDescriptor {
    slug: "posts-page",
    title: "Posts page",
    noun: "posts page",
    field: "meta",
    wrapper: None,
    shape: Shape::Object,
};

pub const COMMENTS_PAGE: SectionDescriptor = SectionDescriptor {
    slug: "comments-page",
    title: "Comments page",
    noun: "comments page",
    field: "meta",
    wrapper: None,
    shape: Shape::Object,
};

pub const CONTACT: SectionDescriptor = SectionDescriptor {
    slug: "contact",
    title: "Contact",
    noun: "contact",
    field: "contactData",
    wrapper: None,
    shape: Shape::Object,
};

pub const SECTIONS: [&SectionDescriptor; 7] = [
    &SOCIAL_MEDIA,
    &HERO,
    &ABOUT,
    &FOOTER,
    &POSTS_PAGE,
    &COMMENTS_PAGE,
    &CONTACT,
];

impl SectionDescriptor {
    pub fn by_slug(slug: &str) -> Option<&'static SectionDescriptor> {
        SECTIONS.iter().copied().find(|d| d.slug == slug)
    }
}

/// A site section whose content lives in a category descriptor.
pub trait Section: Send + Sync + 'static {
    /// The validated payload decoded from the descriptor.
    type Payload: DeserializeOwned + Serialize + Clone + Send + Sync + 'static;

    /// What a fetch hook holds: the payload, or an empty value before it
    /// arrives.
    type Data: From<Self::Payload> + Default + Serialize + Clone + Send + Sync + 'static;

    const DESCRIPTOR: &'static SectionDescriptor;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkButton {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub primary_button: Option<LinkButton>,
    #[serde(default)]
    pub secondary_button: Option<LinkButton>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubLink {
    pub url: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Footer {
    pub text: Option<String>,
    pub links: Vec<FooterLink>,
    pub github: Option<GithubLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostsPageMeta {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsPageMeta {
    pub title: Option<String>,
    pub guidelines: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

pub struct SocialSection;
pub struct HeroSection;
pub struct AboutSection;
pub struct FooterSection;
pub struct PostsPageSection;
pub struct CommentsPageSection;
pub struct ContactSection;

impl Section for SocialSection {
    type Payload = Vec<SocialLink>;
    type Data = Vec<SocialLink>;
    const DESCRIPTOR: &'static SectionDescriptor = &SOCIAL_MEDIA;
}

impl Section for HeroSection {
    type Payload = Hero;
    type Data = Option<Hero>;
    const DESCRIPTOR: &'static SectionDescriptor = &HERO;
}

impl Section for AboutSection {
    type Payload = About;
    type Data = Option<About>;
    const DESCRIPTOR: &'static SectionDescriptor = &ABOUT;
}

impl Section for FooterSection {
    type Payload = Footer;
    type Data = Option<Footer>;
    const DESCRIPTOR: &'static SectionDescriptor = &FOOTER;
}

impl Section for PostsPageSection {
    type Payload = PostsPageMeta;
    type Data = Option<PostsPageMeta>;
    const DESCRIPTOR: &'static SectionDescriptor = &POSTS_PAGE;
}

impl Section for CommentsPageSection {
    type Payload = CommentsPageMeta;
    type Data = Option<CommentsPageMeta>;
    const DESCRIPTOR: &'static SectionDescriptor = &COMMENTS_PAGE;
}

impl Section for ContactSection {
    type Payload = Contact;
    type Data = Option<Contact>;
    const DESCRIPTOR: &'static SectionDescriptor = &CONTACT;
}
