pub mod post;
pub mod section;

pub use post::{Post, DEFAULT_AUTHOR};
pub use section::{
    About, AboutSection, CommentsPageMeta, CommentsPageSection, Contact, ContactSection, Footer,
    FooterLink, FooterSection, GithubLink, Hero, HeroSection, LinkButton, PostsPageMeta,
    PostsPageSection, Section, SectionDescriptor, Shape, SocialLink, SocialSection, SECTIONS,
};
