pub mod category;
pub mod entities;
pub mod post;

pub use category::{parse_section, CategoryDescriptor};
pub use entities::decode_html_entities;
pub use post::{PostNormalizer, DEFAULT_WORDS_PER_MINUTE};
