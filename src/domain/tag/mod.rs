pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::Tag;
pub use repository::TagRepository;
pub use value_objects::{MAX_TAGS_PER_ARTICLE, TagContent, TagId, TagList};
