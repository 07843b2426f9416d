pub mod draft;
pub mod entity;
pub mod repository;
pub mod services;
pub mod slug;
pub mod value_objects;

pub use draft::Draft;
pub use entity::{Article, ArticleRef, ArticleUpdate, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use slug::generate_slug;
pub use value_objects::{ArticleContent, ArticleId, ArticleSlug, ArticleTitle, MAX_TITLE_LENGTH};
