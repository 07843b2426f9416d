// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_comment;
mod postgres_tag;

pub(crate) use error::{map_sqlx, map_sqlx_delete};
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_tag::PostgresTagRepository;
