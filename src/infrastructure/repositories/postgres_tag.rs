// src/infrastructure/repositories/postgres_tag.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::tag::{Tag, TagContent, TagId, TagRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    id: i64,
    content: String,
}

impl From<TagRow> for Tag {
    fn from(row: TagRow) -> Self {
        Tag {
            id: TagId(row.id),
            content: TagContent::from_stored(row.content),
        }
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn list(&self) -> DomainResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagRow>(
            "SELECT id, content FROM article_tags ORDER BY content ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Tag::from).collect())
    }

    async fn find_by_content(&self, content: &TagContent) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TagRow>(
            "SELECT id, content FROM article_tags WHERE content = $1",
        )
        .bind(content.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Tag::from))
    }

    async fn insert(&self, content: TagContent) -> DomainResult<Tag> {
        let row = sqlx::query_as::<_, TagRow>(
            "INSERT INTO article_tags (content) VALUES ($1) RETURNING id, content",
        )
        .bind(String::from(content))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(Tag::from(row))
    }

    async fn ensure(&self, contents: &[TagContent]) -> DomainResult<()> {
        if contents.is_empty() {
            return Ok(());
        }
        let values: Vec<String> = contents.iter().map(|tag| tag.as_str().to_string()).collect();

        sqlx::query(
            "INSERT INTO article_tags (content)
             SELECT DISTINCT t FROM unnest($1::text[]) AS t
             WHERE NOT EXISTS (SELECT 1 FROM article_tags WHERE content = t)",
        )
        .bind(values)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }
}
