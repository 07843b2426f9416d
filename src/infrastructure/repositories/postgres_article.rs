// src/infrastructure/repositories/postgres_article.rs
use super::{map_sqlx, map_sqlx_delete};
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleSlug, ArticleTitle,
    ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tag::TagContent;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const ARTICLE_COLUMNS: &str =
    "id, title, content, slug, author_id, author_name, tags, created_at";

/// Newest first; `id` breaks ties between rows created in the same instant.
const NEWEST_FIRST: &str = " ORDER BY created_at DESC, id DESC";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    slug: Option<String>,
    author_id: Uuid,
    author_name: Option<String>,
    tags: Option<Vec<String>>,
    created_at: DateTime<Utc>,
}

/// Rows are shared with other clients, so stored values are taken as they
/// are; the write-side rules only apply to what this service stores.
impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Article {
            id: ArticleId(row.id),
            title: ArticleTitle::from_stored(row.title),
            content: ArticleContent::from_stored(row.content),
            slug: row.slug.and_then(ArticleSlug::from_stored),
            author_id: UserId(row.author_id),
            author_name: row.author_name,
            tags: row
                .tags
                .unwrap_or_default()
                .into_iter()
                .map(TagContent::from_stored)
                .collect(),
            created_at: row.created_at,
        }
    }
}

fn tag_strings(tags: Vec<TagContent>) -> Vec<String> {
    tags.into_iter().map(String::from).collect()
}

async fn fetch_by_id(pool: &PgPool, id: ArticleId) -> DomainResult<Option<Article>> {
    let row = sqlx::query_as::<_, ArticleRow>(&format!(
        "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
    ))
    .bind(i64::from(id))
    .fetch_optional(pool)
    .await
    .map_err(map_sqlx)?;

    Ok(row.map(Article::from))
}

fn collect_rows(rows: Vec<ArticleRow>) -> Vec<Article> {
    rows.into_iter().map(Article::from).collect()
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            content,
            slug,
            author_id,
            author_name,
            tags,
            created_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, content, slug, author_id, author_name, tags, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title.into_inner())
        .bind(content.into_inner())
        .bind(slug.map(ArticleSlug::into_inner))
        .bind(Uuid::from(author_id))
        .bind(author_name)
        .bind(tag_strings(tags))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(Article::from(row))
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        if update.is_empty() {
            return fetch_by_id(&self.pool, update.id)
                .await?
                .ok_or_else(|| DomainError::NotFound("article not found".into()));
        }

        let ArticleUpdate {
            id,
            title,
            content,
            slug,
            tags,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE articles SET ");
        {
            let mut assignments = builder.separated(", ");
            if let Some(title) = title {
                assignments.push("title = ");
                assignments.push_bind_unseparated(title.into_inner());
            }
            if let Some(content) = content {
                assignments.push("content = ");
                assignments.push_bind_unseparated(content.into_inner());
            }
            if let Some(slug) = slug {
                assignments.push("slug = ");
                assignments.push_bind_unseparated(slug.map(ArticleSlug::into_inner));
            }
            if let Some(tags) = tags {
                assignments.push("tags = ");
                assignments.push_bind_unseparated(tag_strings(tags));
            }
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Ok(Article::from(row))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_delete)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        fetch_by_id(&self.pool, id).await
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Article::from))
    }

    async fn find_author(&self, id: ArticleId) -> DomainResult<Option<UserId>> {
        let author = sqlx::query_scalar::<_, Uuid>("SELECT author_id FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(author.map(UserId))
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles{NEWEST_FIRST}"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(collect_rows(rows))
    }

    async fn list_range(&self, offset: u64, limit: u32) -> DomainResult<Vec<Article>> {
        let offset = i64::try_from(offset)
            .map_err(|_| DomainError::Validation("offset out of range".into()))?;

        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles{NEWEST_FIRST} LIMIT $1 OFFSET $2"
        ))
        .bind(i64::from(limit))
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(collect_rows(rows))
    }

    async fn list_by_tag(&self, tag: &TagContent) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE $1 = ANY(tags){NEWEST_FIRST}"
        ))
        .bind(tag.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(collect_rows(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn row(title: &str, content: &str, slug: Option<&str>, tags: Option<Vec<&str>>) -> ArticleRow {
        ArticleRow {
            id: 7,
            title: title.into(),
            content: content.into(),
            slug: slug.map(str::to_string),
            author_id: Uuid::from_u128(2),
            author_name: Some("author@example.com".into()),
            tags: tags.map(|tags| tags.into_iter().map(str::to_string).collect()),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    /// 他クライアントが書いた規則外の行もそのまま読み込めることを確認する
    #[test]
    fn rows_outside_write_rules_still_decode() {
        let long_title = "t".repeat(51);
        let article = Article::from(row(
            &long_title,
            "",
            Some("Hello-World"),
            Some(vec!["", " spaced "]),
        ));

        assert_eq!(article.id, ArticleId(7));
        assert_eq!(article.title.as_str(), long_title);
        assert_eq!(article.content.as_str(), "");
        assert_eq!(article.slug.map(ArticleSlug::into_inner), Some("Hello-World".into()));
        let tags: Vec<String> = article.tags.into_iter().map(String::from).collect();
        assert_eq!(tags, vec!["".to_string(), " spaced ".to_string()]);
    }

    #[test]
    fn empty_slug_and_missing_tags_read_as_absent() {
        let article = Article::from(row(" padded title ", "body", Some(""), None));
        assert_eq!(article.title.as_str(), " padded title ");
        assert!(article.slug.is_none());
        assert!(article.tags.is_empty());
    }
}
