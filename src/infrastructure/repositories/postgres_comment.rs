// src/infrastructure/repositories/postgres_comment.rs
use super::{map_sqlx, map_sqlx_delete};
use crate::domain::article::ArticleId;
use crate::domain::comment::{
    Comment, CommentContent, CommentFilter, CommentId, CommentRepository, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

// The author columns keep the names the web client created them with.
const COMMENT_COLUMNS: &str = r#"id, content, article_id, author AS author_id, "authorName" AS author_name, "parent_Id" AS parent_id, created_at"#;

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    content: String,
    article_id: i64,
    author_id: Uuid,
    author_name: Option<String>,
    parent_id: Option<i64>,
    created_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: CommentId(row.id),
            content: CommentContent::from_stored(row.content),
            article_id: ArticleId(row.article_id),
            author_id: UserId(row.author_id),
            author_name: row.author_name,
            parent_id: row.parent_id.map(CommentId),
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn list(&self, filter: CommentFilter) -> DomainResult<Vec<Comment>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE TRUE"));

        if let Some(article_id) = filter.article_id {
            builder.push(" AND article_id = ");
            builder.push_bind(i64::from(article_id));
        }
        if let Some(id) = filter.id {
            builder.push(" AND id = ");
            builder.push_bind(i64::from(id));
        }
        builder.push(" ORDER BY created_at ASC, id ASC");

        let rows = builder
            .build_query_as::<CommentRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Comment::from))
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            content,
            article_id,
            author_id,
            author_name,
            parent_id,
            created_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(&format!(
            r#"INSERT INTO comments (content, article_id, author, "authorName", "parent_Id", created_at)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING {COMMENT_COLUMNS}"#
        ))
        .bind(content.into_inner())
        .bind(i64::from(article_id))
        .bind(Uuid::from(author_id))
        .bind(author_name)
        .bind(parent_id.map(i64::from))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(Comment::from(row))
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_delete)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}
