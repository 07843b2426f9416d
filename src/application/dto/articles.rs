use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    /// Markdown source.
    pub content: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub created_at: DateTime<Utc>,
    pub author_id: Uuid,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            slug: article.slug.map(|slug| slug.into_inner()),
            created_at: article.created_at,
            author_id: article.author_id.into(),
            author_name: article.author_name,
            tags: article.tags.into_iter().map(String::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SlugAvailabilityDto {
    pub available: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PermissionDto {
    pub can_manage: bool,
}
