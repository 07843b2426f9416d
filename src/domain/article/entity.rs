// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::tag::TagContent;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub slug: Option<ArticleSlug>,
    pub author_id: UserId,
    pub author_name: Option<String>,
    pub tags: Vec<TagContent>,
    pub created_at: DateTime<Utc>,
}

impl Article {
    pub fn reference(&self) -> ArticleRef {
        ArticleRef {
            id: self.id,
            author_id: Some(self.author_id),
        }
    }
}

/// What a caller knows about an article when asking for permissions. The
/// author may be unknown, in which case it is looked up by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleRef {
    pub id: ArticleId,
    pub author_id: Option<UserId>,
}

impl ArticleRef {
    pub fn by_id(id: ArticleId) -> Self {
        Self {
            id,
            author_id: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub slug: Option<ArticleSlug>,
    pub author_id: UserId,
    pub author_name: String,
    pub tags: Vec<TagContent>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub content: Option<ArticleContent>,
    /// `Some(None)` clears the slug.
    pub slug: Option<Option<ArticleSlug>>,
    pub tags: Option<Vec<TagContent>>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId) -> Self {
        Self {
            id,
            title: None,
            content: None,
            slug: None,
            tags: None,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_slug(mut self, slug: Option<ArticleSlug>) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_tags(mut self, tags: Vec<TagContent>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.slug.is_none() && self.tags.is_none()
    }
}
