// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use fumi_core::domain::article::*;
use fumi_core::domain::comment::{Comment, CommentContent, CommentId};
use fumi_core::domain::tag::TagContent;
use fumi_core::domain::user::UserId;

use super::mocks::{author_id, fixed_now};

pub struct ArticleBuilder {
    id: i64,
    title: String,
    content: String,
    slug: Option<String>,
    author_id: UserId,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Article".into(),
            content: "Test body".into(),
            slug: Some("test-article".into()),
            author_id: author_id(),
            tags: Vec::new(),
            created_at: fixed_now(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn without_slug(mut self) -> Self {
        self.slug = None;
        self
    }

    pub fn author(mut self, author: UserId) -> Self {
        self.author_id = author;
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// `fixed_now()` から指定秒後に作成されたことにする
    pub fn created_after(mut self, seconds: i64) -> Self {
        self.created_at = fixed_now() + Duration::seconds(seconds);
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            content: ArticleContent::new(self.content).unwrap(),
            slug: self.slug.map(|s| ArticleSlug::new(s).unwrap()),
            author_id: self.author_id,
            author_name: Some("author@example.com".into()),
            tags: self
                .tags
                .into_iter()
                .map(|t| TagContent::new(t).unwrap())
                .collect(),
            created_at: self.created_at,
        }
    }
}

pub struct CommentBuilder {
    id: i64,
    article_id: i64,
    parent_id: Option<i64>,
    author_id: UserId,
    content: String,
    created_at: DateTime<Utc>,
}

impl CommentBuilder {
    pub fn new(id: i64, article_id: i64) -> Self {
        Self {
            id,
            article_id,
            parent_id: None,
            author_id: author_id(),
            content: format!("comment {id}"),
            created_at: fixed_now() + Duration::seconds(id),
        }
    }

    pub fn reply_to(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn author(mut self, author: UserId) -> Self {
        self.author_id = author;
        self
    }

    pub fn build(self) -> Comment {
        Comment {
            id: CommentId::new(self.id).unwrap(),
            content: CommentContent::new(self.content).unwrap(),
            article_id: ArticleId::new(self.article_id).unwrap(),
            author_id: self.author_id,
            author_name: Some("author@example.com".into()),
            parent_id: self.parent_id.map(|id| CommentId::new(id).unwrap()),
            created_at: self.created_at,
        }
    }
}
