use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use crate::domain::tag::TagContent;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

/// Listing methods return articles newest first.
#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    async fn find_author(&self, id: ArticleId) -> DomainResult<Option<UserId>>;
    async fn list(&self) -> DomainResult<Vec<Article>>;
    /// Rows `offset .. offset + limit` of the newest-first ordering.
    async fn list_range(&self, offset: u64, limit: u32) -> DomainResult<Vec<Article>>;
    async fn list_by_tag(&self, tag: &TagContent) -> DomainResult<Vec<Article>>;
}
