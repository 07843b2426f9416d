use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Both filters are optional and combine with AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentFilter {
    pub article_id: Option<ArticleId>,
    pub id: Option<CommentId>,
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Matching comments, oldest first.
    async fn list(&self, filter: CommentFilter) -> DomainResult<Vec<Comment>>;
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
}
