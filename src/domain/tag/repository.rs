use crate::domain::errors::DomainResult;
use crate::domain::tag::entity::Tag;
use crate::domain::tag::value_objects::TagContent;
use async_trait::async_trait;

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// All tags ordered by content.
    async fn list(&self) -> DomainResult<Vec<Tag>>;
    async fn find_by_content(&self, content: &TagContent) -> DomainResult<Option<Tag>>;
    async fn insert(&self, content: TagContent) -> DomainResult<Tag>;
    /// Insert whichever of `contents` are not catalogued yet.
    async fn ensure(&self, contents: &[TagContent]) -> DomainResult<()>;
}
