use std::sync::Arc;

use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;

/// Answers whether a slug is still free.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
}

impl ArticleSlugService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self { read_repo }
    }

    /// `ignore_id` lets an article keep its own slug while being edited.
    pub async fn is_available(
        &self,
        slug: &ArticleSlug,
        ignore_id: Option<ArticleId>,
    ) -> DomainResult<bool> {
        match self.read_repo.find_by_slug(slug).await? {
            Some(existing) => Ok(ignore_id == Some(existing.id)),
            None => Ok(true),
        }
    }
}
