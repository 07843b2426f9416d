use async_trait::async_trait;

use super::ArticleQueryService;
use crate::{
    application::{
        ApplicationResult, dto::SlugAvailabilityDto, ports::slug::SlugAvailability,
    },
    domain::article::{ArticleId, ArticleSlug},
};

pub struct CheckSlugQuery {
    pub slug: String,
    /// The article being edited, whose own slug does not count as taken.
    pub exclude_id: Option<i64>,
}

impl ArticleQueryService {
    /// Malformed slugs are rejected rather than reported as available.
    pub async fn check_slug(&self, query: CheckSlugQuery) -> ApplicationResult<SlugAvailabilityDto> {
        let slug = ArticleSlug::new(query.slug)?;
        let ignore_id = query.exclude_id.map(ArticleId::new).transpose()?;
        let available = self.slug_service.is_available(&slug, ignore_id).await?;
        Ok(SlugAvailabilityDto { available })
    }
}

#[async_trait]
impl SlugAvailability for ArticleQueryService {
    async fn is_available(&self, slug: &str) -> ApplicationResult<bool> {
        let result = self
            .check_slug(CheckSlugQuery {
                slug: slug.to_string(),
                exclude_id: None,
            })
            .await?;
        Ok(result.available)
    }
}
