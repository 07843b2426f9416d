use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
    ports::feed::FeedSource,
};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Without `page` every article is returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListArticlesQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ArticleQueryService {
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<Vec<ArticleDto>> {
        let Some(page) = query.page else {
            let articles = self.read_repo.list().await?;
            return Ok(articles.into_iter().map(Into::into).collect());
        };

        let (from, to) = Self::page_bounds(page, query.page_size)?;
        self.fetch_range(from, to).await
    }

    /// Inclusive row bounds of a 1-based page.
    pub(super) fn page_bounds(page: u32, page_size: Option<u32>) -> ApplicationResult<(u64, u64)> {
        if page == 0 {
            return Err(ApplicationError::validation("page starts at 1"));
        }
        let size = match page_size {
            None | Some(0) => DEFAULT_PAGE_SIZE,
            Some(size) => size.min(MAX_PAGE_SIZE),
        };
        let from = u64::from(page - 1) * u64::from(size);
        Ok((from, from + u64::from(size) - 1))
    }
}
