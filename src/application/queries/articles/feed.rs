use async_trait::async_trait;

use super::ArticleQueryService;
use crate::application::{ApplicationResult, dto::ArticleDto, ports::feed::FeedSource};

#[async_trait]
impl FeedSource for ArticleQueryService {
    async fn fetch_range(&self, from: u64, to: u64) -> ApplicationResult<Vec<ArticleDto>> {
        if to < from {
            return Ok(Vec::new());
        }
        let limit = u32::try_from(to - from + 1).unwrap_or(u32::MAX);
        let articles = self.read_repo.list_range(from, limit).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
