// src/application/ports/feed.rs
use crate::application::{ApplicationResult, dto::ArticleDto};
use async_trait::async_trait;

#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Articles at positions `from..=to` of the newest-first ordering.
    async fn fetch_range(&self, from: u64, to: u64) -> ApplicationResult<Vec<ArticleDto>>;
}
