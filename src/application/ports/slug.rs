// src/application/ports/slug.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait SlugAvailability: Send + Sync {
    async fn is_available(&self, slug: &str) -> ApplicationResult<bool>;
}
