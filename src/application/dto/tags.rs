use crate::application::dto::ArticleDto;
use crate::domain::tag::Tag;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TagDto {
    pub id: i64,
    pub content: String,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.into(),
            content: tag.content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TagWithArticlesDto {
    pub tag: TagDto,
    pub articles: Vec<ArticleDto>,
}
