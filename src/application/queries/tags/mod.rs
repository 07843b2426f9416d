// src/application/queries/tags/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{TagDto, TagWithArticlesDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleReadRepository, generate_slug},
        tag::{Tag, TagRepository},
    },
};

pub struct TagBySlugQuery {
    pub slug: String,
}

pub struct TagQueryService {
    tag_repo: Arc<dyn TagRepository>,
    article_repo: Arc<dyn ArticleReadRepository>,
}

impl TagQueryService {
    pub fn new(tag_repo: Arc<dyn TagRepository>, article_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self {
            tag_repo,
            article_repo,
        }
    }

    pub async fn list_tags(&self) -> ApplicationResult<Vec<TagDto>> {
        let tags = self.tag_repo.list().await?;
        Ok(tags.into_iter().map(Into::into).collect())
    }

    /// Resolve a tag from its URL form, either the content itself or its
    /// generated slug, together with the articles carrying it.
    pub async fn tag_by_slug(&self, query: TagBySlugQuery) -> ApplicationResult<TagWithArticlesDto> {
        let slug = query.slug.trim();
        if slug.is_empty() {
            return Err(ApplicationError::validation("tag slug cannot be empty"));
        }

        let tags = self.tag_repo.list().await?;
        let tag = find_by_slug(tags, slug)
            .ok_or_else(|| ApplicationError::not_found("tag not found"))?;

        let articles = self.article_repo.list_by_tag(&tag.content).await?;
        Ok(TagWithArticlesDto {
            tag: tag.into(),
            articles: articles.into_iter().map(Into::into).collect(),
        })
    }
}

/// An exact content match wins over a slug match.
fn find_by_slug(tags: Vec<Tag>, slug: &str) -> Option<Tag> {
    let mut slug_match = None;
    for tag in tags {
        if tag.content.as_str() == slug {
            return Some(tag);
        }
        if slug_match.is_none() && generate_slug(tag.content.as_str()) == slug {
            slug_match = Some(tag);
        }
    }
    slug_match
}
