// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleContent, ArticleSlug, ArticleTitle, NewArticle},
        tag::TagList,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    /// Blank means the article has no slug.
    pub slug: Option<String>,
    pub tags: Vec<String>,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let slug = match command.slug {
            Some(raw) => ArticleSlug::optional(raw)?,
            None => None,
        };
        let tags = TagList::new(command.tags)?;

        if let Some(slug) = &slug {
            self.ensure_slug_available(slug, None).await?;
        }
        if !tags.is_empty() {
            self.tag_repo.ensure(tags.as_slice()).await?;
        }

        let new_article = NewArticle {
            title,
            content,
            slug,
            author_id: actor.id,
            author_name: actor.author_name().to_string(),
            tags: tags.into(),
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, author_id = %actor.id, "article created");
        Ok(created.into())
    }
}
