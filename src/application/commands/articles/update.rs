use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::{
        article::{Article, ArticleContent, ArticleId, ArticleSlug, ArticleTitle, ArticleUpdate},
        tag::TagList,
    },
};

/// Absent fields are left untouched; a blank `slug` removes the slug.
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub slug: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let article = self.load_managed(actor, id, "update").await?;

        let UpdateArticleCommand {
            id: _,
            title,
            content,
            slug,
            tags,
        } = command;

        let mut update = ArticleUpdate::new(id);
        if let Some(title) = title {
            update = update.with_title(ArticleTitle::new(title)?);
        }
        if let Some(content) = content {
            update = update.with_content(ArticleContent::new(content)?);
        }
        if let Some(raw) = slug {
            update = self.apply_slug_update(&article, raw, update).await?;
        }
        if let Some(tags) = tags {
            let tags = TagList::new(tags)?;
            if !tags.is_empty() {
                self.tag_repo.ensure(tags.as_slice()).await?;
            }
            update = update.with_tags(tags.into());
        }

        if update.is_empty() {
            return Ok(article.into());
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(article_id = %updated.id, editor_id = %actor.id, "article updated");
        Ok(updated.into())
    }

    async fn apply_slug_update(
        &self,
        article: &Article,
        raw: String,
        update: ArticleUpdate,
    ) -> ApplicationResult<ArticleUpdate> {
        let slug = ArticleSlug::optional(raw)?;
        if slug == article.slug {
            return Ok(update);
        }
        if let Some(slug) = &slug {
            self.ensure_slug_available(slug, Some(article.id)).await?;
        }
        Ok(update.with_slug(slug))
    }
}
