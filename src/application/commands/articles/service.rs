// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{
            Article, ArticleId, ArticleReadRepository, ArticleSlug, ArticleWriteRepository,
            services::{ArticlePermissionService, ArticleSlugService},
        },
        tag::TagRepository,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) permissions: Arc<ArticlePermissionService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        tag_repo: Arc<dyn TagRepository>,
        slug_service: Arc<ArticleSlugService>,
        permissions: Arc<ArticlePermissionService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            tag_repo,
            slug_service,
            permissions,
            clock,
        }
    }

    pub(super) async fn ensure_slug_available(
        &self,
        slug: &ArticleSlug,
        ignore_id: Option<ArticleId>,
    ) -> ApplicationResult<()> {
        if self.slug_service.is_available(slug, ignore_id).await? {
            Ok(())
        } else {
            Err(ApplicationError::conflict(format!(
                "slug '{slug}' is already taken"
            )))
        }
    }

    /// Load an article the actor is allowed to manage.
    pub(super) async fn load_managed(
        &self,
        actor: &AuthenticatedUser,
        id: ArticleId,
        action: &str,
    ) -> ApplicationResult<Article> {
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let allowed = self
            .permissions
            .can_manage(Some(&actor.actor()), article.reference())
            .await?;
        if !allowed {
            return Err(ApplicationError::forbidden(format!(
                "insufficient privileges to {action} article"
            )));
        }

        Ok(article)
    }
}
