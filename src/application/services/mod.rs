// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            articles::ArticleCommandService, comments::CommentCommandService,
            tags::TagCommandService,
        },
        dto::AuthenticatedUser,
        error::ApplicationError,
        ports::{session::SessionAuthority, time::Clock},
        queries::{
            articles::ArticleQueryService, comments::CommentQueryService, tags::TagQueryService,
        },
    },
    domain::{
        article::{
            ArticleReadRepository, ArticleWriteRepository,
            services::{ArticlePermissionService, ArticleSlugService},
        },
        comment::CommentRepository,
        tag::TagRepository,
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub tag_commands: Arc<TagCommandService>,
    pub tag_queries: Arc<TagQueryService>,
    session_authority: Arc<dyn SessionAuthority>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        tag_repo: Arc<dyn TagRepository>,
        session_authority: Arc<dyn SessionAuthority>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let slug_service = Arc::new(ArticleSlugService::new(Arc::clone(&article_read_repo)));
        let permissions = Arc::new(ArticlePermissionService::new(Arc::clone(&article_read_repo)));

        let article_commands = Arc::new(ArticleCommandService::new(
            article_write_repo,
            Arc::clone(&article_read_repo),
            Arc::clone(&tag_repo),
            Arc::clone(&slug_service),
            Arc::clone(&permissions),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            slug_service,
            permissions,
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&article_read_repo),
            clock,
        ));
        let comment_queries = Arc::new(CommentQueryService::new(comment_repo));

        let tag_commands = Arc::new(TagCommandService::new(Arc::clone(&tag_repo)));
        let tag_queries = Arc::new(TagQueryService::new(tag_repo, article_read_repo));

        Self {
            article_commands,
            article_queries,
            comment_commands,
            comment_queries,
            tag_commands,
            tag_queries,
            session_authority,
        }
    }

    /// Resolve a session token to its user; unknown or expired sessions are
    /// `Unauthorized`.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let profile = self
            .session_authority
            .current_user(token)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("session is missing or expired"))?;
        Ok(profile.into())
    }
}
