// src/application/commands/comments/create.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::ArticleId,
        comment::{
            Comment, CommentContent, CommentFilter, CommentId, MAX_THREAD_DEPTH, NewComment,
        },
    },
};
use std::collections::HashMap;

pub struct CreateCommentCommand {
    pub article_id: i64,
    pub content: String,
    pub parent_id: Option<i64>,
}

impl CommentCommandService {
    pub async fn create_comment(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let content = CommentContent::new(command.content)?;
        let article_id = ArticleId::new(command.article_id)?;

        if self.article_repo.find_by_id(article_id).await?.is_none() {
            return Err(ApplicationError::not_found("article not found"));
        }

        let parent_id = match command.parent_id {
            Some(raw) => Some(self.resolve_parent(article_id, CommentId::new(raw)?).await?),
            None => None,
        };

        let comment = self
            .comment_repo
            .insert(NewComment {
                content,
                article_id,
                author_id: actor.id,
                author_name: actor.author_name().to_string(),
                parent_id,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(
            comment_id = %comment.id,
            article_id = %article_id,
            author_id = %actor.id,
            "comment created"
        );
        Ok(comment.into())
    }

    async fn resolve_parent(
        &self,
        article_id: ArticleId,
        parent_id: CommentId,
    ) -> ApplicationResult<CommentId> {
        let parent = self
            .comment_repo
            .find_by_id(parent_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("parent comment not found"))?;

        if parent.article_id != article_id {
            return Err(ApplicationError::validation(
                "parent comment belongs to a different article",
            ));
        }

        if self.depth_of(&parent).await? + 1 >= MAX_THREAD_DEPTH {
            return Err(ApplicationError::validation(format!(
                "replies cannot be nested more than {MAX_THREAD_DEPTH} levels deep"
            )));
        }
        Ok(parent.id)
    }

    /// Depth of `comment` in its article's thread, counting up to the
    /// thread limit. A broken or cyclic parent chain stops the walk.
    async fn depth_of(&self, comment: &Comment) -> ApplicationResult<usize> {
        let parents: HashMap<CommentId, Option<CommentId>> = self
            .comment_repo
            .list(CommentFilter {
                article_id: Some(comment.article_id),
                id: None,
            })
            .await?
            .into_iter()
            .map(|c| (c.id, c.parent_id))
            .collect();

        let mut depth = 0;
        let mut cursor = comment.parent_id;
        while let Some(id) = cursor {
            if depth >= MAX_THREAD_DEPTH {
                break;
            }
            depth += 1;
            cursor = parents.get(&id).copied().flatten();
        }
        Ok(depth)
    }
}
