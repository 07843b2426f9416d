// src/application/commands/comments/delete.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{comment::CommentId, specification::Specification, user::AuthorOrAdminSpec},
};

pub struct DeleteCommentCommand {
    pub id: i64,
}

impl CommentCommandService {
    pub async fn delete_comment(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<()> {
        let id = CommentId::new(command.id)?;
        let comment = self
            .comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        let actor_role = actor.actor();
        if !AuthorOrAdminSpec::new(Some(&actor_role), comment.author_id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to delete comment",
            ));
        }

        self.comment_repo.delete(id).await?;
        tracing::info!(comment_id = %id, actor_id = %actor.id, "comment deleted");
        Ok(())
    }
}
