// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        self.load_managed(actor, id, "delete").await?;

        self.write_repo.delete(id).await?;
        tracing::info!(article_id = %id, actor_id = %actor.id, "article deleted");
        Ok(())
    }
}
