// src/application/commands/tags/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, TagDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::tag::{TagContent, TagRepository},
};

pub struct CreateTagCommand {
    pub tag: String,
}

pub struct TagCommandService {
    tag_repo: Arc<dyn TagRepository>,
}

impl TagCommandService {
    pub fn new(tag_repo: Arc<dyn TagRepository>) -> Self {
        Self { tag_repo }
    }

    pub async fn create_tag(
        &self,
        actor: &AuthenticatedUser,
        command: CreateTagCommand,
    ) -> ApplicationResult<TagDto> {
        let content = TagContent::new(command.tag)?;
        if self.tag_repo.find_by_content(&content).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "tag '{content}' already exists"
            )));
        }

        let tag = self.tag_repo.insert(content).await?;
        tracing::info!(tag_id = tag.id.0, created_by = %actor.id, "tag created");
        Ok(tag.into())
    }
}
