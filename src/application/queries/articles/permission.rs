use super::ArticleQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PermissionDto},
        error::ApplicationResult,
    },
    domain::article::{ArticleId, ArticleRef},
};

pub struct ArticlePermissionQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Whether the (possibly anonymous) caller may edit or delete the article.
    /// Unknown articles resolve to `false`.
    pub async fn can_manage_article(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ArticlePermissionQuery,
    ) -> ApplicationResult<PermissionDto> {
        let id = ArticleId::new(query.id)?;
        let actor_role = actor.map(AuthenticatedUser::actor);
        let can_manage = self
            .permissions
            .can_manage(actor_role.as_ref(), ArticleRef::by_id(id))
            .await?;
        Ok(PermissionDto { can_manage })
    }
}
