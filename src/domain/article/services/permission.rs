use std::sync::Arc;

use crate::domain::article::entity::ArticleRef;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::errors::DomainResult;
use crate::domain::specification::Specification;
use crate::domain::user::{ActorRole, AuthorOrAdminSpec};

/// Decides whether an actor may edit or delete an article.
pub struct ArticlePermissionService {
    read_repo: Arc<dyn ArticleReadRepository>,
}

impl ArticlePermissionService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self { read_repo }
    }

    /// No actor is always refused and administrators are always allowed, both
    /// without touching storage. Otherwise the author id is taken from
    /// `article` or fetched by id; a missing article is refused.
    pub async fn can_manage(
        &self,
        actor: Option<&ActorRole>,
        article: ArticleRef,
    ) -> DomainResult<bool> {
        let Some(actor) = actor else {
            return Ok(false);
        };
        if actor.role.is_admin() {
            return Ok(true);
        }

        let author_id = match article.author_id {
            Some(author_id) => author_id,
            None => match self.read_repo.find_author(article.id).await? {
                Some(author_id) => author_id,
                None => return Ok(false),
            },
        };

        Ok(AuthorOrAdminSpec::new(Some(actor), author_id).is_satisfied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::services::test_support::StubReadRepo;
    use crate::domain::article::{Article, ArticleContent, ArticleId, ArticleTitle};
    use crate::domain::user::{Role, UserId};
    use chrono::Utc;
    use uuid::Uuid;

    fn user_id() -> UserId {
        UserId::new(Uuid::new_v4()).unwrap()
    }

    fn article(id: i64, author_id: UserId) -> Article {
        Article {
            id: ArticleId::new(id).unwrap(),
            title: ArticleTitle::new("t").unwrap(),
            content: ArticleContent::new("c").unwrap(),
            slug: None,
            author_id,
            author_name: None,
            tags: vec![],
            created_at: Utc::now(),
        }
    }

    fn service_with(articles: Vec<Article>) -> (ArticlePermissionService, Arc<StubReadRepo>) {
        let repo = Arc::new(StubReadRepo {
            articles,
            ..Default::default()
        });
        (ArticlePermissionService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn author_admin_other_and_anonymous() {
        let author = ActorRole::new(user_id(), Role::User);
        let admin = ActorRole::new(user_id(), Role::Admin);
        let other = ActorRole::new(user_id(), Role::User);
        let (service, _) = service_with(vec![article(1, author.id)]);
        let known = ArticleRef {
            id: ArticleId::new(1).unwrap(),
            author_id: Some(author.id),
        };

        assert!(service.can_manage(Some(&author), known).await.unwrap());
        assert!(service.can_manage(Some(&admin), known).await.unwrap());
        assert!(!service.can_manage(Some(&other), known).await.unwrap());
        assert!(!service.can_manage(None, known).await.unwrap());
    }

    #[tokio::test]
    async fn unknown_author_is_fetched_before_comparing() {
        let author = ActorRole::new(user_id(), Role::User);
        let (service, repo) = service_with(vec![article(4, author.id)]);
        let by_id = ArticleRef::by_id(ArticleId::new(4).unwrap());

        assert!(service.can_manage(Some(&author), by_id).await.unwrap());
        assert_eq!(*repo.author_lookups.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn known_author_and_admins_skip_the_lookup() {
        let author = ActorRole::new(user_id(), Role::User);
        let admin = ActorRole::new(user_id(), Role::Admin);
        let (service, repo) = service_with(vec![article(4, author.id)]);

        let known = ArticleRef {
            id: ArticleId::new(4).unwrap(),
            author_id: Some(author.id),
        };
        service.can_manage(Some(&author), known).await.unwrap();
        service
            .can_manage(Some(&admin), ArticleRef::by_id(ArticleId::new(4).unwrap()))
            .await
            .unwrap();
        assert_eq!(*repo.author_lookups.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn missing_article_is_refused() {
        let actor = ActorRole::new(user_id(), Role::User);
        let (service, _) = service_with(vec![]);
        let missing = ArticleRef::by_id(ArticleId::new(99).unwrap());
        assert!(!service.can_manage(Some(&actor), missing).await.unwrap());
    }
}
