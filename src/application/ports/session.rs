// src/application/ports/session.rs
use crate::{application::ApplicationResult, domain::user::UserProfile};
use async_trait::async_trait;

/// Resolves backend-issued session tokens. Issuing and revoking sessions
/// happens in the hosted auth service, never here.
#[async_trait]
pub trait SessionAuthority: Send + Sync {
    /// `Ok(None)` for unknown or expired tokens.
    async fn current_user(&self, token: &str) -> ApplicationResult<Option<UserProfile>>;

    async fn is_authorized(&self, token: &str) -> ApplicationResult<bool> {
        Ok(self.current_user(token).await?.is_some())
    }
}
