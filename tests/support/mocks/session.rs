// tests/support/mocks/session.rs
use async_trait::async_trait;
use fumi_core::application::{ApplicationResult, ports::session::SessionAuthority};
use fumi_core::domain::user::{Email, Role, UserId, UserProfile};
use std::collections::HashMap;
use uuid::Uuid;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const AUTHOR_TOKEN: &str = "author-token";
pub const READER_TOKEN: &str = "reader-token";

pub fn admin_id() -> UserId {
    UserId::new(Uuid::from_u128(1)).unwrap()
}

pub fn author_id() -> UserId {
    UserId::new(Uuid::from_u128(2)).unwrap()
}

pub fn reader_id() -> UserId {
    UserId::new(Uuid::from_u128(3)).unwrap()
}

fn profile(id: UserId, email: &str, role: Role) -> UserProfile {
    UserProfile {
        id,
        email: Email::new(email).unwrap(),
        role,
        name: None,
        avatar_url: None,
    }
}

/// 固定トークン → プロフィールの対応表
pub struct StaticSessionAuthority {
    sessions: HashMap<String, UserProfile>,
}

impl Default for StaticSessionAuthority {
    fn default() -> Self {
        let mut sessions = HashMap::new();
        sessions.insert(
            ADMIN_TOKEN.to_string(),
            profile(admin_id(), "admin@example.com", Role::Admin),
        );
        sessions.insert(
            AUTHOR_TOKEN.to_string(),
            profile(author_id(), "author@example.com", Role::User),
        );
        sessions.insert(
            READER_TOKEN.to_string(),
            profile(reader_id(), "reader@example.com", Role::User),
        );
        Self { sessions }
    }
}

#[async_trait]
impl SessionAuthority for StaticSessionAuthority {
    async fn current_user(&self, token: &str) -> ApplicationResult<Option<UserProfile>> {
        Ok(self.sessions.get(token).cloned())
    }
}
