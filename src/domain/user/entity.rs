// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, Role, UserId};

/// Profile row owned by the hosted auth backend; read-only from here.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub id: UserId,
    pub email: Email,
    pub role: Role,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Name stored alongside authored rows. The backend historically used the
    /// email here, so the email wins over the optional display name.
    pub fn author_name(&self) -> &str {
        self.email.as_str()
    }
}
