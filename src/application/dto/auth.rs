use crate::domain::user::{ActorRole, Role, UserId, UserProfile};

/// The user behind the current session.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub email: String,
    pub role: Role,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn actor(&self) -> ActorRole {
        ActorRole::new(self.id, self.role)
    }

    /// Stored as `author_name` on articles and comments.
    pub fn author_name(&self) -> &str {
        &self.email
    }
}

impl From<UserProfile> for AuthenticatedUser {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            email: profile.author_name().to_string(),
            role: profile.role,
            name: profile.name,
            avatar_url: profile.avatar_url,
        }
    }
}
