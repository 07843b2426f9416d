use crate::application::dto::AuthenticatedUser;
use crate::domain::user::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfileDto {
    pub id: Uuid,
    pub email: String,
    #[schema(value_type = String, example = "user")]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl From<&AuthenticatedUser> for UserProfileDto {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            id: user.id.into(),
            email: user.email.clone(),
            role: user.role,
            name: user.name.clone(),
            avatar_url: user.avatar_url.clone(),
        }
    }
}
