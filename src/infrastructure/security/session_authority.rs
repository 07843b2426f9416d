// src/infrastructure/security/session_authority.rs
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Utc;
use sha2::{Digest, Sha256};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::{
    application::{ApplicationResult, error::ApplicationError, ports::session::SessionAuthority},
    domain::{
        errors::DomainError,
        user::{Email, Role, UserId, UserProfile},
    },
    infrastructure::repositories::map_sqlx,
};

/// Session tokens are stored hashed; this is the lookup key for a raw token.
pub fn hash_session_token(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    URL_SAFE_NO_PAD.encode(digest)
}

/// Reads the sessions written by the hosted auth service.
#[derive(Clone)]
pub struct PostgresSessionAuthority {
    pool: PgPool,
}

impl PostgresSessionAuthority {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SessionProfileRow {
    id: Uuid,
    email: String,
    role: String,
    name: Option<String>,
    avatar_url: Option<String>,
}

impl TryFrom<SessionProfileRow> for UserProfile {
    type Error = DomainError;

    fn try_from(row: SessionProfileRow) -> Result<Self, Self::Error> {
        // Anything other than a recognised role is an ordinary user.
        let role = row.role.parse::<Role>().unwrap_or_default();
        Ok(UserProfile {
            id: UserId::new(row.id)?,
            email: Email::new(row.email)?,
            role,
            name: row.name,
            avatar_url: row.avatar_url,
        })
    }
}

#[async_trait]
impl SessionAuthority for PostgresSessionAuthority {
    async fn current_user(&self, token: &str) -> ApplicationResult<Option<UserProfile>> {
        if token.is_empty() {
            return Ok(None);
        }

        let row = sqlx::query_as::<_, SessionProfileRow>(
            "SELECT p.id, p.email, p.role, p.name, p.avatar_url
             FROM sessions s
             JOIN profiles p ON p.id = s.user_id
             WHERE s.token_hash = $1 AND s.expires_at > $2",
        )
        .bind(hash_session_token(token))
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => UserProfile::try_from(row)
                .map(Some)
                .map_err(|err| ApplicationError::infrastructure(format!("malformed profile: {err}"))),
            None => Ok(None),
        }
    }
}
