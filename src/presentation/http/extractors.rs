// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, Cookie, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Rejects the request with 401 unless it carries a live session.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

/// The session user when there is one; stale sessions count as anonymous.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

/// Bearer header first, then the session cookie.
fn session_token(parts: &Parts, cookie_name: &str) -> Option<String> {
    if let Some(Authorization(bearer)) = parts.headers.typed_get::<Authorization<Bearer>>() {
        return Some(bearer.token().to_string());
    }
    parts
        .headers
        .typed_get::<Cookie>()
        .and_then(|cookies| cookies.get(cookie_name).map(str::to_string))
        .filter(|token| !token.is_empty())
}

async fn app_state<S>(parts: &mut Parts, state: &S) -> Result<HttpState, HttpError>
where
    S: Send + Sync,
{
    let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map_err(|_| {
            HttpError::from_error(ApplicationError::infrastructure("application state missing"))
        })?;
    Ok(app_state)
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;
        let token = session_token(parts, &app_state.session_cookie_name).ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized("sign in required"))
        })?;

        let user = app_state
            .services
            .authenticate(&token)
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(user))
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;
        let Some(token) = session_token(parts, &app_state.session_cookie_name) else {
            return Ok(Self(None));
        };

        match app_state.services.authenticate(&token).await {
            Ok(user) => Ok(Self(Some(user))),
            Err(ApplicationError::Unauthorized(_)) => Ok(Self(None)),
            Err(err) => Err(HttpError::from_error(err)),
        }
    }
}
