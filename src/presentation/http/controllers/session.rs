use crate::application::dto::UserProfileDto;
use crate::presentation::http::error::ErrorResponse;
use crate::presentation::http::extractors::Authenticated;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/me",
    responses(
        (status = 200, description = "Profile behind the current session.", body = UserProfileDto),
        (status = 401, description = "No live session.", body = ErrorResponse)
    ),
    tag = "Session"
)]
pub async fn current_user(Authenticated(user): Authenticated) -> Json<UserProfileDto> {
    Json(UserProfileDto::from(&user))
}
