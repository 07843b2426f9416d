// src/presentation/http/controllers/tags.rs
use crate::application::{
    commands::tags::CreateTagCommand,
    dto::{TagDto, TagWithArticlesDto},
    queries::tags::TagBySlugQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TagParams {
    /// Tag content or its slug form; resolves one tag with its articles.
    pub slug: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTagRequest {
    pub tag: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum TagsResponse {
    All(Vec<TagDto>),
    BySlug(TagWithArticlesDto),
}

#[utoipa::path(
    get,
    path = "/api/tags",
    params(TagParams),
    responses(
        (status = 200, description = "All tags, or one tag with its articles when `slug` is given.", body = TagsResponse),
        (status = 404, description = "No tag matches the slug.", body = ErrorResponse)
    ),
    tag = "Tags"
)]
pub async fn list_tags(
    Extension(state): Extension<HttpState>,
    Query(params): Query<TagParams>,
) -> HttpResult<Json<TagsResponse>> {
    let queries = &state.services.tag_queries;
    let response = match params.slug {
        Some(slug) => TagsResponse::BySlug(
            queries
                .tag_by_slug(TagBySlugQuery { slug })
                .await
                .into_http()?,
        ),
        None => TagsResponse::All(queries.list_tags().await.into_http()?),
    };
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/tags",
    request_body = CreateTagRequest,
    responses(
        (status = 201, description = "Tag created.", body = TagDto),
        (status = 400, description = "Empty tag.", body = ErrorResponse),
        (status = 401, description = "Not signed in.", body = ErrorResponse),
        (status = 409, description = "Tag already exists.", body = ErrorResponse)
    ),
    tag = "Tags"
)]
pub async fn create_tag(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateTagRequest>,
) -> HttpResult<(StatusCode, Json<TagDto>)> {
    let tag = state
        .services
        .tag_commands
        .create_tag(&user, CreateTagCommand { tag: payload.tag })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(tag)))
}
