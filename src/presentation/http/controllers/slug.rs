use crate::application::{dto::SlugAvailabilityDto, queries::articles::CheckSlugQuery};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SlugCheckParams {
    pub slug: String,
    /// Article being edited; its own slug is not reported as taken.
    pub exclude_id: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/slug-check",
    params(SlugCheckParams),
    responses(
        (status = 200, description = "Whether no article uses the slug.", body = SlugAvailabilityDto),
        (status = 400, description = "Slug is empty or not in normalized form.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn check_slug(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SlugCheckParams>,
) -> HttpResult<Json<SlugAvailabilityDto>> {
    state
        .services
        .article_queries
        .check_slug(CheckSlugQuery {
            slug: params.slug,
            exclude_id: params.exclude_id,
        })
        .await
        .into_http()
        .map(Json)
}
