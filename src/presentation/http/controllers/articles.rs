// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, PermissionDto},
    error::ApplicationError,
    queries::articles::{
        ArticlePermissionQuery, GetArticleByIdQuery, GetArticleBySlugQuery, ListArticlesQuery,
    },
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query, http::StatusCode};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// 1-based page; omit to list every article.
    pub page: Option<u32>,
    /// Defaults to 10, capped at 100.
    pub page_size: Option<u32>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleLookupParams {
    pub id: Option<i64>,
    pub slug: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleIdParams {
    pub id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    /// An empty string removes the slug.
    pub slug: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Articles, newest first.", body = [ArticleDto]),
        (status = 400, description = "Invalid page.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            page: params.page,
            page_size: params.page_size,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/article",
    params(ArticleLookupParams),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 400, description = "Neither id nor slug given.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleLookupParams>,
) -> HttpResult<Json<ArticleDto>> {
    let queries = &state.services.article_queries;
    let article = match (params.id, params.slug) {
        (Some(id), _) => queries.get_article_by_id(GetArticleByIdQuery { id }).await,
        (None, Some(slug)) => queries.get_article_by_slug(GetArticleBySlugQuery { slug }).await,
        (None, None) => Err(ApplicationError::validation("id or slug is required")),
    };
    article.into_http().map(Json)
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Invalid article.", body = ErrorResponse),
        (status = 401, description = "Not signed in.", body = ErrorResponse),
        (status = 409, description = "Slug already taken.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
        slug: payload.slug,
        tags: payload.tags,
    };

    let article = state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    put,
    path = "/api/article",
    params(ArticleIdParams),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleDto),
        (status = 401, description = "Not signed in.", body = ErrorResponse),
        (status = 403, description = "Neither author nor administrator.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse),
        (status = 409, description = "Slug already taken.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(ArticleIdParams { id }): Query<ArticleIdParams>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        content: payload.content,
        slug: payload.slug,
        tags: payload.tags,
    };

    state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/article",
    params(ArticleIdParams),
    responses(
        (status = 200, description = "Article deleted."),
        (status = 401, description = "Not signed in.", body = ErrorResponse),
        (status = 403, description = "Neither author nor administrator.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(ArticleIdParams { id }): Query<ArticleIdParams>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

#[utoipa::path(
    get,
    path = "/api/article/permission",
    params(ArticleIdParams),
    responses(
        (status = 200, description = "Whether the caller may edit or delete the article.", body = PermissionDto)
    ),
    tag = "Articles"
)]
pub async fn article_permission(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(user): MaybeAuthenticated,
    Query(ArticleIdParams { id }): Query<ArticleIdParams>,
) -> HttpResult<Json<PermissionDto>> {
    state
        .services
        .article_queries
        .can_manage_article(user.as_ref(), ArticlePermissionQuery { id })
        .await
        .into_http()
        .map(Json)
}
