// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{CreateCommentCommand, DeleteCommentCommand},
    dto::{CommentDto, CommentNodeDto},
    queries::comments::{CommentTreeQuery, ListCommentsQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query, http::StatusCode};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommentListParams {
    #[serde(rename = "articleId")]
    pub article_id: Option<i64>,
    pub id: Option<i64>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommentTreeParams {
    #[serde(rename = "articleId")]
    pub article_id: i64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommentIdParams {
    pub id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    pub content: String,
    #[serde(alias = "articleId")]
    pub article_id: i64,
    #[serde(default, alias = "parent_Id", alias = "parentId")]
    pub parent_id: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/comments",
    params(CommentListParams),
    responses(
        (status = 200, description = "Matching comments, oldest first.", body = [CommentDto])
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Query(params): Query<CommentListParams>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .comment_queries
        .list_comments(ListCommentsQuery {
            article_id: params.article_id,
            id: params.id,
        })
        .await
        .into_http()
        .map(Json)
}

/// Nodes are `CommentDto` fields plus `depth`, `can_reply` and `children`.
#[utoipa::path(
    get,
    path = "/api/comments/tree",
    params(CommentTreeParams),
    responses(
        (status = 200, description = "Reply forest of one article.")
    ),
    tag = "Comments"
)]
pub async fn comment_tree(
    Extension(state): Extension<HttpState>,
    Query(CommentTreeParams { article_id }): Query<CommentTreeParams>,
) -> HttpResult<Json<Vec<CommentNodeDto>>> {
    state
        .services
        .comment_queries
        .comment_tree(CommentTreeQuery { article_id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created.", body = CommentDto),
        (status = 400, description = "Empty content or parent on another article.", body = ErrorResponse),
        (status = 401, description = "Not signed in.", body = ErrorResponse),
        (status = 404, description = "Article or parent comment missing.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let command = CreateCommentCommand {
        article_id: payload.article_id,
        content: payload.content,
        parent_id: payload.parent_id,
    };

    let comment = state
        .services
        .comment_commands
        .create_comment(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(comment)))
}

#[utoipa::path(
    delete,
    path = "/api/comments",
    params(CommentIdParams),
    responses(
        (status = 200, description = "Comment deleted."),
        (status = 401, description = "Not signed in.", body = ErrorResponse),
        (status = 403, description = "Neither author nor administrator.", body = ErrorResponse),
        (status = 404, description = "No such comment.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(CommentIdParams { id }): Query<CommentIdParams>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .comment_commands
        .delete_comment(&user, DeleteCommentCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
