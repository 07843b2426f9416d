// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::article_permission,
        crate::presentation::http::controllers::slug::check_slug,
        crate::presentation::http::controllers::comments::list_comments,
        crate::presentation::http::controllers::comments::comment_tree,
        crate::presentation::http::controllers::comments::create_comment,
        crate::presentation::http::controllers::comments::delete_comment,
        crate::presentation::http::controllers::tags::list_tags,
        crate::presentation::http::controllers::tags::create_tag,
        crate::presentation::http::controllers::session::current_user,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::comments::CreateCommentRequest,
            crate::presentation::http::controllers::tags::CreateTagRequest,
            crate::presentation::http::controllers::tags::TagsResponse,
            crate::application::dto::ArticleDto,
            crate::application::dto::SlugAvailabilityDto,
            crate::application::dto::PermissionDto,
            crate::application::dto::CommentDto,
            crate::application::dto::TagDto,
            crate::application::dto::TagWithArticlesDto,
            crate::application::dto::UserProfileDto
        )
    ),
    tags(
        (name = "Articles", description = "Articles, slugs and permissions"),
        (name = "Comments", description = "Threaded article comments"),
        (name = "Tags", description = "Tag catalogue"),
        (name = "Session", description = "Current session"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Fumi API",
        description = "Personal blogging backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub const SESSION_COOKIE_SCHEME: &str = "sessionCookie";
pub const BEARER_SCHEME: &str = "bearerAuth";

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            BEARER_SCHEME,
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
        let cookie_name = env::var("SESSION_COOKIE_NAME")
            .unwrap_or_else(|_| crate::config::DEFAULT_SESSION_COOKIE.to_string());
        components.add_security_scheme(
            SESSION_COOKIE_SCHEME,
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(cookie_name))),
        );

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();
        let url = env::var("PUBLIC_API_URL")
            .ok()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| "http://localhost:8080".to_string());
        servers.push(Server::new(url));
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new()
        .route("/api-docs/openapi.json", get(serve_openapi))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/articles",
            "/api/article",
            "/api/article/permission",
            "/api/slug-check",
            "/api/comments",
            "/api/comments/tree",
            "/api/tags",
            "/api/me",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn session_schemes_are_declared() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key(BEARER_SCHEME));
        assert!(components.security_schemes.contains_key(SESSION_COOKIE_SCHEME));
    }
}
