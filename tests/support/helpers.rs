// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{
    FailingArticleRepo, InMemoryArticles, InMemoryComments, InMemoryTags, ManualClock,
    StaticSessionAuthority,
};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use fumi_core::application::services::ApplicationServices;
use fumi_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use tower::util::ServiceExt as _;

pub const TEST_COOKIE: &str = "fumi_session";

/// インメモリリポジトリで組み立てたアプリケーション一式
pub struct TestApp {
    pub router: Router,
    pub services: Arc<ApplicationServices>,
    pub articles: Arc<InMemoryArticles>,
    pub comments: Arc<InMemoryComments>,
    pub tags: Arc<InMemoryTags>,
}

impl TestApp {
    pub fn new() -> Self {
        let articles = Arc::new(InMemoryArticles::default());
        let comments = Arc::new(InMemoryComments::default());
        let tags = Arc::new(InMemoryTags::default());

        let services = Arc::new(ApplicationServices::new(
            articles.clone(),
            articles.clone(),
            comments.clone(),
            tags.clone(),
            Arc::new(StaticSessionAuthority::default()),
            Arc::new(ManualClock::stepping()),
        ));

        let state = HttpState::new(Arc::clone(&services), TEST_COOKIE);
        let router = build_router(state, &["http://localhost:3000".to_string()]);

        Self {
            router,
            services,
            articles,
            comments,
            tags,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        (status, read_json(response).await)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }
}

/// 記事リポジトリが常に失敗するルーター
pub fn failing_router() -> Router {
    let services = Arc::new(ApplicationServices::new(
        Arc::new(FailingArticleRepo),
        Arc::new(FailingArticleRepo),
        Arc::new(InMemoryComments::default()),
        Arc::new(InMemoryTags::default()),
        Arc::new(StaticSessionAuthority::default()),
        Arc::new(ManualClock::frozen()),
    ));
    build_router(HttpState::new(services, TEST_COOKIE), &[])
}

pub async fn read_json(response: axum::response::Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("expected json body")
    }
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
