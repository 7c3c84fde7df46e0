pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::auth;
use crate::generation::handlers;
use crate::pages;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Only the page routes sit behind the cookie gate; the API and health
    // endpoints are always reachable.
    let page_routes = Router::new()
        .route("/", get(pages::index))
        .route("/create/:type", get(pages::create))
        .route(auth::LOGIN_PATH, get(pages::auth))
        .route_layer(middleware::from_fn(auth::page_gate));

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/generate", post(handlers::handle_generate))
        .merge(page_routes)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::build_router;
    use crate::config::Config;
    use crate::llm_client::LlmClient;
    use crate::state::AppState;

    fn test_app() -> axum::Router {
        build_router(AppState {
            llm: LlmClient::new("test-key".to_string()),
            config: Config {
                deepseek_api_key: Some("test-key".to_string()),
                port: 8080,
                rust_log: "info".to_string(),
            },
        })
    }

    fn page_request(path: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(path);
        if let Some(c) = cookie {
            builder = builder.header(header::COOKIE, c);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn location(response: &axum::response::Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn health_is_always_reachable() {
        let response = test_app()
            .oneshot(page_request("/health", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn pages_redirect_to_login_without_cookie() {
        for path in ["/", "/create/general"] {
            let response = test_app().oneshot(page_request(path, None)).await.unwrap();
            assert_eq!(
                response.status(),
                StatusCode::TEMPORARY_REDIRECT,
                "path {path}"
            );
            assert_eq!(location(&response), "/auth");
        }
    }

    #[tokio::test]
    async fn pages_serve_with_cookie() {
        for path in ["/", "/create/general"] {
            let response = test_app()
                .oneshot(page_request(path, Some("authToken=abc")))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "path {path}");
        }
    }

    #[tokio::test]
    async fn login_page_redirects_home_when_already_authenticated() {
        let response = test_app()
            .oneshot(page_request("/auth", Some("authToken=abc")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn login_page_serves_without_cookie() {
        let response = test_app()
            .oneshot(page_request("/auth", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_form_key_redirects_to_index() {
        let response = test_app()
            .oneshot(page_request("/create/nope", Some("authToken=abc")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn api_is_not_cookie_gated() {
        // No cookie: the API must answer with its own error semantics, not a
        // login redirect.
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/generate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"type":"nope","content":"x"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
