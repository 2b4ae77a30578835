//! Router assembly

use std::path::Path;

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::HeaderValue;
use axum::response::IntoResponse;
use axum::routing::{any, get};
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::health::health_handler;
use crate::proxy::{proxy_handler, CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS};
use crate::state::AppState;

/// Build the gateway router.
///
/// `/api/health` and `/api/{*path}` carry permissive CORS headers on every
/// response, replacing whatever the backend sent. Request bodies are not
/// size-limited; the backend decides what it accepts. When `site_root` is set,
/// everything else is served from it with `index.html` as the SPA fallback.
pub fn build_router(state: AppState, site_root: Option<&Path>) -> Router {
    let api = Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/{*path}", any(proxy_handler))
        .layer(DefaultBodyLimit::disable())
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(CORS_ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        ));

    let mut router = Router::new()
        .route("/health", get(liveness_handler))
        .merge(api);

    if let Some(root) = site_root {
        tracing::debug!("Serving dashboard from {}", root.display());
        let index = ServeFile::new(root.join("index.html"));
        router = router.fallback_service(ServeDir::new(root).fallback(index));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn liveness_handler() -> impl IntoResponse {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::BackendConfig;
    use crate::io::MockUpstream;

    fn state() -> AppState {
        AppState::new(
            Arc::new(MockUpstream::new()),
            BackendConfig::default(),
            "test",
        )
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn liveness_returns_ok_without_cors() {
        let app = build_router(state(), None);
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get(ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn unknown_path_without_site_root_is_404() {
        let (status, _) = get_body(build_router(state(), None), "/ads").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn serves_static_files_and_spa_fallback() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>dashboard</html>").unwrap();
        std::fs::create_dir(dir.path().join("pkg")).unwrap();
        std::fs::write(dir.path().join("pkg").join("app.js"), "console.log(1)").unwrap();

        let (status, body) =
            get_body(build_router(state(), Some(dir.path())), "/pkg/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log(1)");

        let (status, body) =
            get_body(build_router(state(), Some(dir.path())), "/lp-analysis").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("dashboard"));
    }
}
