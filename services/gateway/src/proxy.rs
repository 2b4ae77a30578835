//! Catch-all `/api/*` forwarding to the backend

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::io::UpstreamRequest;
use crate::state::AppState;

/// Methods the proxy forwards; anything else gets a 405
pub const FORWARDED_METHODS: [Method; 6] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::PATCH,
    Method::OPTIONS,
];

/// Value of `access-control-allow-methods` on every API response
pub const CORS_ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, PATCH, OPTIONS";
/// Value of `access-control-allow-headers` on every API response
pub const CORS_ALLOW_HEADERS: &str = "Content-Type, Authorization";

fn is_bearer(value: &HeaderValue) -> bool {
    value
        .to_str()
        .ok()
        .and_then(|v| v.get(..7))
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("bearer "))
}

/// Reduce incoming headers to the allow-list: `content-type` and a
/// bearer `authorization`. Everything else is dropped.
pub fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Some(content_type) = incoming.get(CONTENT_TYPE) {
        headers.insert(CONTENT_TYPE, content_type.clone());
    }
    if let Some(auth) = incoming.get(AUTHORIZATION).filter(|v| is_bearer(v)) {
        headers.insert(AUTHORIZATION, auth.clone());
    }
    headers
}

pub async fn proxy_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if !FORWARDED_METHODS.contains(&method) {
        tracing::debug!("Rejecting {} {}", method, uri);
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(serde_json::json!({
                "error": "method_not_allowed",
                "message": format!("{} is not supported by the API proxy", method),
            })),
        )
            .into_response();
    }

    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let request = UpstreamRequest {
        method: method.clone(),
        url: state.backend.url_for(path_and_query),
        headers: forwarded_headers(&headers),
        body,
        timeout: state.backend.proxy_timeout,
    };

    match state.upstream.send(request).await {
        Ok(upstream) => {
            tracing::debug!("{} {} -> {}", method, path_and_query, upstream.status);
            let mut response = (upstream.status, upstream.body).into_response();
            match upstream.content_type {
                Some(content_type) => {
                    response.headers_mut().insert(CONTENT_TYPE, content_type);
                }
                None => {
                    response.headers_mut().remove(CONTENT_TYPE);
                }
            }
            response
        }
        Err(e) => {
            tracing::warn!("Proxying {} {} failed: {}", method, path_and_query, e);
            e.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::Request;
    use proptest::prelude::*;
    use tower::ServiceExt;

    use crate::config::BackendConfig;
    use crate::io::{MockUpstream, UpstreamResponse};
    use crate::server::build_router;

    fn state_with(mock: MockUpstream) -> AppState {
        let backend = BackendConfig {
            url: "http://backend:8000".to_string(),
            proxy_timeout: Duration::from_secs(30),
            health_timeout: Duration::from_secs(5),
        };
        AppState::new(Arc::new(mock), backend, "test")
    }

    fn json_response(status: StatusCode, body: &'static str) -> crate::Result<UpstreamResponse> {
        Ok(UpstreamResponse {
            status,
            content_type: Some(HeaderValue::from_static("application/json")),
            body: Bytes::from_static(body.as_bytes()),
        })
    }

    async fn body_string(response: Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[test]
    fn only_allow_listed_headers_survive() {
        let mut incoming = HeaderMap::new();
        incoming.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        incoming.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        incoming.insert("cookie", HeaderValue::from_static("session=1"));
        incoming.insert("x-forwarded-for", HeaderValue::from_static("10.0.0.1"));
        incoming.insert("host", HeaderValue::from_static("dashboard.local"));

        let forwarded = forwarded_headers(&incoming);

        assert_eq!(forwarded.len(), 2);
        assert_eq!(forwarded[CONTENT_TYPE], "application/json");
        assert_eq!(forwarded[AUTHORIZATION], "Bearer abc");
    }

    #[test]
    fn non_bearer_authorization_is_stripped() {
        let mut incoming = HeaderMap::new();
        incoming.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
        assert!(forwarded_headers(&incoming).is_empty());

        incoming.insert(AUTHORIZATION, HeaderValue::from_static("bearer lower"));
        assert_eq!(forwarded_headers(&incoming)[AUTHORIZATION], "bearer lower");

        incoming.insert(AUTHORIZATION, HeaderValue::from_static("Bear"));
        assert!(forwarded_headers(&incoming).is_empty());
    }

    proptest! {
        #[test]
        fn arbitrary_headers_never_forwarded(name in "x-[a-z]{1,12}", value in "[a-zA-Z0-9 ]{0,20}") {
            let mut incoming = HeaderMap::new();
            incoming.insert(
                axum::http::HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(&value).unwrap(),
            );
            prop_assert!(forwarded_headers(&incoming).is_empty());
        }
    }

    #[tokio::test]
    async fn forwards_path_query_method_and_body() {
        let mut mock = MockUpstream::new();
        mock.expect_send()
            .withf(|req| {
                req.method == Method::POST
                    && req.url == "http://backend:8000/api/v1/ads/saved?source=list"
                    && &req.body[..] == br#"{"item_id":"a1"}"#
                    && req.timeout == Duration::from_secs(30)
                    && req.headers.get("cookie").is_none()
            })
            .returning(|_| {
                Box::pin(async { json_response(StatusCode::CREATED, r#"{"id":"s1"}"#) })
            });

        let app = build_router(state_with(mock), None);
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/ads/saved?source=list")
                    .header("content-type", "application/json")
                    .header("cookie", "session=1")
                    .body(Body::from(r#"{"item_id":"a1"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(body_string(response).await, r#"{"id":"s1"}"#);
    }

    #[tokio::test]
    async fn bodies_over_two_mebibytes_are_forwarded() {
        const SIZE: usize = 3 * 1024 * 1024;

        let mut mock = MockUpstream::new();
        mock.expect_send()
            .withf(|req| req.body.len() == SIZE)
            .times(1)
            .returning(|req| {
                let body = format!(r#"{{"received":{}}}"#, req.body.len());
                Box::pin(async move {
                    Ok(UpstreamResponse {
                        status: StatusCode::OK,
                        content_type: Some(HeaderValue::from_static("application/json")),
                        body: Bytes::from(body),
                    })
                })
            });

        let app = build_router(state_with(mock), None);
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/creative/generate")
                    .header("content-type", "application/octet-stream")
                    .body(Body::from(vec![b'x'; SIZE]))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, format!(r#"{{"received":{}}}"#, SIZE));
    }

    #[tokio::test]
    async fn upstream_error_status_is_preserved() {
        let mut mock = MockUpstream::new();
        mock.expect_send().returning(|_| {
            Box::pin(async { json_response(StatusCode::NOT_FOUND, r#"{"detail":"Not found"}"#) })
        });

        let app = build_router(state_with(mock), None);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/ads/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(response).await, r#"{"detail":"Not found"}"#);
    }

    #[tokio::test]
    async fn timeout_becomes_504_with_cors() {
        let mut mock = MockUpstream::new();
        mock.expect_send().returning(|_| {
            Box::pin(async { Err(crate::GatewayError::Timeout("30s elapsed".to_string())) })
        });

        let app = build_router(state_with(mock), None);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/analytics/summary")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"], "timeout");
    }

    #[tokio::test]
    async fn connection_failure_becomes_502() {
        let mut mock = MockUpstream::new();
        mock.expect_send().returning(|_| {
            Box::pin(async { Err(crate::GatewayError::Connection("refused".to_string())) })
        });

        let app = build_router(state_with(mock), None);
        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/v1/notifications/n1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn cors_headers_override_upstream_values() {
        let mut mock = MockUpstream::new();
        mock.expect_send().returning(|_| {
            Box::pin(async {
                Ok(UpstreamResponse {
                    status: StatusCode::NO_CONTENT,
                    content_type: None,
                    body: Bytes::new(),
                })
            })
        });

        let app = build_router(state_with(mock), None);
        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/v1/ads")
                    .header("origin", "https://elsewhere.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(headers["access-control-allow-methods"], CORS_ALLOW_METHODS);
        assert_eq!(headers["access-control-allow-headers"], CORS_ALLOW_HEADERS);
        assert!(headers.get(CONTENT_TYPE).is_none());
    }

    #[tokio::test]
    async fn unsupported_method_is_rejected_without_forwarding() {
        let mock = MockUpstream::new();

        let app = build_router(state_with(mock), None);
        let response = app
            .oneshot(
                Request::builder()
                    .method("TRACE")
                    .uri("/api/v1/ads")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }
}
