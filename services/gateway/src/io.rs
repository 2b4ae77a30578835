//! Upstream HTTP abstraction for testability

use std::time::Duration;

use async_trait::async_trait;
use axum::body::Bytes;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};

/// A request to forward to the backend
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Bytes,
    pub timeout: Duration,
}

/// What came back from the backend
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

/// Abstraction over the outbound HTTP client for dependency injection
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait Upstream: Send + Sync {
    /// Send a request, bounded by `request.timeout`
    async fn send(&self, request: UpstreamRequest) -> crate::Result<UpstreamResponse>;
}

/// Production upstream using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestUpstream {
    client: reqwest::Client,
}

impl ReqwestUpstream {
    pub fn new() -> crate::Result<Self> {
        // Redirects are handed back to the caller untouched
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| crate::GatewayError::Http(format!("Building HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

fn classify(context: &str, e: reqwest::Error) -> crate::GatewayError {
    if e.is_timeout() {
        crate::GatewayError::Timeout(format!("{}: {}", context, e))
    } else if e.is_connect() {
        crate::GatewayError::Connection(format!("{}: {}", context, e))
    } else {
        crate::GatewayError::Http(format!("{}: {}", context, e))
    }
}

#[async_trait]
impl Upstream for ReqwestUpstream {
    async fn send(&self, request: UpstreamRequest) -> crate::Result<UpstreamResponse> {
        let UpstreamRequest {
            method,
            url,
            headers,
            body,
            timeout,
        } = request;
        tracing::debug!("{} {}", method, url);

        let mut builder = self
            .client
            .request(method.clone(), &url)
            .headers(headers)
            .timeout(timeout);
        if !body.is_empty() {
            builder = builder.body(body);
        }

        let context = format!("{} {}", method, url);
        let response = builder.send().await.map_err(|e| classify(&context, e))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .cloned();
        let body = response
            .bytes()
            .await
            .map_err(|e| classify(&format!("Reading response body of {}", context), e))?;

        tracing::debug!("{} -> {} ({} bytes)", context, status, body.len());
        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}
