//! `/api/health`: combined frontend and backend diagnostics

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::config::BackendConfig;
use crate::io::{Upstream, UpstreamRequest};
use crate::state::AppState;
use crate::GatewayError;

/// Outcome of the backend health check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendHealth {
    Ok,
    /// Backend answered with a non-2xx status
    Error,
    Timeout,
    Unreachable,
}

/// Body of the health response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub frontend: String,
    pub backend: BackendHealth,
    pub backend_url: String,
    pub backend_status: Option<u16>,
    pub backend_response: Option<serde_json::Value>,
    pub error: Option<String>,
    pub latency_ms: u64,
    pub timestamp: String,
    pub environment: String,
    pub version: String,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.backend == BackendHealth::Ok
    }
}

/// Probe `{backend}/health`, bounded by the configured health timeout
pub async fn check_backend(
    upstream: &dyn Upstream,
    backend: &BackendConfig,
    environment: &str,
) -> HealthReport {
    let url = backend.url_for("/health");
    let request = UpstreamRequest {
        method: Method::GET,
        url: url.clone(),
        headers: HeaderMap::new(),
        body: Bytes::new(),
        timeout: backend.health_timeout,
    };

    let started = Instant::now();
    let result = upstream.send(request).await;
    let latency_ms = started.elapsed().as_millis() as u64;

    let (health, backend_status, backend_response, error) = match result {
        Ok(response) => {
            let parsed = serde_json::from_slice::<serde_json::Value>(&response.body).ok();
            if response.status.is_success() {
                (BackendHealth::Ok, Some(response.status.as_u16()), parsed, None)
            } else {
                (
                    BackendHealth::Error,
                    Some(response.status.as_u16()),
                    parsed,
                    Some(format!("Backend returned status {}", response.status)),
                )
            }
        }
        Err(e @ GatewayError::Timeout(_)) => {
            (BackendHealth::Timeout, None, None, Some(e.to_string()))
        }
        Err(e) => (BackendHealth::Unreachable, None, None, Some(e.to_string())),
    };

    if health != BackendHealth::Ok {
        tracing::warn!("Backend health check against {} failed: {:?}", url, error);
    }

    HealthReport {
        status: if health == BackendHealth::Ok {
            "ok".to_string()
        } else {
            "degraded".to_string()
        },
        frontend: "ok".to_string(),
        backend: health,
        backend_url: backend.url.clone(),
        backend_status,
        backend_response,
        error,
        latency_ms,
        timestamp: chrono::Utc::now().to_rfc3339(),
        environment: environment.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let report = check_backend(state.upstream.as_ref(), &state.backend, &state.environment).await;
    let status = if report.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(report))
}
