//! BDD test world for the gateway
//!
//! Each scenario gets an in-process fake backend bound to an ephemeral
//! port and a real gateway pointed at it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use cucumber::World;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use adintel_gateway::Config;

/// A request as seen by the fake backend
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path_and_query: String,
    pub headers: HeaderMap,
    pub body: String,
}

/// Canned responses keyed by `"METHOD /path"`, plus everything received
#[derive(Debug, Default)]
pub struct BackendScript {
    pub responses: HashMap<String, (u16, String)>,
    pub delay: Option<Duration>,
    pub received: Vec<RecordedRequest>,
}

pub type SharedScript = Arc<Mutex<BackendScript>>;

#[derive(Debug, Default, World)]
pub struct GatewayWorld {
    pub script: SharedScript,
    pub backend_url: Option<String>,
    pub proxy_timeout: Option<Duration>,
    pub health_timeout: Option<Duration>,
    pub gateway_url: Option<String>,
    pub cancel: CancellationToken,

    pub response_status: Option<u16>,
    pub response_headers: Option<reqwest::header::HeaderMap>,
    pub response_body: Option<String>,
}

impl Drop for GatewayWorld {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn backend_handler(
    State(script): State<SharedScript>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    let (delay, canned) = {
        let mut script = script.lock().unwrap();
        script.received.push(RecordedRequest {
            method: method.to_string(),
            path_and_query: path_and_query.clone(),
            headers,
            body: String::from_utf8_lossy(&body).to_string(),
        });
        let key = format!("{} {}", method, uri.path());
        (script.delay, script.responses.get(&key).cloned())
    };

    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    match canned {
        Some((status, body)) => (
            StatusCode::from_u16(status).unwrap(),
            [("content-type", "application/json"), ("access-control-allow-origin", "https://backend.example")],
            body,
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [("content-type", "application/json")],
            r#"{"detail":"Not Found"}"#.to_string(),
        )
            .into_response(),
    }
}

impl GatewayWorld {
    /// Start the fake backend (once per scenario)
    pub async fn start_backend(&mut self) {
        if self.backend_url.is_some() {
            return;
        }
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = Router::new()
            .fallback(backend_handler)
            .with_state(Arc::clone(&self.script));
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move { cancel.cancelled().await })
                .await
                .ok();
        });
        self.backend_url = Some(format!("http://{}", addr));
    }

    /// Start the gateway against whichever backend URL is configured
    pub async fn start_gateway(&mut self) -> String {
        if let Some(url) = &self.gateway_url {
            return url.clone();
        }
        let mut config = Config::default();
        if let Some(url) = &self.backend_url {
            config.backend.url = url.clone();
        }
        if let Some(timeout) = self.proxy_timeout {
            config.backend.proxy_timeout = timeout;
        }
        if let Some(timeout) = self.health_timeout {
            config.backend.health_timeout = timeout;
        }

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(adintel_gateway::serve(listener, config, self.cancel.clone()));

        let url = format!("http://{}", addr);
        self.gateway_url = Some(url.clone());
        url
    }

    pub async fn send(&mut self, method: &str, path: &str, headers: &[(&str, &str)], body: Option<String>) {
        let base = self.start_gateway().await;
        let client = reqwest::Client::new();
        let method = reqwest::Method::from_bytes(method.as_bytes()).unwrap();
        let mut request = client.request(method, format!("{}{}", base, path));
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        if let Some(body) = body {
            request = request.body(body);
        }
        let response = request.send().await.expect("gateway unreachable");
        self.response_status = Some(response.status().as_u16());
        self.response_headers = Some(response.headers().clone());
        self.response_body = Some(response.text().await.unwrap());
    }

    pub fn last_received(&self) -> RecordedRequest {
        self.script
            .lock()
            .unwrap()
            .received
            .last()
            .cloned()
            .expect("backend received no request")
    }
}
