//! Browser bindings for the API client
//!
//! Requests go to the page's own origin, where the gateway proxies `/api/*`
//! to the backend. Outside the browser (native builds and tests) the
//! transport reports a network error and views fall back to their empty
//! state.

use adintel_client::{ApiClient, ApiError, HttpRequest, HttpResponse, Locale, TokenStore, Transport};
use async_trait::async_trait;

/// Client type shared by every view
pub type DashboardClient = ApiClient<BrowserTransport, BrowserTokenStore>;

pub fn client() -> DashboardClient {
    ApiClient::new(BrowserTransport, BrowserTokenStore)
}

/// `fetch`-based transport via gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> adintel_client::Result<HttpResponse> {
        #[cfg(all(feature = "csr", target_arch = "wasm32"))]
        {
            use adintel_client::HttpMethod;
            use gloo_net::http::Request;

            let url = &request.path;
            let mut builder = match request.method {
                HttpMethod::Get => Request::get(url),
                HttpMethod::Post => Request::post(url),
                HttpMethod::Put => Request::put(url),
                HttpMethod::Patch => Request::patch(url),
                HttpMethod::Delete => Request::delete(url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let prepared = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(format!("{}", e)))?;

            let response = prepared
                .send()
                .await
                .map_err(|e| ApiError::Network(format!("{}", e)))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Network(format!("{}", e)))?;
            Ok(HttpResponse { status, body })
        }

        #[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
        {
            Err(ApiError::Network(format!(
                "no browser available for {} {}",
                request.method, request.path
            )))
        }
    }
}

/// Token persisted in `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(all(feature = "csr", target_arch = "wasm32"))]
        {
            storage()?
                .get_item(adintel_client::TOKEN_STORAGE_KEY)
                .ok()
                .flatten()
        }

        #[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(all(feature = "csr", target_arch = "wasm32"))]
        {
            let persisted = storage()
                .map(|s| s.set_item(adintel_client::TOKEN_STORAGE_KEY, token).is_ok())
                .unwrap_or(false);
            if !persisted {
                leptos::logging::error!("Failed to persist auth token");
            }
        }

        #[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
        let _ = token;
    }

    fn clear(&self) {
        #[cfg(all(feature = "csr", target_arch = "wasm32"))]
        {
            if let Some(storage) = storage() {
                let _ = storage.remove_item(adintel_client::TOKEN_STORAGE_KEY);
            }
        }
    }
}

/// Locale from `navigator.language`, English when unavailable
pub fn browser_locale() -> Locale {
    #[cfg(all(feature = "csr", target_arch = "wasm32"))]
    {
        web_sys::window()
            .and_then(|w| w.navigator().language())
            .map(|tag| Locale::from_tag(&tag))
            .unwrap_or_default()
    }

    #[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
    {
        Locale::default()
    }
}
