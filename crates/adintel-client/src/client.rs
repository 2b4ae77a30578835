//! API client with bearer-token injection

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::endpoints::{AdQuery, Endpoint};
use crate::envelope::ListEnvelope;
use crate::error::{ApiError, Result};
use crate::models::{
    Ad, AdAnalysis, AnalyticsSummary, ApiKeyStatus, ApiKeyUpdate, Competitor, CreativeRequest,
    CreativeResponse, LandingPage, LoginRequest, LpAnalyzeRequest, Notification,
    NotificationSettings, Prediction, Ranking, SaveItemRequest, SavedItem, TokenResponse, User,
};
use crate::token::TokenStore;
use crate::transport::{HttpRequest, HttpResponse, Transport};

/// Typed client for the `/api/v1` surface
pub struct ApiClient<T, S> {
    transport: T,
    tokens: S,
}

impl<T, S> std::fmt::Debug for ApiClient<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}

impl<T: Transport, S: TokenStore> ApiClient<T, S> {
    pub fn new(transport: T, tokens: S) -> Self {
        Self { transport, tokens }
    }

    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    pub fn is_authenticated(&self) -> bool {
        self.tokens.get().is_some()
    }

    fn build_request(&self, endpoint: &Endpoint, body: Option<String>) -> HttpRequest {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        if let Some(token) = self.tokens.get() {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        HttpRequest {
            method: endpoint.method(),
            path: endpoint.path(),
            headers,
            body,
        }
    }

    /// Send a request and return the raw 2xx response
    async fn execute(&self, endpoint: &Endpoint, body: Option<String>) -> Result<HttpResponse> {
        let request = self.build_request(endpoint, body);
        tracing::debug!("{} {}", request.method, request.path);

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("{} {} failed: {}", endpoint.method(), endpoint.path(), e);
                return Err(e);
            }
        };

        tracing::debug!(
            "{} {} -> {} ({} bytes)",
            endpoint.method(),
            endpoint.path(),
            response.status,
            response.body.len()
        );

        if response.status == 401 {
            tracing::debug!("Unauthorized response, clearing stored token");
            self.tokens.clear();
        }

        if !response.is_success() {
            return Err(classify_failure(&response));
        }

        Ok(response)
    }

    async fn fetch<R: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<R> {
        let response = self.execute(&endpoint, None).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    async fn send_json<B, R>(&self, endpoint: Endpoint, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_string(body)?;
        let response = self.execute(&endpoint, Some(body)).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    /// For endpoints whose success body carries nothing the views need
    async fn send_unit(&self, endpoint: Endpoint, body: Option<String>) -> Result<()> {
        self.execute(&endpoint, body).await.map(|_| ())
    }

    async fn fetch_list<R: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<Vec<R>> {
        let list: ListEnvelope<R> = self.fetch(endpoint).await?;
        Ok(list.into_items())
    }

    // ads

    pub async fn list_ads(&self, query: &AdQuery) -> Result<ListEnvelope<Ad>> {
        self.fetch(Endpoint::ListAds(query.clone())).await
    }

    pub async fn get_ad(&self, id: &str) -> Result<Ad> {
        self.fetch(Endpoint::GetAd(id.to_string())).await
    }

    pub async fn get_ad_analysis(&self, id: &str) -> Result<AdAnalysis> {
        self.fetch(Endpoint::GetAdAnalysis(id.to_string())).await
    }

    /// Ask the backend to (re)analyze an ad
    pub async fn analyze_ad(&self, id: &str) -> Result<AdAnalysis> {
        self.send_json(Endpoint::AnalyzeAd(id.to_string()), &serde_json::json!({}))
            .await
    }

    pub async fn list_saved(&self) -> Result<Vec<SavedItem>> {
        self.fetch_list(Endpoint::ListSaved).await
    }

    pub async fn save_item(&self, request: &SaveItemRequest) -> Result<SavedItem> {
        self.send_json(Endpoint::SaveItem, request).await
    }

    pub async fn remove_saved(&self, id: &str) -> Result<()> {
        self.send_unit(Endpoint::RemoveSaved(id.to_string()), None)
            .await
    }

    // creative

    pub async fn generate_creative(&self, request: &CreativeRequest) -> Result<CreativeResponse> {
        request.validate()?;
        self.send_json(Endpoint::GenerateCreative, request).await
    }

    // predictions / analytics / rankings

    pub async fn get_prediction(&self, ad_id: &str) -> Result<Prediction> {
        self.fetch(Endpoint::GetPrediction(ad_id.to_string())).await
    }

    pub async fn analytics_summary(&self) -> Result<AnalyticsSummary> {
        self.fetch(Endpoint::AnalyticsSummary).await
    }

    pub async fn list_rankings(&self) -> Result<Vec<Ranking>> {
        self.fetch_list(Endpoint::ListRankings).await
    }

    // lp-analysis

    pub async fn list_landing_pages(&self) -> Result<Vec<LandingPage>> {
        self.fetch_list(Endpoint::ListLandingPages).await
    }

    pub async fn get_landing_page(&self, id: &str) -> Result<LandingPage> {
        self.fetch(Endpoint::GetLandingPage(id.to_string())).await
    }

    pub async fn analyze_landing_page(&self, url: &str) -> Result<LandingPage> {
        let url = url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ApiError::Validation(
                "URL must start with http:// or https://".to_string(),
            ));
        }
        let request = LpAnalyzeRequest {
            url: url.to_string(),
        };
        self.send_json(Endpoint::AnalyzeLandingPage, &request).await
    }

    // competitive

    pub async fn list_competitors(&self) -> Result<Vec<Competitor>> {
        self.fetch_list(Endpoint::ListCompetitors).await
    }

    pub async fn competitor_landing_pages(&self, competitor_id: &str) -> Result<Vec<LandingPage>> {
        self.fetch_list(Endpoint::CompetitorLandingPages(competitor_id.to_string()))
            .await
    }

    // notifications

    pub async fn list_notifications(&self) -> Result<Vec<Notification>> {
        self.fetch_list(Endpoint::ListNotifications).await
    }

    pub async fn mark_notification_read(&self, id: &str) -> Result<()> {
        self.send_unit(Endpoint::MarkNotificationRead(id.to_string()), None)
            .await
    }

    pub async fn delete_notification(&self, id: &str) -> Result<()> {
        self.send_unit(Endpoint::DeleteNotification(id.to_string()), None)
            .await
    }

    // settings

    pub async fn api_keys(&self) -> Result<Vec<ApiKeyStatus>> {
        self.fetch_list(Endpoint::GetApiKeys).await
    }

    pub async fn update_api_key(&self, update: &ApiKeyUpdate) -> Result<ApiKeyStatus> {
        update.validate()?;
        self.send_json(Endpoint::UpdateApiKey, update).await
    }

    pub async fn delete_api_key(&self, provider: &str) -> Result<()> {
        self.send_unit(Endpoint::DeleteApiKey(provider.to_string()), None)
            .await
    }

    pub async fn notification_settings(&self) -> Result<NotificationSettings> {
        self.fetch(Endpoint::GetNotificationSettings).await
    }

    pub async fn update_notification_settings(
        &self,
        settings: &NotificationSettings,
    ) -> Result<NotificationSettings> {
        self.send_json(Endpoint::UpdateNotificationSettings, settings)
            .await
    }

    // auth

    /// Log in and persist the returned token
    pub async fn login(&self, request: &LoginRequest) -> Result<User> {
        let token: TokenResponse = self.send_json(Endpoint::Login, request).await?;
        self.tokens.set(&token.access_token);
        self.me().await
    }

    pub async fn me(&self) -> Result<User> {
        self.fetch(Endpoint::Me).await
    }

    pub fn logout(&self) {
        self.tokens.clear();
    }
}

/// Map a non-2xx response onto the error taxonomy. The gateway reports its
/// own timeouts and connection failures as `{"error": "timeout"}` (504) and
/// `{"error": "connection_error"}` (502); anything else is a plain status.
fn classify_failure(response: &HttpResponse) -> ApiError {
    let kind = serde_json::from_str::<serde_json::Value>(&response.body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string));
    match (response.status, kind.as_deref()) {
        (504, Some("timeout")) => ApiError::Timeout,
        (502, Some("connection_error")) => ApiError::Network(error_detail(&response.body)),
        (status, _) => ApiError::Status {
            status,
            message: error_detail(&response.body),
        },
    }
}

/// Pull a human-readable reason out of an error body
fn error_detail(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.trim().chars().take(200).collect();
    };
    ["detail", "message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::to_string)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Platform;
    use crate::token::MemoryTokenStore;
    use crate::transport::{HttpMethod, MockTransport};

    fn ok(body: &str) -> Result<HttpResponse> {
        Ok(HttpResponse {
            status: 200,
            body: body.to_string(),
        })
    }

    fn status(code: u16, body: &str) -> Result<HttpResponse> {
        Ok(HttpResponse {
            status: code,
            body: body.to_string(),
        })
    }

    #[tokio::test]
    async fn attaches_bearer_token_when_present() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .withf(|req| {
                req.header("Authorization") == Some("Bearer secret")
                    && req.method == HttpMethod::Get
                    && req.path == "/api/v1/ads"
            })
            .returning(|_| Box::pin(async { ok(r#"{"items": []}"#) }));

        let client = ApiClient::new(mock, MemoryTokenStore::with_token("secret"));
        let ads = client.list_ads(&AdQuery::default()).await.unwrap();
        assert!(ads.is_empty());
    }

    #[tokio::test]
    async fn omits_authorization_without_token() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .withf(|req| req.header("Authorization").is_none())
            .returning(|_| Box::pin(async { ok(r#"{"results": [{"id": "a1"}]}"#) }));

        let client = ApiClient::new(mock, MemoryTokenStore::default());
        let ads = tokio_test::assert_ok!(client.list_ads(&AdQuery::default()).await);
        assert_eq!(ads.len(), 1);
    }

    #[tokio::test]
    async fn unauthorized_clears_token() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .returning(|_| Box::pin(async { status(401, r#"{"detail": "Token expired"}"#) }));

        let client = ApiClient::new(mock, MemoryTokenStore::with_token("stale"));
        let err = client.list_notifications().await.unwrap_err();

        assert_eq!(
            err,
            ApiError::Status {
                status: 401,
                message: "Token expired".to_string()
            }
        );
        assert!(!client.is_authenticated());
    }

    #[tokio::test]
    async fn server_error_keeps_token() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .returning(|_| Box::pin(async { status(500, "Internal Server Error") }));

        let client = ApiClient::new(mock, MemoryTokenStore::with_token("t"));
        let err = client.analytics_summary().await.unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert!(client.is_authenticated());
    }

    #[tokio::test]
    async fn transport_errors_pass_through() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .returning(|_| Box::pin(async { Err(ApiError::Timeout) }));

        let client = ApiClient::new(mock, MemoryTokenStore::default());
        assert_eq!(client.list_rankings().await.unwrap_err(), ApiError::Timeout);
    }

    #[tokio::test]
    async fn post_sends_json_body_with_content_type() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .withf(|req| {
                let body: serde_json::Value =
                    serde_json::from_str(req.body.as_deref().unwrap_or("null")).unwrap();
                req.method == HttpMethod::Post
                    && req.path == "/api/v1/creative/generate"
                    && req.header("content-type") == Some("application/json")
                    && body["product_name"] == "Serum"
                    && body["platform"] == "instagram"
            })
            .returning(|_| {
                Box::pin(async {
                    ok(r#"{"creatives": [{"headline": "Glow", "body": "Try it"}]}"#)
                })
            });

        let client = ApiClient::new(mock, MemoryTokenStore::default());
        let response = client
            .generate_creative(&CreativeRequest {
                product_name: "Serum".to_string(),
                target_audience: "30s".to_string(),
                tone: "friendly".to_string(),
                platform: Platform::Instagram,
                count: 1,
            })
            .await
            .unwrap();
        assert_eq!(response.creatives.len(), 1);
        assert_eq!(response.creatives[0].headline, "Glow");
    }

    #[tokio::test]
    async fn invalid_creative_request_never_reaches_transport() {
        let mock = MockTransport::new();
        let client = ApiClient::new(mock, MemoryTokenStore::default());
        let err = client
            .generate_creative(&CreativeRequest {
                product_name: String::new(),
                target_audience: String::new(),
                tone: String::new(),
                platform: Platform::Other,
                count: 1,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn delete_accepts_empty_body() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .withf(|req| req.method == HttpMethod::Delete && req.path == "/api/v1/ads/saved/s1")
            .returning(|_| Box::pin(async { status(204, "") }));

        let client = ApiClient::new(mock, MemoryTokenStore::default());
        client.remove_saved("s1").await.unwrap();
    }

    #[tokio::test]
    async fn login_stores_token_then_fetches_user() {
        let mut mock = MockTransport::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|req| req.path == "/api/v1/auth/login" && req.header("Authorization").is_none())
            .returning(|_| Box::pin(async { ok(r#"{"access_token": "fresh"}"#) }));
        mock.expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|req| {
                req.path == "/api/v1/auth/me" && req.header("Authorization") == Some("Bearer fresh")
            })
            .returning(|_| Box::pin(async { ok(r#"{"id": "u1", "email": "a@b.c"}"#) }));

        let client = ApiClient::new(mock, MemoryTokenStore::default());
        let user = client
            .login(&LoginRequest {
                email: "a@b.c".to_string(),
                password: "pw".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.id, "u1");
        assert_eq!(client.tokens().get().as_deref(), Some("fresh"));

        client.logout();
        assert!(!client.is_authenticated());
    }

    #[tokio::test]
    async fn analyze_landing_page_requires_http_url() {
        let mock = MockTransport::new();
        let client = ApiClient::new(mock, MemoryTokenStore::default());
        let err = client.analyze_landing_page("example.com").await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .returning(|_| Box::pin(async { ok("<html>oops</html>") }));

        let client = ApiClient::new(mock, MemoryTokenStore::default());
        let err = client.get_ad("a1").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn gateway_timeout_becomes_timeout() {
        let mut mock = MockTransport::new();
        mock.expect_send().returning(|_| {
            Box::pin(async {
                status(504, r#"{"error": "timeout", "message": "Upstream request timed out"}"#)
            })
        });

        let client = ApiClient::new(mock, MemoryTokenStore::default());
        assert_eq!(client.list_competitors().await.unwrap_err(), ApiError::Timeout);
    }

    #[tokio::test]
    async fn gateway_connection_error_becomes_network() {
        let mut mock = MockTransport::new();
        mock.expect_send().returning(|_| {
            Box::pin(async {
                status(
                    502,
                    r#"{"error": "connection_error", "message": "Upstream connection failed: refused"}"#,
                )
            })
        });

        let client = ApiClient::new(mock, MemoryTokenStore::default());
        let err = client.list_landing_pages().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)), "{err:?}");
    }

    #[tokio::test]
    async fn backend_502_without_gateway_marker_is_status() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .returning(|_| Box::pin(async { status(502, "Bad Gateway") }));

        let client = ApiClient::new(mock, MemoryTokenStore::default());
        let err = client.list_landing_pages().await.unwrap_err();
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn error_detail_prefers_known_keys() {
        assert_eq!(error_detail(r#"{"detail": "nope"}"#), "nope");
        assert_eq!(error_detail(r#"{"message": "bad"}"#), "bad");
        assert_eq!(error_detail(r#"{"error": "worse"}"#), "worse");
        assert_eq!(error_detail(r#"{"detail": [1, 2]}"#), "");
        assert_eq!(error_detail("Bad Gateway\n"), "Bad Gateway");
    }
}
