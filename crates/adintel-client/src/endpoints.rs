//! Typed catalog of backend endpoints
//!
//! Every functional endpoint lives under `/api/v1`. [`Endpoint::path`]
//! renders the full origin-relative path including that prefix, with
//! caller-supplied segments percent-encoded.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::Platform;
use crate::transport::HttpMethod;

/// Prefix shared by all functional endpoints
pub const API_PREFIX: &str = "/api/v1";

/// Characters left unescaped in path segments and query values
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Filters for the ad list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdQuery {
    pub platform: Option<Platform>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl AdQuery {
    /// Render as `?key=value&...`, or an empty string when no filter is set
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        if let Some(platform) = self.platform {
            pairs.push(format!("platform={}", platform.as_str()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            pairs.push(format!("search={}", encode(search.trim())));
        }
        if let Some(page) = self.page {
            pairs.push(format!("page={page}"));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(format!("per_page={per_page}"));
        }
        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}

/// One backend operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    // ads
    ListAds(AdQuery),
    GetAd(String),
    GetAdAnalysis(String),
    AnalyzeAd(String),
    ListSaved,
    SaveItem,
    RemoveSaved(String),
    // creative
    GenerateCreative,
    // predictions
    GetPrediction(String),
    // analytics
    AnalyticsSummary,
    // lp-analysis
    ListLandingPages,
    GetLandingPage(String),
    AnalyzeLandingPage,
    // rankings
    ListRankings,
    // notifications
    ListNotifications,
    MarkNotificationRead(String),
    DeleteNotification(String),
    // competitive
    ListCompetitors,
    CompetitorLandingPages(String),
    // settings
    GetApiKeys,
    UpdateApiKey,
    DeleteApiKey(String),
    GetNotificationSettings,
    UpdateNotificationSettings,
    // auth
    Login,
    Me,
}

impl Endpoint {
    pub fn method(&self) -> HttpMethod {
        use Endpoint::*;
        match self {
            ListAds(_) | GetAd(_) | GetAdAnalysis(_) | ListSaved | GetPrediction(_)
            | AnalyticsSummary | ListLandingPages | GetLandingPage(_) | ListRankings
            | ListNotifications | ListCompetitors | CompetitorLandingPages(_) | GetApiKeys
            | GetNotificationSettings | Me => HttpMethod::Get,
            AnalyzeAd(_) | SaveItem | GenerateCreative | AnalyzeLandingPage
            | MarkNotificationRead(_) | Login => HttpMethod::Post,
            UpdateApiKey | UpdateNotificationSettings => HttpMethod::Put,
            RemoveSaved(_) | DeleteNotification(_) | DeleteApiKey(_) => HttpMethod::Delete,
        }
    }

    /// Full origin-relative path, e.g. `/api/v1/ads/abc/analysis`
    pub fn path(&self) -> String {
        use Endpoint::*;
        let relative = match self {
            ListAds(query) => format!("/ads{}", query.to_query_string()),
            GetAd(id) => format!("/ads/{}", encode(id)),
            GetAdAnalysis(id) => format!("/ads/{}/analysis", encode(id)),
            AnalyzeAd(id) => format!("/ads/{}/analyze", encode(id)),
            ListSaved | SaveItem => "/ads/saved".to_string(),
            RemoveSaved(id) => format!("/ads/saved/{}", encode(id)),
            GenerateCreative => "/creative/generate".to_string(),
            GetPrediction(ad_id) => format!("/predictions/{}", encode(ad_id)),
            AnalyticsSummary => "/analytics/summary".to_string(),
            ListLandingPages => "/lp-analysis".to_string(),
            GetLandingPage(id) => format!("/lp-analysis/{}", encode(id)),
            AnalyzeLandingPage => "/lp-analysis/analyze".to_string(),
            ListRankings => "/rankings".to_string(),
            ListNotifications => "/notifications".to_string(),
            MarkNotificationRead(id) => format!("/notifications/{}/read", encode(id)),
            DeleteNotification(id) => format!("/notifications/{}", encode(id)),
            ListCompetitors => "/competitive/competitors".to_string(),
            CompetitorLandingPages(id) => {
                format!("/competitive/competitors/{}/landing-pages", encode(id))
            }
            GetApiKeys | UpdateApiKey => "/settings/api-keys".to_string(),
            DeleteApiKey(provider) => format!("/settings/api-keys/{}", encode(provider)),
            GetNotificationSettings | UpdateNotificationSettings => {
                "/settings/notifications".to_string()
            }
            Login => "/auth/login".to_string(),
            Me => "/auth/me".to_string(),
        };
        format!("{API_PREFIX}{relative}")
    }
}
