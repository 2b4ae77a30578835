//! Request-scoped mirrors of backend records
//!
//! The backend owns every entity; these types only describe the JSON the
//! dashboard reads and writes. Unknown fields are ignored and missing
//! optional fields default so older or newer backends still decode.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Decode an explicit `null` the same way as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ad platform. Unrecognised values decode as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Youtube,
    Tiktok,
    Instagram,
    Facebook,
    X,
    Line,
    #[default]
    #[serde(other)]
    Other,
}

impl Platform {
    pub const ALL: [Platform; 7] = [
        Platform::Youtube,
        Platform::Tiktok,
        Platform::Instagram,
        Platform::Facebook,
        Platform::X,
        Platform::Line,
        Platform::Other,
    ];

    /// Wire value, as used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Youtube => "youtube",
            Platform::Tiktok => "tiktok",
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::X => "x",
            Platform::Line => "line",
            Platform::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Platform> {
        Platform::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Platform::Youtube => "YouTube",
            Platform::Tiktok => "TikTok",
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::X => "X",
            Platform::Line => "LINE",
            Platform::Other => "Other",
        };
        f.write_str(label)
    }
}

/// A crawled advertisement
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Ad {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub platform: Platform,
    #[serde(deserialize_with = "null_as_default")]
    pub advertiser: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub media_type: Option<String>,
    pub media_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub landing_page_url: Option<String>,
    pub first_seen_at: Option<String>,
    pub last_seen_at: Option<String>,
    pub impressions: Option<u64>,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
}

/// AI-generated analysis of an ad
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdAnalysis {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ad_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    pub hook: Option<String>,
    pub target_audience: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub appeal_points: Vec<String>,
    pub tone: Option<String>,
    pub score: Option<f64>,
    pub created_at: Option<String>,
}

/// Backend-classified appeal category of a landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UspCategory {
    Price,
    Quality,
    Speed,
    Trust,
    Exclusivity,
    Convenience,
    #[default]
    #[serde(other)]
    Other,
}

impl fmt::Display for UspCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UspCategory::Price => "Price",
            UspCategory::Quality => "Quality",
            UspCategory::Speed => "Speed",
            UspCategory::Trust => "Trust",
            UspCategory::Exclusivity => "Exclusivity",
            UspCategory::Convenience => "Convenience",
            UspCategory::Other => "Other",
        };
        f.write_str(label)
    }
}

/// A scored landing page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingPage {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    pub title: Option<String>,
    pub advertiser: Option<String>,
    pub quality_score: Option<f64>,
    pub conversion_score: Option<f64>,
    pub trust_score: Option<f64>,
    pub usp_category: Option<UspCategory>,
    pub usp_summary: Option<String>,
    pub analyzed_at: Option<String>,
}

impl LandingPage {
    /// Mean of whichever scores the backend supplied
    pub fn overall_score(&self) -> Option<f64> {
        let scores: Vec<f64> = [self.quality_score, self.conversion_score, self.trust_score]
            .into_iter()
            .flatten()
            .collect();
        if scores.is_empty() {
            None
        } else {
            Some(scores.iter().sum::<f64>() / scores.len() as f64)
        }
    }
}

/// Body of `POST /lp-analysis/analyze`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LpAnalyzeRequest {
    pub url: String,
}

/// Input to the creative generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreativeRequest {
    pub product_name: String,
    pub target_audience: String,
    pub tone: String,
    pub platform: Platform,
    pub count: u8,
}

impl CreativeRequest {
    pub const MAX_COUNT: u8 = 10;

    pub fn validate(&self) -> crate::Result<()> {
        if self.product_name.trim().is_empty() {
            return Err(crate::ApiError::Validation(
                "product name is required".to_string(),
            ));
        }
        if self.count == 0 || self.count > Self::MAX_COUNT {
            return Err(crate::ApiError::Validation(format!(
                "count must be between 1 and {}",
                Self::MAX_COUNT
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Creative {
    #[serde(deserialize_with = "null_as_default")]
    pub headline: String,
    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
    pub call_to_action: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreativeResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub creatives: Vec<Creative>,
}

/// Predicted performance of an ad
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Prediction {
    #[serde(deserialize_with = "null_as_default")]
    pub ad_id: String,
    pub predicted_ctr: Option<f64>,
    pub predicted_cvr: Option<f64>,
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub total_ads: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_advertisers: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub analyzed_ads: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub analyzed_landing_pages: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub by_platform: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Ranking {
    #[serde(deserialize_with = "null_as_default")]
    pub rank: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub advertiser: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ad_count: u64,
    pub score: Option<f64>,
}

/// A tracked competitor for LP competitive intelligence
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Competitor {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub domain: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub ad_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub landing_page_count: u64,
    pub last_activity_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Success,
    Warning,
    Error,
    #[default]
    #[serde(other)]
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub level: NotificationLevel,
    #[serde(deserialize_with = "null_as_default")]
    pub read: bool,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    #[serde(deserialize_with = "null_as_default")]
    pub email_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub slack_enabled: bool,
    pub slack_webhook_url: Option<String>,
    pub digest_frequency: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavedItemType {
    #[default]
    Ad,
    LandingPage,
    Creative,
    #[serde(other)]
    Other,
}

/// An item the user bookmarked
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedItem {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub item_type: SavedItemType,
    #[serde(deserialize_with = "null_as_default")]
    pub item_id: String,
    pub title: Option<String>,
    pub note: Option<String>,
    pub saved_at: Option<String>,
}

/// Body of `POST /ads/saved`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveItemRequest {
    pub item_type: SavedItemType,
    pub item_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Configuration status of one third-party API key
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiKeyStatus {
    #[serde(deserialize_with = "null_as_default")]
    pub provider: String,
    #[serde(deserialize_with = "null_as_default")]
    pub configured: bool,
    pub masked_key: Option<String>,
    pub last_validated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyUpdate {
    pub provider: String,
    pub api_key: String,
}

impl ApiKeyUpdate {
    pub fn validate(&self) -> crate::Result<()> {
        if self.provider.trim().is_empty() {
            return Err(crate::ApiError::Validation("provider is required".into()));
        }
        if self.api_key.trim().is_empty() {
            return Err(crate::ApiError::Validation("API key is required".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    pub name: Option<String>,
}
