//! Configuration types for the gateway

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Listener and static hosting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the compiled dashboard (index.html + pkg/)
    #[serde(default)]
    pub site_root: Option<PathBuf>,
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            site_root: None,
            environment: default_environment(),
        }
    }
}

/// Backend API the proxy forwards to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_backend_url")]
    pub url: String,
    #[serde(default = "default_proxy_timeout", with = "humantime_serde")]
    pub proxy_timeout: Duration,
    #[serde(default = "default_health_timeout", with = "humantime_serde")]
    pub health_timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            proxy_timeout: default_proxy_timeout(),
            health_timeout: default_health_timeout(),
        }
    }
}

impl BackendConfig {
    /// Join an origin-relative path onto the backend URL
    pub fn url_for(&self, path_and_query: &str) -> String {
        let base = self.url.trim_end_matches('/');
        if path_and_query.starts_with('/') {
            format!("{base}{path_and_query}")
        } else {
            format!("{base}/{path_and_query}")
        }
    }
}

impl Config {
    pub fn validate(&self) -> crate::Result<()> {
        let url = self.backend.url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(crate::GatewayError::Config(format!(
                "backend url must start with http:// or https://, got {:?}",
                self.backend.url
            )));
        }
        if self.backend.proxy_timeout.is_zero() || self.backend.health_timeout.is_zero() {
            return Err(crate::GatewayError::Config(
                "timeouts must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_port() -> u16 {
    3000
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_proxy_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_health_timeout() -> Duration {
    Duration::from_secs(5)
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::GatewayError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
