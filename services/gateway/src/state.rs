//! Shared state handed to every request handler

use std::sync::Arc;

use crate::config::BackendConfig;
use crate::io::Upstream;

/// Immutable per-process state; cloning is cheap
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn Upstream>,
    pub backend: Arc<BackendConfig>,
    pub environment: Arc<str>,
}

impl AppState {
    pub fn new(upstream: Arc<dyn Upstream>, backend: BackendConfig, environment: &str) -> Self {
        Self {
            upstream,
            backend: Arc::new(backend),
            environment: Arc::from(environment),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("backend", &self.backend)
            .field("environment", &self.environment)
            .finish()
    }
}
