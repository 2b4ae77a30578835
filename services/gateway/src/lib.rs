//! AdIntel gateway
//!
//! Forwards `/api/*` from the dashboard to the backend REST service,
//! reports combined health at `/api/health`, and serves the compiled
//! single-page app.

pub mod config;
pub mod error;
pub mod health;
pub mod io;
pub mod proxy;
pub mod server;
pub mod state;

pub use config::{load_config, Config};
pub use error::{GatewayError, Result};

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::io::{ReqwestUpstream, Upstream};
use crate::state::AppState;

/// Run the gateway with the given configuration until Ctrl+C
pub async fn run(config: Config) -> Result<()> {
    config.validate()?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Gateway listening on http://{}", listener.local_addr()?);

    let cancel = CancellationToken::new();
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for ctrl-c");
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    serve(listener, config, cancel).await
}

/// Serve on an already bound listener until `cancel` fires
pub async fn serve(listener: TcpListener, config: Config, cancel: CancellationToken) -> Result<()> {
    let upstream: Arc<dyn Upstream> = Arc::new(ReqwestUpstream::new()?);
    tracing::info!(
        "Proxying /api/* to {} (timeout {})",
        config.backend.url,
        humantime::format_duration(config.backend.proxy_timeout)
    );

    let state = AppState::new(upstream, config.backend.clone(), &config.server.environment);
    let router = server::build_router(state, config.server.site_root.as_deref());

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::info!("Gateway stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn serve_stops_on_cancel() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(serve(listener, Config::default(), cancel.clone()));

        cancel.cancel();
        let result = tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("serve did not stop")
            .unwrap();
        tokio_test::assert_ok!(result);
    }

    #[tokio::test]
    async fn run_rejects_invalid_config() {
        let mut config = Config::default();
        config.backend.url = "ftp://backend".to_string();
        let err = run(config).await.unwrap_err();
        assert!(matches!(err, GatewayError::Config(_)));
    }
}
