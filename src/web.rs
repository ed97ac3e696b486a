use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::api;
use crate::config::UvMapConfig;
use crate::service::ForecastService;

/// Full application router with the service injected as state
pub fn app(service: Arc<ForecastService>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::router(service).layer(cors)
}

pub async fn run(config: &UvMapConfig) -> Result<()> {
    let service = Arc::new(ForecastService::from_config(config)?);
    let app = app(service);

    let addr = config.listen_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(
        "Web server running at http://localhost:{} (merge mode {:?})",
        config.server.port,
        config.view.merge_mode
    );
    axum::serve(listener, app)
        .await
        .context("Web server terminated")?;
    Ok(())
}
